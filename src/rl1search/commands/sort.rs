use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::sort::{Column, SortDirection, SortState};
use crate::store::PrefStore;

/// Changes the sort, or reports it when both arguments are `None`.
///
/// A column without a direction behaves like a header click: the same
/// column flips direction, a new column starts ascending.
pub fn run<S: PrefStore>(
    session: &mut Session<S>,
    column: Option<Column>,
    direction: Option<SortDirection>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match (column, direction) {
        (None, None) => {}
        (Some(column), _) if !column.is_sortable() => {
            result.add_message(CmdMessage::warning(format!(
                "{} cannot be sorted; keeping {}",
                column,
                describe(session.sort())
            )));
            return Ok(result);
        }
        (Some(column), None) => {
            session.click_column(column)?;
        }
        (column, Some(direction)) => {
            let column = column.unwrap_or(session.sort().column);
            session.set_sort(SortState { column, direction })?;
        }
    }
    result.add_message(CmdMessage::info(format!(
        "Sorted by {}",
        describe(session.sort())
    )));
    Ok(result)
}

fn describe(sort: SortState) -> String {
    format!("{} ({})", sort.column, sort.direction)
}
