use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::sort::Column;
use crate::store::PrefStore;

fn visible<S: PrefStore>(session: &Session<S>) -> Vec<String> {
    session.columns().iter().map(|c| c.label().to_string()).collect()
}

pub fn show<S: PrefStore>(session: &Session<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_labels(visible(session)))
}

pub fn toggle<S: PrefStore>(session: &mut Session<S>, columns: &[Column]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for &column in columns {
        let shown = session.toggle_column(column)?;
        result.add_message(CmdMessage::success(format!(
            "{} {}",
            column,
            if shown { "shown" } else { "hidden" }
        )));
    }
    if session.columns().is_empty() {
        result.add_message(CmdMessage::warning("No columns are visible"));
    }
    Ok(result.with_labels(visible(session)))
}

/// Shows exactly `columns`, in canonical order.
pub fn set<S: PrefStore>(session: &mut Session<S>, columns: &[Column]) -> Result<CmdResult> {
    session.set_columns(columns)?;
    Ok(CmdResult::default().with_labels(visible(session)))
}

pub fn reset<S: PrefStore>(session: &mut Session<S>) -> Result<CmdResult> {
    session.set_columns(&Column::ALL)?;
    let mut result = CmdResult::default().with_labels(visible(session));
    result.add_message(CmdMessage::success("All columns visible"));
    Ok(result)
}
