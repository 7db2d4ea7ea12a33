use super::CmdResult;
use crate::error::Result;
use crate::model::DataType;
use crate::session::Session;
use crate::store::PrefStore;

/// Category labels selectable under `data_type` (or the session's scope) and
/// the shield toggle.
pub fn run<S: PrefStore>(session: &mut Session<S>, data_type: Option<DataType>) -> Result<CmdResult> {
    if let Some(data_type) = data_type {
        session.set_data_type(data_type);
    }
    let labels = session
        .category_options()
        .into_iter()
        .map(String::from)
        .collect();
    Ok(CmdResult::default().with_labels(labels))
}
