use super::{CmdMessage, CmdResult};
use crate::attributes::Attribute;
use crate::error::{Result, Rl1Error};
use crate::session::Session;
use crate::store::PrefStore;

/// Details of one item, plus whether the player can use it.
pub fn run<S: PrefStore>(session: &Session<S>, name: &str) -> Result<CmdResult> {
    let item = session
        .catalog()
        .find(name)
        .ok_or_else(|| Rl1Error::Api(format!("No item named '{}'", name.trim())))?;
    let attrs = *session.attributes();

    let mut result = CmdResult::default()
        .with_items(vec![item.clone()])
        .with_attributes(attrs);

    let unmet: Vec<String> = Attribute::ALL
        .into_iter()
        .filter(|a| item.is_weapon() || !matches!(a, Attribute::Strength | Attribute::Dexterity))
        .filter_map(|a| {
            let needed = attrs.requirement(item, a);
            let have = attrs.stats.get(a);
            (needed > have).then(|| format!("{} {} (you have {})", a, needed, have))
        })
        .collect();

    if unmet.is_empty() {
        result.add_message(CmdMessage::success("You meet every requirement."));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Requirements not met: {}",
            unmet.join(", ")
        )));
    }
    Ok(result)
}
