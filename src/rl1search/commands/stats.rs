use super::{CmdMessage, CmdResult};
use crate::attributes::Attribute;
use crate::error::Result;
use crate::session::Session;
use crate::store::PrefStore;

pub fn show<S: PrefStore>(session: &Session<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_attributes(*session.attributes()))
}

pub fn set<S: PrefStore>(session: &mut Session<S>, values: &[(Attribute, u32)]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for &(attribute, value) in values {
        let before = session.attributes().stats.get(attribute);
        session.set_attribute(attribute, value)?;
        if before == value {
            result.add_message(CmdMessage::info(format!("{} is already {}", attribute, value)));
        } else {
            result.add_message(CmdMessage::success(format!(
                "{}: {} -> {}",
                attribute, before, value
            )));
        }
    }
    Ok(result.with_attributes(*session.attributes()))
}

pub fn reset<S: PrefStore>(session: &mut Session<S>) -> Result<CmdResult> {
    session.reset_attributes()?;
    let mut result = CmdResult::default().with_attributes(*session.attributes());
    result.add_message(CmdMessage::success("All attributes reset to 10"));
    Ok(result)
}

pub fn set_ignore_requirements<S: PrefStore>(session: &mut Session<S>, ignore: bool) -> Result<CmdResult> {
    session.set_ignore_requirements(ignore)?;
    let mut result = CmdResult::default().with_attributes(*session.attributes());
    result.add_message(CmdMessage::success(if ignore {
        "Ignoring attribute requirements"
    } else {
        "Filtering by attribute requirements"
    }));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::commands::MessageLevel;
    use crate::prefs::keys;
    use crate::store::memory::InMemoryStore;

    fn session() -> Session<InMemoryStore> {
        Session::new(Catalog::bundled(), InMemoryStore::new(), 10).unwrap()
    }

    #[test]
    fn set_persists_and_reports() {
        let mut s = session();
        let result = set(&mut s, &[(Attribute::Strength, 30), (Attribute::Faith, 10)]).unwrap();
        assert_eq!(result.attributes.unwrap().stats.strength, 30);
        assert!(matches!(result.messages[0].level, MessageLevel::Success));
        assert!(matches!(result.messages[1].level, MessageLevel::Info));
        assert_eq!(s.store().get(keys::STRENGTH).unwrap().as_deref(), Some("30"));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut s = session();
        set(&mut s, &[(Attribute::Arcane, 50)]).unwrap();
        let result = reset(&mut s).unwrap();
        assert_eq!(result.attributes.unwrap().stats.arcane, 10);
    }

    #[test]
    fn ignore_toggle_is_persisted() {
        let mut s = session();
        set_ignore_requirements(&mut s, true).unwrap();
        assert_eq!(s.store().get(keys::IGNORE_STATS).unwrap().as_deref(), Some("true"));
    }
}
