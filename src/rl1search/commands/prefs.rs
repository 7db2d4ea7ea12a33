use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::PrefStore;

/// Raw stored preferences, key by key.
pub fn show<S: PrefStore>(session: &Session<S>) -> Result<CmdResult> {
    let entries = session.store().entries()?;
    let mut result = CmdResult::default().with_entries(entries);
    if result.entries.is_empty() {
        result.add_message(CmdMessage::info("No preferences stored; defaults apply."));
    }
    Ok(result)
}

pub fn reset<S: PrefStore>(session: &mut Session<S>) -> Result<CmdResult> {
    session.reset_preferences()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Preferences reset to defaults"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attribute;
    use crate::catalog::Catalog;
    use crate::prefs::keys;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn show_returns_stored_entries() {
        let fixture = StoreFixture::new().with(keys::SHOW_DLC, "false");
        let s = Session::new(Catalog::bundled(), fixture.store, 10).unwrap();
        let result = show(&s).unwrap();
        assert!(result
            .entries
            .contains(&(keys::SHOW_DLC.to_string(), "false".to_string())));
    }

    #[test]
    fn reset_restores_defaults() {
        let fixture = StoreFixture::new().with_stats(40);
        let mut s = Session::new(Catalog::bundled(), fixture.store, 10).unwrap();
        reset(&mut s).unwrap();
        assert_eq!(s.attributes().stats.get(Attribute::Faith), 10);
        assert_eq!(s.store().get(keys::FAITH).unwrap(), None);
    }
}
