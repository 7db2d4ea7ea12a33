use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::PrefStore;
use crate::theme::EndingTheme;

/// Every theme as `(id, name)`, with the active one in `theme`.
pub fn show<S: PrefStore>(session: &Session<S>) -> Result<CmdResult> {
    let entries = EndingTheme::ALL
        .into_iter()
        .map(|t| (t.id().to_string(), t.name().to_string()))
        .collect();
    Ok(CmdResult::default()
        .with_entries(entries)
        .with_theme(session.theme()))
}

pub fn set<S: PrefStore>(session: &mut Session<S>, theme: EndingTheme) -> Result<CmdResult> {
    session.set_theme(theme)?;
    Ok(applied(theme))
}

pub fn cycle<S: PrefStore>(session: &mut Session<S>) -> Result<CmdResult> {
    let theme = session.cycle_theme()?;
    Ok(applied(theme))
}

fn applied(theme: EndingTheme) -> CmdResult {
    let mut result = CmdResult::default().with_theme(theme);
    result.add_message(CmdMessage::success(format!(
        "{} {}: {}",
        theme.icon(),
        theme.name(),
        theme.description()
    )));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::prefs::keys;
    use crate::store::memory::InMemoryStore;

    fn session() -> Session<InMemoryStore> {
        Session::new(Catalog::bundled(), InMemoryStore::new(), 10).unwrap()
    }

    #[test]
    fn show_lists_every_theme() {
        let s = session();
        let result = show(&s).unwrap();
        assert_eq!(result.entries.len(), EndingTheme::ALL.len());
        assert_eq!(result.theme, Some(EndingTheme::default()));
    }

    #[test]
    fn set_and_cycle_persist() {
        let mut s = session();
        set(&mut s, EndingTheme::AgeOfStars).unwrap();
        assert_eq!(s.store().get(keys::THEME).unwrap().as_deref(), Some("age-of-stars"));
        let next = cycle(&mut s).unwrap().theme.unwrap();
        assert_eq!(next, EndingTheme::AgeOfStars.next());
        assert_eq!(s.theme(), next);
    }
}
