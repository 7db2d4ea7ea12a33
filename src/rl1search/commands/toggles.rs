use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::PrefStore;

pub fn set_show_dlc<S: PrefStore>(session: &mut Session<S>, show: bool) -> Result<CmdResult> {
    session.set_show_dlc(show)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(if show {
        "DLC items are shown"
    } else {
        "DLC items are hidden"
    }));
    Ok(result)
}

pub fn set_hide_shields<S: PrefStore>(session: &mut Session<S>, hide: bool) -> Result<CmdResult> {
    session.set_hide_shields(hide)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(if hide {
        "Shields are hidden"
    } else {
        "Shields are shown"
    }));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::commands::query;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn hiding_dlc_removes_dlc_rows() {
        let fixture = StoreFixture::new().ignoring_requirements();
        let mut s = Session::new(Catalog::bundled(), fixture.store, 500).unwrap();
        set_show_dlc(&mut s, false).unwrap();
        let listing = query::listing(&s);
        assert!(listing.rows.iter().all(|i| !i.dlc_exclusive));
    }

    #[test]
    fn hiding_shields_removes_shield_rows() {
        let fixture = StoreFixture::new().ignoring_requirements();
        let mut s = Session::new(Catalog::bundled(), fixture.store, 500).unwrap();
        set_hide_shields(&mut s, true).unwrap();
        let listing = query::listing(&s);
        assert!(listing.rows.iter().all(|i| !i.is_shield()));
        assert!(s.filter().hide_shields());
    }
}
