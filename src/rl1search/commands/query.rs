use super::{resolve_label, CmdMessage, CmdResult, Listing};
use crate::error::{Result, Rl1Error};
use crate::filter::SelectionSet;
use crate::model::{DataType, ATTACK_TYPES, DAMAGE_TYPES, SPELL_CATEGORIES, STATUS_BUILDUPS, WEAPON_CATEGORIES};
use crate::session::Session;
use crate::store::PrefStore;

/// The transient filters of one query. Empty selections leave the session's
/// selection as it is; `None` leaves the corresponding setting untouched.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub search: Option<String>,
    pub data_type: Option<DataType>,
    pub categories: Vec<String>,
    pub damage_types: Vec<String>,
    pub attack_types: Vec<String>,
    pub status_buildups: Vec<String>,
    pub one_handed: bool,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// Applies `opts` to the session and returns the resulting page.
///
/// Filters go in first so that their page resets happen before the
/// requested page is selected.
pub fn run<S: PrefStore>(session: &mut Session<S>, opts: &QueryOptions) -> Result<CmdResult> {
    if let Some(search) = &opts.search {
        session.set_search(search.clone());
    }
    if let Some(data_type) = opts.data_type {
        session.set_data_type(data_type);
    }
    if !opts.categories.is_empty() {
        let domain = WEAPON_CATEGORIES.iter().chain(SPELL_CATEGORIES.iter()).copied();
        session.set_categories(selection("category", &opts.categories, domain)?);
    }
    if !opts.damage_types.is_empty() {
        session.set_damage_types(selection("damage type", &opts.damage_types, DAMAGE_TYPES)?);
    }
    if !opts.attack_types.is_empty() {
        session.set_attack_types(selection("attack type", &opts.attack_types, ATTACK_TYPES)?);
    }
    if !opts.status_buildups.is_empty() {
        session.set_status_buildups(selection(
            "status buildup",
            &opts.status_buildups,
            STATUS_BUILDUPS,
        )?);
    }
    if opts.one_handed {
        session.set_two_handed(false);
    }
    if let Some(size) = opts.page_size {
        session.set_page_size(size);
    }
    if let Some(page) = opts.page {
        session.set_page(page);
    }

    let mut result = CmdResult::default().with_listing(listing(session));
    let total_pages = session.total_pages();
    let page = session.page().page();
    if total_pages > 0 && page > total_pages {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is past the last page ({}).",
            page, total_pages
        )));
    }
    Ok(result)
}

/// The current page of `session` without changing anything.
pub fn listing<S: PrefStore>(session: &Session<S>) -> Listing {
    let page = session.page();
    Listing {
        rows: session.paginated_items().into_iter().cloned().collect(),
        columns: session.columns().to_vec(),
        page: page.page(),
        page_size: page.page_size(),
        total_pages: session.total_pages(),
        total_matches: session.filtered_count(),
        sort: session.sort(),
        attributes: *session.attributes(),
    }
}

fn selection<'a>(
    what: &str,
    inputs: &[String],
    domain: impl IntoIterator<Item = &'a str> + Clone,
) -> Result<SelectionSet> {
    inputs
        .iter()
        .map(|input| {
            resolve_label(input, domain.clone())
                .ok_or_else(|| Rl1Error::Api(format!("Unknown {}: {}", what, input)))
        })
        .collect()
}
