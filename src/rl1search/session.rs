//! # Session
//!
//! The context object that owns all mutable state of one run: attributes,
//! filters, sort, page, visible columns and theme, plus the derived view.
//!
//! ## Recomputation
//!
//! Every mutator runs the same sequence before returning:
//!
//! ```text
//! update state → filtered indices → sorted indices → page reset? → persist
//! ```
//!
//! The derived view is cached and rebuilt in one step, so readers never see
//! a filtered list that disagrees with the sorted one or a page computed from
//! stale inputs.
//!
//! ## Page Reset
//!
//! The page returns to 1 when attributes, the DLC toggle, the damage-type
//! selection, the attack-type selection, the sort column or the sort
//! direction actually change. Search text, category, data type, status
//! buildup and the other toggles leave the page where it was.
//!
//! ## Persistence
//!
//! Attribute values, ignore-requirements, show-DLC, hide-shields, visible
//! columns, sort and theme are written through the [`PrefStore`] as they
//! change. Search text, selections, data type, page and two-handed
//! accounting live only as long as the session.

use crate::attributes::{Attribute, AttributeState, Stats};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::filter::{filter_indices, FilterState, SelectionSet};
use crate::model::{DataType, Item};
use crate::paginate::PageState;
use crate::prefs::{self, keys, Preferences};
use crate::sort::{sort_indices, Column, SortState};
use crate::store::PrefStore;
use crate::theme::EndingTheme;

#[derive(Debug, Default)]
struct View {
    filtered: Vec<usize>,
    sorted: Vec<usize>,
}

pub struct Session<S: PrefStore> {
    catalog: Catalog,
    store: S,
    attrs: AttributeState,
    filter: FilterState,
    sort: SortState,
    page: PageState,
    columns: Vec<Column>,
    theme: EndingTheme,
    view: View,
}

impl<S: PrefStore> Session<S> {
    /// Loads (and migrates) preferences from `store` and computes the
    /// initial view.
    pub fn new(catalog: Catalog, mut store: S, page_size: usize) -> Result<Self> {
        let prefs = Preferences::load(&mut store)?;
        let mut session = Self {
            catalog,
            store,
            attrs: AttributeState::default(),
            filter: FilterState::default(),
            sort: SortState::default(),
            page: PageState::new(1, page_size),
            columns: Vec::new(),
            theme: EndingTheme::default(),
            view: View::default(),
        };
        session.apply_preferences(prefs);
        Ok(session)
    }

    fn apply_preferences(&mut self, prefs: Preferences) {
        self.attrs.stats = prefs.stats;
        self.attrs.ignore_requirements = prefs.ignore_requirements;
        self.filter.show_dlc = prefs.show_dlc;
        self.filter.set_hide_shields(prefs.hide_shields);
        self.columns = prefs.columns;
        self.sort = prefs.sort;
        self.theme = prefs.theme;
        self.refresh();
    }

    fn refresh(&mut self) {
        let filtered = filter_indices(&self.catalog, &self.filter, &self.attrs);
        let mut sorted = filtered.clone();
        sort_indices(self.catalog.items(), &mut sorted, self.sort, &self.attrs);
        tracing::debug!(
            filtered = filtered.len(),
            total = self.catalog.len(),
            sort = %self.sort.column,
            "recomputed view"
        );
        self.view = View { filtered, sorted };
    }

    /// Recomputes the view and, when `reset` holds, returns to page 1.
    fn settle(&mut self, reset: bool) {
        self.refresh();
        if reset {
            self.page.reset();
        }
    }

    // --- attributes ---

    pub fn set_attribute(&mut self, attribute: Attribute, value: u32) -> Result<()> {
        let changed = self.attrs.stats.get(attribute) != value;
        self.attrs.stats.set(attribute, value);
        self.settle(changed);
        prefs::write_attribute(&mut self.store, attribute, value)
    }

    pub fn set_stats(&mut self, stats: Stats) -> Result<()> {
        let changed = self.attrs.stats != stats;
        self.attrs.stats = stats;
        self.settle(changed);
        prefs::write_stats(&mut self.store, &stats)
    }

    /// All five attributes back to 10.
    pub fn reset_attributes(&mut self) -> Result<()> {
        self.set_stats(Stats::default())
    }

    pub fn set_two_handed(&mut self, two_handed: bool) {
        self.attrs.two_handed = two_handed;
        self.settle(false);
    }

    pub fn set_ignore_requirements(&mut self, ignore: bool) -> Result<()> {
        self.attrs.ignore_requirements = ignore;
        self.settle(false);
        prefs::write_flag(&mut self.store, keys::IGNORE_STATS, ignore)
    }

    // --- filters ---

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.settle(false);
    }

    pub fn set_data_type(&mut self, data_type: DataType) {
        self.filter.data_type = data_type;
        self.settle(false);
    }

    pub fn set_categories(&mut self, categories: SelectionSet) {
        self.filter.categories = categories;
        self.settle(false);
    }

    pub fn toggle_category(&mut self, category: &str) -> bool {
        let selected = self.filter.categories.toggle(category);
        self.settle(false);
        selected
    }

    pub fn set_damage_types(&mut self, damage_types: SelectionSet) {
        let changed = self.filter.damage_types != damage_types;
        self.filter.damage_types = damage_types;
        self.settle(changed);
    }

    pub fn toggle_damage_type(&mut self, damage_type: &str) -> bool {
        let selected = self.filter.damage_types.toggle(damage_type);
        self.settle(true);
        selected
    }

    pub fn set_attack_types(&mut self, attack_types: SelectionSet) {
        let changed = self.filter.attack_types != attack_types;
        self.filter.attack_types = attack_types;
        self.settle(changed);
    }

    pub fn toggle_attack_type(&mut self, attack_type: &str) -> bool {
        let selected = self.filter.attack_types.toggle(attack_type);
        self.settle(true);
        selected
    }

    pub fn set_status_buildups(&mut self, statuses: SelectionSet) {
        self.filter.status_buildups = statuses;
        self.settle(false);
    }

    pub fn toggle_status_buildup(&mut self, status: &str) -> bool {
        let selected = self.filter.status_buildups.toggle(status);
        self.settle(false);
        selected
    }

    pub fn set_show_dlc(&mut self, show: bool) -> Result<()> {
        let changed = self.filter.show_dlc != show;
        self.filter.show_dlc = show;
        self.settle(changed);
        prefs::write_flag(&mut self.store, keys::SHOW_DLC, show)
    }

    pub fn set_hide_shields(&mut self, hide: bool) -> Result<()> {
        self.filter.set_hide_shields(hide);
        self.settle(false);
        prefs::write_flag(&mut self.store, keys::HIDE_SHIELDS, hide)
    }

    // --- sorting ---

    pub fn set_sort(&mut self, sort: SortState) -> Result<()> {
        let changed = self.sort != sort;
        self.sort = sort;
        self.settle(changed);
        prefs::write_sort(&mut self.store, sort)
    }

    /// Header-click semantics, see [`SortState::click`]. Returns `false` for
    /// non-sortable columns, which change nothing.
    pub fn click_column(&mut self, column: Column) -> Result<bool> {
        let mut sort = self.sort;
        if !sort.click(column) {
            return Ok(false);
        }
        self.set_sort(sort)?;
        Ok(true)
    }

    // --- paging ---

    pub fn set_page(&mut self, page: usize) {
        self.page.set_page(page);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page.set_page_size(page_size);
    }

    pub fn next_page(&mut self) {
        self.page.set_page(self.page.page() + 1);
    }

    pub fn prev_page(&mut self) {
        self.page.set_page(self.page.page().saturating_sub(1));
    }

    // --- columns and theme ---

    /// Replaces the visible columns, keeping canonical order.
    pub fn set_columns(&mut self, columns: &[Column]) -> Result<()> {
        self.columns = Column::ALL
            .into_iter()
            .filter(|c| columns.contains(c))
            .collect();
        prefs::write_columns(&mut self.store, &self.columns)
    }

    /// Shows or hides `column`. Returns whether it is visible afterwards.
    pub fn toggle_column(&mut self, column: Column) -> Result<bool> {
        let mut columns = self.columns.clone();
        let visible = if let Some(pos) = columns.iter().position(|c| *c == column) {
            columns.remove(pos);
            false
        } else {
            columns.push(column);
            true
        };
        self.set_columns(&columns)?;
        Ok(visible)
    }

    pub fn set_theme(&mut self, theme: EndingTheme) -> Result<()> {
        self.theme = theme;
        prefs::write_theme(&mut self.store, theme)
    }

    pub fn cycle_theme(&mut self) -> Result<EndingTheme> {
        let next = self.theme.next();
        self.set_theme(next)?;
        Ok(next)
    }

    /// Forgets every stored preference and returns to defaults.
    pub fn reset_preferences(&mut self) -> Result<()> {
        prefs::clear(&mut self.store)?;
        self.apply_preferences(Preferences::default());
        self.page.reset();
        Ok(())
    }

    // --- readers ---

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn attributes(&self) -> &AttributeState {
        &self.attrs
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn theme(&self) -> EndingTheme {
        self.theme
    }

    /// Items passing every filter, in catalog order.
    pub fn filtered_items(&self) -> Vec<&Item> {
        self.resolve(&self.view.filtered)
    }

    pub fn filtered_count(&self) -> usize {
        self.view.filtered.len()
    }

    pub fn sorted_items(&self) -> Vec<&Item> {
        self.resolve(&self.view.sorted)
    }

    /// The current page of the sorted view. Empty past the last page.
    pub fn paginated_items(&self) -> Vec<&Item> {
        let range = self.page.range(self.view.sorted.len());
        self.resolve(&self.view.sorted[range])
    }

    /// Zero when nothing matches.
    pub fn total_pages(&self) -> usize {
        self.page.total_pages(self.view.filtered.len())
    }

    pub fn category_options(&self) -> Vec<&'static str> {
        self.filter.category_options()
    }

    fn resolve(&self, indices: &[usize]) -> Vec<&Item> {
        indices
            .iter()
            .filter_map(|&i| self.catalog.get(i))
            .collect()
    }
}
