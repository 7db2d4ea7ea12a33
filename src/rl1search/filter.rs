//! # Filter Engine
//!
//! Holds the filter selections and derives the subset of the catalog that
//! satisfies all of them. The predicates are conjunctive:
//!
//! 1. data-type scope (catalysts count as spell-side items)
//! 2. search text, matched as a folded substring of the name
//! 3. shield exclusion
//! 4. category selection
//! 5. damage-type selection (any tracked type)
//! 6. attack-type selection (weapons only, primary attack type)
//! 7. status-buildup selection
//! 8. DLC gate
//! 9. attribute requirements, see [`AttributeState::meets`]
//!
//! Every selection set treats "empty" as "unrestricted".

use crate::attributes::AttributeState;
use crate::catalog::Catalog;
use crate::model::{
    is_shield_category, is_spell_tool_category, DataType, Item, SPELL_CATEGORIES,
    SPELL_TOOL_CATEGORIES, WEAPON_CATEGORIES,
};
use crate::text::fold;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A user-chosen subset of a label domain, kept in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet(IndexSet<String>);

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.0.insert(label.into())
    }

    pub fn remove(&mut self, label: &str) -> bool {
        self.0.shift_remove(label)
    }

    /// Adds `label` when absent, removes it when present. Returns whether the
    /// label is selected afterwards.
    pub fn toggle(&mut self, label: &str) -> bool {
        if self.remove(label) {
            false
        } else {
            self.insert(label)
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    /// Empty-means-unrestricted membership test.
    pub fn admits(&self, label: &str) -> bool {
        self.0.is_empty() || self.0.contains(label)
    }

    /// Like [`admits`](Self::admits), for items carrying several labels.
    pub fn admits_any<'a>(&self, labels: impl IntoIterator<Item = &'a String>) -> bool {
        self.0.is_empty() || labels.into_iter().any(|l| self.0.contains(l.as_str()))
    }

    pub fn retain(&mut self, keep: impl FnMut(&String) -> bool) {
        self.0.retain(keep)
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub data_type: DataType,
    pub categories: SelectionSet,
    pub damage_types: SelectionSet,
    pub attack_types: SelectionSet,
    pub status_buildups: SelectionSet,
    pub show_dlc: bool,
    hide_shields: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            data_type: DataType::Both,
            categories: SelectionSet::new(),
            damage_types: SelectionSet::new(),
            attack_types: SelectionSet::new(),
            status_buildups: SelectionSet::new(),
            show_dlc: true,
            hide_shields: false,
        }
    }
}

impl FilterState {
    pub fn hide_shields(&self) -> bool {
        self.hide_shields
    }

    /// Turning shield hiding on also drops shield categories from the
    /// category selection, so turning it off later does not bring back a
    /// selection the user could not see.
    pub fn set_hide_shields(&mut self, hide: bool) {
        self.hide_shields = hide;
        if hide {
            self.categories.retain(|c| !is_shield_category(c));
        }
    }

    pub fn matches(&self, item: &Item, attrs: &AttributeState) -> bool {
        self.in_scope(item)
            && self.matches_search(item)
            && !(self.hide_shields && item.is_shield())
            && self.categories.admits(&item.category)
            && self.damage_types.admits_any(&item.damage_types)
            && self.matches_attack(item)
            && self.status_buildups.admits(&item.status_buildup)
            && (self.show_dlc || !item.dlc_exclusive)
            && attrs.meets(item)
    }

    fn in_scope(&self, item: &Item) -> bool {
        match self.data_type {
            DataType::Weapons => item.is_weapon() && !item.is_spell_tool(),
            DataType::Spells => item.is_spell() || item.is_spell_tool(),
            DataType::Both => true,
        }
    }

    fn matches_search(&self, item: &Item) -> bool {
        self.search.is_empty() || fold(&item.name).contains(&fold(&self.search))
    }

    fn matches_attack(&self, item: &Item) -> bool {
        self.attack_types.is_empty()
            || (item.is_weapon() && self.attack_types.contains(&item.attack_types.primary))
    }

    /// Category labels eligible for selection under the current scope and
    /// shield toggle.
    pub fn category_options(&self) -> Vec<&'static str> {
        let scoped: Vec<&'static str> = match self.data_type {
            DataType::Weapons => WEAPON_CATEGORIES
                .iter()
                .copied()
                .filter(|c| !is_spell_tool_category(c))
                .collect(),
            DataType::Spells => SPELL_CATEGORIES
                .iter()
                .chain(SPELL_TOOL_CATEGORIES.iter())
                .copied()
                .collect(),
            DataType::Both => WEAPON_CATEGORIES
                .iter()
                .chain(SPELL_CATEGORIES.iter())
                .copied()
                .collect(),
        };
        scoped
            .into_iter()
            .filter(|c| !(self.hide_shields && is_shield_category(c)))
            .collect()
    }
}

/// Catalog positions of the items passing `filter`, in catalog order.
pub fn filter_indices(catalog: &Catalog, filter: &FilterState, attrs: &AttributeState) -> Vec<usize> {
    catalog
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.matches(item, attrs))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::attributes::Attribute;
    use crate::model::{AttackTypes, ItemKind, Links, RequiredAttributes};

    pub(crate) fn weapon(name: &str, category: &str, required: RequiredAttributes) -> Item {
        Item {
            name: name.into(),
            kind: ItemKind::Weapon,
            category: category.into(),
            required,
            damage_types: vec!["Physical".into()],
            attack_types: AttackTypes {
                primary: "Standard".into(),
                secondary: "None".into(),
            },
            status_buildup: "None".into(),
            dlc_exclusive: false,
            links: Links::default(),
            image: String::new(),
        }
    }

    /// Dagger, Claymore and a faith catalyst.
    pub(crate) fn trio() -> Catalog {
        let mut seal = weapon(
            "Sacred Seal",
            "Sacred Seals",
            RequiredAttributes {
                faith: 10,
                ..Default::default()
            },
        );
        seal.damage_types.clear();
        Catalog::from_items(vec![
            weapon(
                "Dagger",
                "Daggers",
                RequiredAttributes {
                    strength_one_hand: 5,
                    strength_two_hand: 4,
                    ..Default::default()
                },
            ),
            weapon(
                "Claymore",
                "Greatswords",
                RequiredAttributes {
                    strength_one_hand: 15,
                    strength_two_hand: 20,
                    ..Default::default()
                },
            ),
            seal,
        ])
    }

    fn names(catalog: &Catalog, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&i| catalog.items()[i].name.clone())
            .collect()
    }

    #[test]
    fn weapons_only_with_one_handed_strength() {
        let catalog = trio();
        let filter = FilterState {
            data_type: DataType::Weapons,
            ..Default::default()
        };
        let attrs = AttributeState {
            two_handed: false,
            ..Default::default()
        };
        assert_eq!(names(&catalog, &filter_indices(&catalog, &filter, &attrs)), vec!["Dagger"]);
    }

    #[test]
    fn both_scopes_with_requirements_ignored() {
        let catalog = trio();
        let filter = FilterState::default();
        let attrs = AttributeState {
            ignore_requirements: true,
            ..Default::default()
        };
        assert_eq!(
            names(&catalog, &filter_indices(&catalog, &filter, &attrs)),
            vec!["Dagger", "Claymore", "Sacred Seal"]
        );
    }

    #[test]
    fn spells_scope_keeps_catalysts() {
        let catalog = trio();
        let filter = FilterState {
            data_type: DataType::Spells,
            ..Default::default()
        };
        let attrs = AttributeState::default();
        assert_eq!(names(&catalog, &filter_indices(&catalog, &filter, &attrs)), vec!["Sacred Seal"]);
    }

    #[test]
    fn search_folds_case_and_accents() {
        let catalog = Catalog::bundled();
        let attrs = AttributeState {
            ignore_requirements: true,
            ..Default::default()
        };
        let filter = FilterState {
            search: "VARRE".into(),
            ..Default::default()
        };
        assert_eq!(names(&catalog, &filter_indices(&catalog, &filter, &attrs)), vec!["Varré's Bouquet"]);
    }

    #[test]
    fn whitespace_search_is_a_literal_substring() {
        let catalog = trio();
        let attrs = AttributeState {
            ignore_requirements: true,
            ..Default::default()
        };
        let filter = FilterState {
            search: "  ".into(),
            ..Default::default()
        };
        assert!(filter_indices(&catalog, &filter, &attrs).is_empty());

        let filter = FilterState {
            search: " ".into(),
            ..Default::default()
        };
        assert_eq!(names(&catalog, &filter_indices(&catalog, &filter, &attrs)), vec!["Sacred Seal"]);
    }

    #[test]
    fn attack_filter_never_admits_spells() {
        let catalog = Catalog::bundled();
        let attrs = AttributeState {
            ignore_requirements: true,
            ..Default::default()
        };
        let mut filter = FilterState::default();
        filter.attack_types.insert("Slash");
        let hits = filter_indices(&catalog, &filter, &attrs);
        assert!(!hits.is_empty());
        for i in hits {
            let item = &catalog.items()[i];
            assert!(item.is_weapon());
            assert_eq!(item.attack_types.primary, "Slash");
        }
    }

    #[test]
    fn damage_filter_matches_any_tracked_type() {
        let catalog = Catalog::bundled();
        let attrs = AttributeState {
            ignore_requirements: true,
            ..Default::default()
        };
        let mut filter = FilterState::default();
        filter.damage_types.insert("Magic");
        filter.damage_types.insert("Holy");
        for i in filter_indices(&catalog, &filter, &attrs) {
            let tracked = &catalog.items()[i].damage_types;
            assert!(tracked.iter().any(|d| d == "Magic" || d == "Holy"));
        }
    }

    #[test]
    fn dlc_and_shield_gates() {
        let catalog = Catalog::bundled();
        let attrs = AttributeState {
            ignore_requirements: true,
            ..Default::default()
        };
        let mut filter = FilterState {
            show_dlc: false,
            ..Default::default()
        };
        filter.set_hide_shields(true);
        for i in filter_indices(&catalog, &filter, &attrs) {
            let item = &catalog.items()[i];
            assert!(!item.dlc_exclusive);
            assert!(!item.is_shield());
        }
    }

    #[test]
    fn hiding_shields_prunes_selected_shield_categories() {
        let mut filter = FilterState::default();
        filter.categories.insert("Greatshields");
        filter.categories.insert("Daggers");
        filter.set_hide_shields(true);
        filter.set_hide_shields(false);
        assert!(!filter.categories.contains("Greatshields"));
        assert!(filter.categories.contains("Daggers"));
    }

    #[test]
    fn category_options_follow_scope_and_shields() {
        let mut filter = FilterState {
            data_type: DataType::Weapons,
            ..Default::default()
        };
        let weapons = filter.category_options();
        assert!(!weapons.contains(&"Staves"));
        assert!(weapons.contains(&"Greatshields"));
        assert!(!weapons.contains(&"Sorcery"));

        filter.data_type = DataType::Spells;
        assert_eq!(
            filter.category_options(),
            vec!["Sorcery", "Incantation", "Staves", "Sacred Seals"]
        );

        filter.data_type = DataType::Both;
        filter.set_hide_shields(true);
        let both = filter.category_options();
        assert_eq!(both.len(), WEAPON_CATEGORIES.len() + SPELL_CATEGORIES.len() - 4);
        assert!(both.contains(&"Staves"));
        assert!(!both.contains(&"Small Shields"));
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = Catalog::bundled();
        let mut filter = FilterState::default();
        filter.status_buildups.insert("Blood Loss");
        let attrs = AttributeState::default();
        let once = filter_indices(&catalog, &filter, &attrs);
        let again: Vec<usize> = once
            .iter()
            .copied()
            .filter(|&i| filter.matches(&catalog.items()[i], &attrs))
            .collect();
        assert_eq!(once, again);
    }

    #[test]
    fn narrowing_a_selection_never_grows_the_result() {
        let catalog = Catalog::bundled();
        let attrs = AttributeState {
            ignore_requirements: true,
            ..Default::default()
        };
        let mut filter = FilterState::default();
        for label in ["Katanas", "Daggers", "Sorcery"] {
            filter.categories.insert(label);
        }
        let mut previous = filter_indices(&catalog, &filter, &attrs).len();
        for label in ["Sorcery", "Daggers"] {
            filter.categories.remove(label);
            let size = filter_indices(&catalog, &filter, &attrs).len();
            assert!(size <= previous);
            previous = size;
        }

        let mut widening = FilterState::default();
        widening.status_buildups.insert("Frostbite");
        let mut previous = filter_indices(&catalog, &widening, &attrs).len();
        for label in ["Poison", "Blood Loss", "None"] {
            widening.status_buildups.insert(label);
            let size = filter_indices(&catalog, &widening, &attrs).len();
            assert!(size >= previous);
            previous = size;
        }
    }

    #[test]
    fn ignoring_requirements_makes_stats_irrelevant() {
        let catalog = Catalog::bundled();
        let filter = FilterState::default();
        let mut weak = AttributeState {
            ignore_requirements: true,
            ..Default::default()
        };
        for attr in Attribute::ALL {
            weak.stats.set(attr, 0);
        }
        let mut strong = weak;
        for attr in Attribute::ALL {
            strong.stats.set(attr, 99);
        }
        assert_eq!(
            filter_indices(&catalog, &filter, &weak),
            filter_indices(&catalog, &filter, &strong)
        );
        assert_eq!(filter_indices(&catalog, &filter, &weak).len(), catalog.len());
    }
}
