//! # Sorting
//!
//! Table columns, the sort state and the comparator behind the sorted view.
//!
//! Sorting is stable and single-key. Descending order flips the comparator
//! rather than reversing the output, so items that compare equal keep their
//! catalog order in both directions.

use crate::attributes::{Attribute, AttributeState};
use crate::model::Item;
use crate::text::fold;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Image,
    Name,
    Category,
    Strength,
    Dexterity,
    Intelligence,
    Faith,
    Arcane,
    DamageType,
    AttackType,
    StatusBuildup,
    Links,
}

impl Column {
    /// Canonical display order.
    pub const ALL: [Column; 12] = [
        Column::Image,
        Column::Name,
        Column::Category,
        Column::Strength,
        Column::Dexterity,
        Column::Intelligence,
        Column::Faith,
        Column::Arcane,
        Column::DamageType,
        Column::AttackType,
        Column::StatusBuildup,
        Column::Links,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Column::Image => "Image",
            Column::Name => "Name",
            Column::Category => "Category",
            Column::Strength => "Strength",
            Column::Dexterity => "Dexterity",
            Column::Intelligence => "Intelligence",
            Column::Faith => "Faith",
            Column::Arcane => "Arcane",
            Column::DamageType => "Damage Type",
            Column::AttackType => "Attack Type",
            Column::StatusBuildup => "Status Buildup",
            Column::Links => "Links",
        }
    }

    /// Command-line spelling, e.g. `damage-type`.
    pub fn id(&self) -> String {
        self.label().to_ascii_lowercase().replace(' ', "-")
    }

    pub fn is_sortable(&self) -> bool {
        !matches!(self, Column::Image | Column::Links)
    }

    pub fn attribute(&self) -> Option<Attribute> {
        match self {
            Column::Strength => Some(Attribute::Strength),
            Column::Dexterity => Some(Attribute::Dexterity),
            Column::Intelligence => Some(Attribute::Intelligence),
            Column::Faith => Some(Attribute::Faith),
            Column::Arcane => Some(Attribute::Arcane),
            _ => None,
        }
    }

    pub fn from_label(label: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Column {
    type Err = String;

    /// Accepts labels in any case (`Damage Type`), kebab ids (`damage-type`)
    /// and attribute short names (`str`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        if let Some(column) = Column::ALL
            .into_iter()
            .find(|c| c.label().to_ascii_lowercase() == wanted)
        {
            return Ok(column);
        }
        match wanted.as_str() {
            "damage" => Ok(Column::DamageType),
            "attack" => Ok(Column::AttackType),
            "status" => Ok(Column::StatusBuildup),
            other => other
                .parse::<Attribute>()
                .map(Column::from)
                .map_err(|_| format!("Unknown column: {}", s.trim())),
        }
    }
}

impl From<Attribute> for Column {
    fn from(attribute: Attribute) -> Self {
        match attribute {
            Attribute::Strength => Column::Strength,
            Attribute::Dexterity => Column::Dexterity,
            Attribute::Intelligence => Column::Intelligence,
            Attribute::Faith => Column::Faith,
            Attribute::Arcane => Column::Arcane,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(format!("Unknown sort direction: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Column,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: Column::Name,
            direction: SortDirection::Asc,
        }
    }
}

impl SortState {
    /// Header-click semantics. Returns `false` when the click changes nothing
    /// (non-sortable column).
    pub fn click(&mut self, column: Column) -> bool {
        if !column.is_sortable() {
            return false;
        }
        if self.column == column {
            self.direction = self.direction.flipped();
        } else {
            self.column = column;
            self.direction = SortDirection::Asc;
        }
        true
    }
}

/// Ascending comparison of two items on `column`.
pub fn compare(a: &Item, b: &Item, column: Column, attrs: &AttributeState) -> Ordering {
    if let Some(attribute) = column.attribute() {
        return attrs
            .requirement(a, attribute)
            .cmp(&attrs.requirement(b, attribute));
    }
    match column {
        Column::Name => compare_text(&a.name, &b.name),
        Column::Category => compare_text(&a.category, &b.category),
        Column::DamageType => compare_text(&a.damage_types.join(", "), &b.damage_types.join(", ")),
        Column::AttackType => compare_text(&a.attack_types.primary, &b.attack_types.primary),
        Column::StatusBuildup => compare_text(&a.status_buildup, &b.status_buildup),
        _ => Ordering::Equal,
    }
}

/// Case- and accent-insensitive, then by code point. No locale collation:
/// catalog names are ASCII apart from folded accents, where the two agree.
fn compare_text(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b))
}

/// Stable sort of catalog indices by `sort`.
pub fn sort_indices(items: &[Item], indices: &mut [usize], sort: SortState, attrs: &AttributeState) {
    indices.sort_by(|&x, &y| {
        let ord = compare(&items[x], &items[y], sort.column, attrs);
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::filter::tests::weapon;
    use crate::model::RequiredAttributes;

    fn sorted_names(items: &[Item], sort: SortState, attrs: &AttributeState) -> Vec<String> {
        let mut indices: Vec<usize> = (0..items.len()).collect();
        sort_indices(items, &mut indices, sort, attrs);
        indices.into_iter().map(|i| items[i].name.clone()).collect()
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let items = vec![
            weapon("dagger", "Daggers", RequiredAttributes::default()),
            weapon("Claymore", "Greatswords", RequiredAttributes::default()),
        ];
        let names = sorted_names(&items, SortState::default(), &AttributeState::default());
        assert_eq!(names, vec!["Claymore", "dagger"]);
    }

    #[test]
    fn strength_sort_follows_grip() {
        // One-handed and two-handed thresholds rank these two in opposite order.
        let items = vec![
            weapon(
                "Heavy One Hand",
                "Greatswords",
                RequiredAttributes {
                    strength_one_hand: 20,
                    strength_two_hand: 5,
                    ..Default::default()
                },
            ),
            weapon(
                "Heavy Two Hand",
                "Greatswords",
                RequiredAttributes {
                    strength_one_hand: 10,
                    strength_two_hand: 12,
                    ..Default::default()
                },
            ),
        ];
        let mut attrs = AttributeState::default();
        let sort = SortState {
            column: Column::Strength,
            direction: SortDirection::Desc,
        };
        assert_eq!(
            sorted_names(&items, sort, &attrs),
            vec!["Heavy Two Hand", "Heavy One Hand"]
        );
        attrs.two_handed = false;
        assert_eq!(
            sorted_names(&items, sort, &attrs),
            vec!["Heavy One Hand", "Heavy Two Hand"]
        );
    }

    #[test]
    fn ties_keep_catalog_order_in_both_directions() {
        let items = vec![
            weapon("B", "Axes", RequiredAttributes::default()),
            weapon("A", "Axes", RequiredAttributes::default()),
            weapon("C", "Bows", RequiredAttributes::default()),
            weapon("D", "Axes", RequiredAttributes::default()),
        ];
        let attrs = AttributeState::default();
        let mut sort = SortState {
            column: Column::Category,
            direction: SortDirection::Asc,
        };
        assert_eq!(sorted_names(&items, sort, &attrs), vec!["B", "A", "D", "C"]);
        sort.direction = SortDirection::Desc;
        assert_eq!(sorted_names(&items, sort, &attrs), vec!["C", "B", "A", "D"]);
    }

    #[test]
    fn non_sortable_columns_keep_input_order() {
        let catalog = Catalog::bundled();
        let attrs = AttributeState::default();
        let sort = SortState {
            column: Column::Links,
            direction: SortDirection::Desc,
        };
        let names = sorted_names(catalog.items(), sort, &attrs);
        let original: Vec<String> = catalog.items().iter().map(|i| i.name.clone()).collect();
        assert_eq!(names, original);
    }

    #[test]
    fn damage_type_compares_joined_labels() {
        let mut fire = weapon("Fire", "Axes", RequiredAttributes::default());
        fire.damage_types = vec!["Fire".into()];
        let mut magic_fire = weapon("MagicFire", "Axes", RequiredAttributes::default());
        magic_fire.damage_types = vec!["Magic".into(), "Fire".into()];
        let mut fire_holy = weapon("FireHoly", "Axes", RequiredAttributes::default());
        fire_holy.damage_types = vec!["Fire".into(), "Holy".into()];
        let items = vec![magic_fire, fire_holy, fire];
        let sort = SortState {
            column: Column::DamageType,
            direction: SortDirection::Asc,
        };
        assert_eq!(
            sorted_names(&items, sort, &AttributeState::default()),
            vec!["Fire", "FireHoly", "MagicFire"]
        );
    }

    #[test]
    fn click_toggles_or_switches() {
        let mut sort = SortState::default();
        assert!(sort.click(Column::Name));
        assert_eq!(sort.direction, SortDirection::Desc);
        assert!(sort.click(Column::Faith));
        assert_eq!(sort, SortState {
            column: Column::Faith,
            direction: SortDirection::Asc
        });
        assert!(!sort.click(Column::Image));
        assert!(!sort.click(Column::Links));
        assert_eq!(sort.column, Column::Faith);
    }

    #[test]
    fn column_parsing_accepts_labels_and_ids() {
        assert_eq!("Damage Type".parse::<Column>().unwrap(), Column::DamageType);
        assert_eq!("damage-type".parse::<Column>().unwrap(), Column::DamageType);
        assert_eq!("status".parse::<Column>().unwrap(), Column::StatusBuildup);
        assert_eq!("dex".parse::<Column>().unwrap(), Column::Dexterity);
        assert!("Wiki.gg".parse::<Column>().is_err());
        assert_eq!(Column::StatusBuildup.id(), "status-buildup");
    }
}
