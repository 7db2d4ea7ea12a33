//! Core data types: the unified [`Item`] plus the fixed label domains the
//! filters select from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PHYSICAL: &str = "Physical";

/// Placeholder label for "no value" (spell attack types, absent status buildup,
/// spells without a damage type).
pub const NONE_LABEL: &str = "None";

pub const DAMAGE_TYPES: [&str; 5] = ["Physical", "Magic", "Fire", "Lightning", "Holy"];

pub const ATTACK_TYPES: [&str; 5] = ["Standard", "Slash", "Strike", "Pierce", "Spell"];

pub const STATUS_BUILDUPS: [&str; 7] = [
    "Blood Loss",
    "Poison",
    "Scarlet Rot",
    "Frostbite",
    "Sleep",
    "Madness",
    NONE_LABEL,
];

pub const WEAPON_CATEGORIES: [&str; 42] = [
    "Axes",
    "Backhand Blades",
    "Ballistas",
    "Beast Claws",
    "Bows",
    "Claws",
    "Colossal Swords",
    "Colossal Weapons",
    "Crossbows",
    "Curved Greatswords",
    "Curved Swords",
    "Daggers",
    "Fists",
    "Flails",
    "Great Hammers",
    "Great Katanas",
    "Great Spears",
    "Greataxes",
    "Greatbows",
    "Greatshields",
    "Greatswords",
    "Halberds",
    "Hammers",
    "Hand-to-Hand",
    "Heavy Thrusting Swords",
    "Katanas",
    "Light Bows",
    "Light Greatswords",
    "Medium Shields",
    "Perfume Bottles",
    "Reapers",
    "Sacred Seals",
    "Small Shields",
    "Spears",
    "Staves",
    "Straight Swords",
    "Throwing Blades",
    "Thrusting Shields",
    "Thrusting Swords",
    "Torches",
    "Twinblades",
    "Whips",
];

pub const SPELL_CATEGORIES: [&str; 2] = ["Sorcery", "Incantation"];

/// Weapon categories that act as spell catalysts.
pub const SPELL_TOOL_CATEGORIES: [&str; 2] = ["Staves", "Sacred Seals"];

pub const SHIELD_CATEGORIES: [&str; 4] = [
    "Small Shields",
    "Medium Shields",
    "Greatshields",
    "Thrusting Shields",
];

pub fn is_spell_tool_category(category: &str) -> bool {
    SPELL_TOOL_CATEGORIES.contains(&category)
}

pub fn is_shield_category(category: &str) -> bool {
    SHIELD_CATEGORIES.contains(&category)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Weapon,
    Spell,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Weapon => write!(f, "weapon"),
            ItemKind::Spell => write!(f, "spell"),
        }
    }
}

/// Which part of the catalog is in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Weapons,
    Spells,
    #[default]
    Both,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Weapons => "weapons",
            DataType::Spells => "spells",
            DataType::Both => "both",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weapons" | "weapon" | "w" => Ok(DataType::Weapons),
            "spells" | "spell" | "s" => Ok(DataType::Spells),
            "both" | "all" | "b" => Ok(DataType::Both),
            other => Err(format!("Unknown data type: {}", other)),
        }
    }
}

/// Attribute thresholds needed to wield an item. Spells carry zero strength
/// and dexterity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredAttributes {
    pub strength_one_hand: u32,
    pub strength_two_hand: u32,
    pub dexterity: u32,
    pub intelligence: u32,
    pub faith: u32,
    pub arcane: u32,
}

impl RequiredAttributes {
    /// The strength threshold that applies for the chosen grip.
    pub fn strength(&self, two_handed: bool) -> u32 {
        if two_handed {
            self.strength_two_hand
        } else {
            self.strength_one_hand
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackTypes {
    pub primary: String,
    pub secondary: String,
}

impl AttackTypes {
    pub fn none() -> Self {
        Self {
            primary: NONE_LABEL.to_string(),
            secondary: NONE_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    pub wiki_gg: String,
    pub fextralife: String,
}

/// A weapon or spell, normalized for filtering and display.
///
/// The name doubles as the identity; the catalog guarantees uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    pub category: String,
    pub required: RequiredAttributes,
    pub damage_types: Vec<String>,
    pub attack_types: AttackTypes,
    pub status_buildup: String,
    pub dlc_exclusive: bool,
    pub links: Links,
    pub image: String,
}

impl Item {
    pub fn is_weapon(&self) -> bool {
        self.kind == ItemKind::Weapon
    }

    pub fn is_spell(&self) -> bool {
        self.kind == ItemKind::Spell
    }

    /// Staves and sacred seals: weapon-shaped, but listed with spells.
    pub fn is_spell_tool(&self) -> bool {
        self.is_weapon() && is_spell_tool_category(&self.category)
    }

    pub fn is_shield(&self) -> bool {
        is_shield_category(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_follows_grip() {
        let req = RequiredAttributes {
            strength_one_hand: 15,
            strength_two_hand: 20,
            ..Default::default()
        };
        assert_eq!(req.strength(false), 15);
        assert_eq!(req.strength(true), 20);
    }

    #[test]
    fn data_type_parses_aliases() {
        assert_eq!("Weapons".parse::<DataType>().unwrap(), DataType::Weapons);
        assert_eq!("spell".parse::<DataType>().unwrap(), DataType::Spells);
        assert_eq!("all".parse::<DataType>().unwrap(), DataType::Both);
        assert!("armor".parse::<DataType>().is_err());
    }

    #[test]
    fn category_sets_are_consistent() {
        for c in SPELL_TOOL_CATEGORIES.iter().chain(SHIELD_CATEGORIES.iter()) {
            assert!(WEAPON_CATEGORIES.contains(c), "{} missing", c);
        }
        assert!(is_shield_category("Greatshields"));
        assert!(!is_shield_category("Daggers"));
        assert!(is_spell_tool_category("Sacred Seals"));
    }
}
