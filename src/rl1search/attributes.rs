//! Character attributes and the requirement gate.

use crate::model::Item;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_ATTRIBUTE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Strength,
    Dexterity,
    Intelligence,
    Faith,
    Arcane,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Intelligence,
        Attribute::Faith,
        Attribute::Arcane,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Dexterity => "Dexterity",
            Attribute::Intelligence => "Intelligence",
            Attribute::Faith => "Faith",
            Attribute::Arcane => "Arcane",
        }
    }

    /// Lowercase name used in preference keys.
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::Strength => "strength",
            Attribute::Dexterity => "dexterity",
            Attribute::Intelligence => "intelligence",
            Attribute::Faith => "faith",
            Attribute::Arcane => "arcane",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strength" | "str" => Ok(Attribute::Strength),
            "dexterity" | "dex" => Ok(Attribute::Dexterity),
            "intelligence" | "int" => Ok(Attribute::Intelligence),
            "faith" | "fai" => Ok(Attribute::Faith),
            "arcane" | "arc" => Ok(Attribute::Arcane),
            other => Err(format!("Unknown attribute: {}", other)),
        }
    }
}

/// The player's five attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
    pub faith: u32,
    pub arcane: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            strength: DEFAULT_ATTRIBUTE,
            dexterity: DEFAULT_ATTRIBUTE,
            intelligence: DEFAULT_ATTRIBUTE,
            faith: DEFAULT_ATTRIBUTE,
            arcane: DEFAULT_ATTRIBUTE,
        }
    }
}

impl Stats {
    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Intelligence => self.intelligence,
            Attribute::Faith => self.faith,
            Attribute::Arcane => self.arcane,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: u32) {
        match attribute {
            Attribute::Strength => self.strength = value,
            Attribute::Dexterity => self.dexterity = value,
            Attribute::Intelligence => self.intelligence = value,
            Attribute::Faith => self.faith = value,
            Attribute::Arcane => self.arcane = value,
        }
    }
}

/// Attribute values plus the two toggles that change how they gate items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeState {
    pub stats: Stats,
    /// Compare against the two-handed strength requirement. Never persisted.
    pub two_handed: bool,
    pub ignore_requirements: bool,
}

impl Default for AttributeState {
    fn default() -> Self {
        Self {
            stats: Stats::default(),
            two_handed: true,
            ignore_requirements: false,
        }
    }
}

impl AttributeState {
    /// Whether the player can use `item`.
    ///
    /// Strength and dexterity only gate weapons; intelligence, faith and
    /// arcane gate every item.
    pub fn meets(&self, item: &Item) -> bool {
        if self.ignore_requirements {
            return true;
        }
        let req = &item.required;
        if item.is_weapon()
            && (req.strength(self.two_handed) > self.stats.strength
                || req.dexterity > self.stats.dexterity)
        {
            return false;
        }
        req.intelligence <= self.stats.intelligence
            && req.faith <= self.stats.faith
            && req.arcane <= self.stats.arcane
    }

    /// The requirement `item` has for `attribute` under the current grip.
    pub fn requirement(&self, item: &Item, attribute: Attribute) -> u32 {
        let req = &item.required;
        match attribute {
            Attribute::Strength => req.strength(self.two_handed),
            Attribute::Dexterity => req.dexterity,
            Attribute::Intelligence => req.intelligence,
            Attribute::Faith => req.faith,
            Attribute::Arcane => req.arcane,
        }
    }
}
