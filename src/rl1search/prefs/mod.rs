//! # Preferences
//!
//! A typed view over a [`PrefStore`]. Every key has a documented default and
//! a validator; an absent or malformed value falls back to the default (and
//! is logged at debug level) instead of failing.
//!
//! | Key | Value | Default |
//! |-----|-------|---------|
//! | `stats.strength` … `stats.arcane` | integer | `10` |
//! | `stats.ignoreStats` | `true`/`false` | `false` |
//! | `stats.showDlcWeapons` | `true`/`false` | `true` |
//! | `stats.hideShields` | `true`/`false` | `false` |
//! | `stats.selectedColumns` | JSON array of column labels | all columns |
//! | `stats.sortBy` | column label | `Name` |
//! | `stats.sortOrder` | `asc`/`desc` | `asc` |
//! | `theme.currentTheme` | theme id | `age-of-fracture` |
//! | `meta.schemaVersion` | integer | written by [`migrate`] |
//!
//! Two-handed accounting is deliberately absent: it resets every session.

use crate::attributes::{Attribute, Stats};
use crate::error::Result;
use crate::sort::{Column, SortDirection, SortState};
use crate::store::PrefStore;
use crate::theme::EndingTheme;
use serde::Serialize;
use std::str::FromStr;

pub mod migrate;

pub mod keys {
    use crate::attributes::Attribute;

    pub const STRENGTH: &str = "stats.strength";
    pub const DEXTERITY: &str = "stats.dexterity";
    pub const INTELLIGENCE: &str = "stats.intelligence";
    pub const FAITH: &str = "stats.faith";
    pub const ARCANE: &str = "stats.arcane";
    pub const ATTRIBUTES: [&str; 5] = [STRENGTH, DEXTERITY, INTELLIGENCE, FAITH, ARCANE];
    pub const IGNORE_STATS: &str = "stats.ignoreStats";
    pub const SHOW_DLC: &str = "stats.showDlcWeapons";
    pub const HIDE_SHIELDS: &str = "stats.hideShields";
    pub const SELECTED_COLUMNS: &str = "stats.selectedColumns";
    pub const SORT_BY: &str = "stats.sortBy";
    pub const SORT_ORDER: &str = "stats.sortOrder";
    pub const THEME: &str = "theme.currentTheme";
    pub const SCHEMA_VERSION: &str = "meta.schemaVersion";

    pub const ALL: [&str; 13] = [
        STRENGTH,
        DEXTERITY,
        INTELLIGENCE,
        FAITH,
        ARCANE,
        IGNORE_STATS,
        SHOW_DLC,
        HIDE_SHIELDS,
        SELECTED_COLUMNS,
        SORT_BY,
        SORT_ORDER,
        THEME,
        SCHEMA_VERSION,
    ];

    pub fn attribute(attribute: Attribute) -> &'static str {
        match attribute {
            Attribute::Strength => STRENGTH,
            Attribute::Dexterity => DEXTERITY,
            Attribute::Intelligence => INTELLIGENCE,
            Attribute::Faith => FAITH,
            Attribute::Arcane => ARCANE,
        }
    }
}

/// Everything that survives between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub stats: Stats,
    pub ignore_requirements: bool,
    pub show_dlc: bool,
    pub hide_shields: bool,
    pub columns: Vec<Column>,
    pub sort: SortState,
    pub theme: EndingTheme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            stats: Stats::default(),
            ignore_requirements: false,
            show_dlc: true,
            hide_shields: false,
            columns: Column::ALL.to_vec(),
            sort: SortState::default(),
            theme: EndingTheme::default(),
        }
    }
}

impl Preferences {
    /// Migrates legacy values in place, then reads every key.
    pub fn load<S: PrefStore>(store: &mut S) -> Result<Self> {
        migrate::run(store)?;
        Self::read(store)
    }

    /// Reads every key without migrating.
    pub fn read<S: PrefStore>(store: &S) -> Result<Self> {
        let defaults = Self::default();
        let mut stats = Stats::default();
        for attribute in Attribute::ALL {
            let value = read_parsed(store, keys::attribute(attribute), stats.get(attribute))?;
            stats.set(attribute, value);
        }
        let sort_column = read_with(store, keys::SORT_BY, defaults.sort.column, |s| {
            Column::from_label(s).filter(Column::is_sortable)
        })?;
        let sort_direction = read_with(store, keys::SORT_ORDER, defaults.sort.direction, |s| {
            match s {
                "asc" => Some(SortDirection::Asc),
                "desc" => Some(SortDirection::Desc),
                _ => None,
            }
        })?;
        Ok(Self {
            stats,
            ignore_requirements: read_parsed(store, keys::IGNORE_STATS, defaults.ignore_requirements)?,
            show_dlc: read_parsed(store, keys::SHOW_DLC, defaults.show_dlc)?,
            hide_shields: read_parsed(store, keys::HIDE_SHIELDS, defaults.hide_shields)?,
            columns: read_with(store, keys::SELECTED_COLUMNS, defaults.columns, parse_columns)?,
            sort: SortState {
                column: sort_column,
                direction: sort_direction,
            },
            theme: read_parsed(store, keys::THEME, defaults.theme)?,
        })
    }
}

fn read_parsed<S: PrefStore, T: FromStr>(store: &S, key: &str, default: T) -> Result<T> {
    read_with(store, key, default, |s| s.parse().ok())
}

fn read_with<S: PrefStore, T>(
    store: &S,
    key: &str,
    default: T,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T> {
    let Some(raw) = store.get(key)? else {
        return Ok(default);
    };
    match parse(raw.trim()) {
        Some(value) => Ok(value),
        None => {
            tracing::debug!(key, value = %raw, "malformed preference, using default");
            Ok(default)
        }
    }
}

/// A JSON array of column labels. Unknown labels are dropped; anything that
/// is not an array of strings is rejected.
fn parse_columns(raw: &str) -> Option<Vec<Column>> {
    let labels: Vec<String> = serde_json::from_str(raw).ok()?;
    let mut columns = Vec::new();
    for label in &labels {
        if let Some(column) = Column::from_label(label) {
            if !columns.contains(&column) {
                columns.push(column);
            }
        }
    }
    Some(columns)
}

// --- writers ---

pub fn write_attribute<S: PrefStore>(store: &mut S, attribute: Attribute, value: u32) -> Result<()> {
    store.set(keys::attribute(attribute), &value.to_string())
}

pub fn write_stats<S: PrefStore>(store: &mut S, stats: &Stats) -> Result<()> {
    for attribute in Attribute::ALL {
        write_attribute(store, attribute, stats.get(attribute))?;
    }
    Ok(())
}

pub fn write_flag<S: PrefStore>(store: &mut S, key: &str, value: bool) -> Result<()> {
    store.set(key, if value { "true" } else { "false" })
}

pub fn write_columns<S: PrefStore>(store: &mut S, columns: &[Column]) -> Result<()> {
    let labels: Vec<&str> = columns.iter().map(Column::label).collect();
    let json = serde_json::to_string(&labels)?;
    store.set(keys::SELECTED_COLUMNS, &json)
}

pub fn write_sort<S: PrefStore>(store: &mut S, sort: SortState) -> Result<()> {
    store.set(keys::SORT_BY, sort.column.label())?;
    store.set(keys::SORT_ORDER, sort.direction.as_str())
}

pub fn write_theme<S: PrefStore>(store: &mut S, theme: EndingTheme) -> Result<()> {
    store.set(keys::THEME, theme.id())
}

/// Forgets every known key. The schema version survives so legacy
/// migration does not run again.
pub fn clear<S: PrefStore>(store: &mut S) -> Result<()> {
    for key in keys::ALL {
        if key != keys::SCHEMA_VERSION {
            store.remove(key)?;
        }
    }
    Ok(())
}
