//! One-time rewrite of preference values left behind by older releases.
//!
//! Version 1 stored split damage columns (`Primary Damage`, `Secondary
//! Damage`) and split wiki columns (`Wiki.gg`, `Fextralife`). Version 2
//! collapses each pair into a single column. Stores already at the current
//! version are left untouched.

use super::keys;
use crate::error::Result;
use crate::sort::Column;
use crate::store::PrefStore;

pub const SCHEMA_VERSION: u32 = 2;

const LEGACY_DAMAGE: [&str; 2] = ["Primary Damage", "Secondary Damage"];
const LEGACY_LINKS: [&str; 2] = ["Wiki.gg", "Fextralife"];

/// Brings `store` up to [`SCHEMA_VERSION`]. Returns whether anything ran.
pub fn run<S: PrefStore>(store: &mut S) -> Result<bool> {
    let version = store
        .get(keys::SCHEMA_VERSION)?
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(0);
    if version >= SCHEMA_VERSION {
        return Ok(false);
    }

    if let Some(raw) = store.get(keys::SELECTED_COLUMNS)? {
        if let Ok(labels) = serde_json::from_str::<Vec<String>>(&raw) {
            let migrated = migrate_columns(&labels);
            if migrated != labels {
                tracing::info!(from = ?labels, to = ?migrated, "migrated column selection");
                store.set(keys::SELECTED_COLUMNS, &serde_json::to_string(&migrated)?)?;
            }
        }
    }

    if let Some(sort_by) = store.get(keys::SORT_BY)? {
        if let Some(replacement) = migrate_sort_by(&sort_by) {
            tracing::info!(from = %sort_by, to = replacement, "migrated sort column");
            store.set(keys::SORT_BY, replacement)?;
        }
    }

    store.set(keys::SCHEMA_VERSION, &SCHEMA_VERSION.to_string())?;
    Ok(true)
}

/// Collapses legacy column pairs and drops labels that are not columns.
///
/// `Links` takes the place of the first wiki column. `Damage Type` goes
/// right after `Arcane` when present, otherwise at the end. Running this on
/// its own output changes nothing.
pub fn migrate_columns(labels: &[String]) -> Vec<String> {
    let had_damage = labels.iter().any(|l| LEGACY_DAMAGE.contains(&l.as_str()));
    let links = Column::Links.label();
    let mut out: Vec<String> = Vec::new();
    for label in labels {
        let label = if LEGACY_LINKS.contains(&label.as_str()) {
            links
        } else {
            label.as_str()
        };
        if Column::from_label(label).is_none() || out.iter().any(|l| l == label) {
            continue;
        }
        out.push(label.to_string());
    }

    let damage = Column::DamageType.label();
    if had_damage && !out.iter().any(|l| l == damage) {
        match out.iter().position(|l| l == Column::Arcane.label()) {
            Some(pos) => out.insert(pos + 1, damage.to_string()),
            None => out.push(damage.to_string()),
        }
    }
    out
}

fn migrate_sort_by(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if LEGACY_DAMAGE.contains(&value) {
        Some(Column::DamageType.label())
    } else if LEGACY_LINKS.contains(&value) {
        Some(Column::Name.label())
    } else {
        None
    }
}
