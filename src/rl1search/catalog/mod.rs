//! # Catalog
//!
//! The immutable collection of every weapon and spell. It is built once at
//! startup, either from the bundled data files or from a directory of the
//! same JSON files, and never changes afterwards: all per-session state lives
//! in the filter, sort and attribute state, never here.
//!
//! Item order is the loader order (weapon files, then spell files, records in
//! file order). Stable sorting relies on it for tie-breaking.
//!
//! Names are identities. When two records share a name, the first one wins
//! and the later one is dropped with a warning.

use crate::error::{Result, Rl1Error};
use crate::model::{Item, SPELL_CATEGORIES, WEAPON_CATEGORIES};
use crate::text::fold;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub mod bundled;
pub mod source;

const WEAPON_PREFIX: &str = "weapons_";
const SPELL_PREFIX: &str = "spells_";

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog from already-normalized items, dropping later
    /// duplicates by name.
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| {
                let fresh = seen.insert(item.name.clone());
                if !fresh {
                    tracing::warn!(name = %item.name, "dropping duplicate catalog item");
                }
                fresh
            })
            .collect();
        Self { items }
    }

    /// The catalog embedded in the binary.
    ///
    /// A bundled file that is not a JSON array is skipped with a warning, so
    /// this never fails.
    pub fn bundled() -> Self {
        let mut items = Vec::new();
        for (category, text) in bundled::WEAPON_FILES {
            match parse_records(text) {
                Ok(records) => items.extend(source::weapon_items(category, records, category)),
                Err(e) => tracing::warn!(category, error = %e, "skipping bundled weapon file"),
            }
        }
        for (school, text) in bundled::SPELL_FILES {
            match parse_records(text) {
                Ok(records) => items.extend(source::spell_items(school, records, school)),
                Err(e) => tracing::warn!(school, error = %e, "skipping bundled spell file"),
            }
        }
        let catalog = Self::from_items(items);
        tracing::info!(items = catalog.len(), "loaded bundled catalog");
        catalog
    }

    /// Loads `weapons_*.json` and then `spells_*.json` from `dir`, each group
    /// in file-name order.
    ///
    /// The category of a file comes from its name (`weapons_great_hammers.json`
    /// is "Great Hammers") and is used for records that do not carry one.
    /// Unreadable files and files that are not JSON arrays are errors;
    /// malformed records inside a file are not.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut weapon_files = Vec::new();
        let mut spell_files = Vec::new();
        for entry in fs::read_dir(dir).map_err(Rl1Error::Io)? {
            let path = entry.map_err(Rl1Error::Io)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Some(rest) = stem.strip_prefix(WEAPON_PREFIX) {
                weapon_files.push((category_from_stem(rest, &WEAPON_CATEGORIES), path.clone()));
            } else if let Some(rest) = stem.strip_prefix(SPELL_PREFIX) {
                spell_files.push((category_from_stem(rest, &SPELL_CATEGORIES), path.clone()));
            }
        }
        weapon_files.sort_by(|a, b| a.1.cmp(&b.1));
        spell_files.sort_by(|a, b| a.1.cmp(&b.1));

        let mut items = Vec::new();
        for (category, path) in &weapon_files {
            let records = read_records(path)?;
            let origin = path.display().to_string();
            items.extend(source::weapon_items(category, records, &origin));
        }
        for (school, path) in &spell_files {
            let records = read_records(path)?;
            let origin = path.display().to_string();
            items.extend(source::spell_items(school, records, &origin));
        }

        let catalog = Self::from_items(items);
        tracing::info!(
            items = catalog.len(),
            weapon_files = weapon_files.len(),
            spell_files = spell_files.len(),
            dir = %dir.display(),
            "loaded catalog from directory"
        );
        Ok(catalog)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Looks an item up by name, ignoring case and known diacritics.
    pub fn find(&self, name: &str) -> Option<&Item> {
        let wanted = fold(name.trim());
        self.items.iter().find(|item| fold(&item.name) == wanted)
    }
}

fn parse_records(text: &str) -> std::result::Result<Vec<Value>, serde_json::Error> {
    serde_json::from_str(text)
}

fn read_records(path: &Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path).map_err(Rl1Error::Io)?;
    parse_records(&text).map_err(|e| Rl1Error::Catalog {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Maps a file-name stem such as `hand_to_hand` onto a known category label,
/// or title-cases it when no label matches.
fn category_from_stem(stem: &str, known: &[&str]) -> String {
    fn key(s: &str) -> String {
        fold(s).replace(['-', '_'], " ")
    }
    let wanted = key(stem);
    known
        .iter()
        .find(|label| key(label) == wanted)
        .map(|label| label.to_string())
        .unwrap_or_else(|| {
            wanted
                .split_whitespace()
                .map(|w| {
                    let mut chars = w.chars();
                    match chars.next() {
                        Some(c) => c.to_uppercase().chain(chars).collect::<String>(),
                        None => String::new(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
}
