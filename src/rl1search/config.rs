//! # Configuration
//!
//! Settings are loaded with [`confique`], layered in priority order:
//! 1. **Environment variables**: `RL1_PAGE_SIZE`, `RL1_CATALOG_DIR`, `RL1_HOME`.
//! 2. **Config file**: `rl1.toml` in the OS config directory (via the
//!    `directories` crate), or the file given with `--config`.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! A missing config file is not an error; the defaults apply.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page_size` | `10` | Rows per page in `rl1 list` |
//! | `catalog_dir` | bundled | Directory of `weapons_*.json` / `spells_*.json` files |
//! | `data_dir` | OS data dir | Where `prefs.json` is kept |
//!
//! Preferences (attributes, toggles, columns, sort, theme) are not config:
//! they change as you use the tool and live in the preference store.

use crate::error::Result;
use crate::paginate::DEFAULT_PAGE_SIZE;
use confique::Config;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "rl1.toml";

#[derive(Config, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Rl1Config {
    /// Rows per page in `rl1 list`. Values below 1 are treated as 1.
    #[config(default = 10, env = "RL1_PAGE_SIZE")]
    pub page_size: usize,

    /// Load the catalog from this directory instead of the bundled data.
    /// Files must be named `weapons_<category>.json` or `spells_<school>.json`.
    #[config(env = "RL1_CATALOG_DIR")]
    pub catalog_dir: Option<PathBuf>,

    /// Directory holding `prefs.json`. Defaults to the OS data directory.
    #[config(env = "RL1_HOME")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Rl1Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            catalog_dir: None,
            data_dir: None,
        }
    }
}

impl Rl1Config {
    /// Loads environment overrides on top of `file` (when it exists) on top
    /// of the compiled defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Rl1Config::builder().env();
        if let Some(file) = file {
            builder = builder.file(file);
        }
        Ok(builder.load()?)
    }

    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// A commented `rl1.toml` listing every setting with its default.
    pub fn template() -> String {
        confique::toml::template::<Rl1Config>(confique::toml::FormatOptions::default())
    }
}
