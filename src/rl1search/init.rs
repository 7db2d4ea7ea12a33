//! # Startup
//!
//! Wires configuration, catalog and preference store into a ready [`Rl1Api`].
//!
//! ## Resolution Order
//!
//! 1. **Config file**: the `--config` path when given, otherwise `rl1.toml` in
//!    the OS config directory (via the `directories` crate). A missing file is
//!    fine; environment variables and compiled defaults still apply.
//! 2. **Data directory**: `data_dir` from the config (or `RL1_HOME`),
//!    otherwise the OS data directory. `prefs.json` lives here.
//! 3. **Catalog**: the JSON files in `catalog_dir` when set, otherwise the
//!    bundled catalog.

use crate::api::Rl1Api;
use crate::catalog::Catalog;
use crate::config::{Rl1Config, CONFIG_FILENAME};
use crate::error::{Result, Rl1Error};
use crate::session::Session;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct Rl1Context {
    pub api: Rl1Api<FileStore>,
    pub config: Rl1Config,
    /// The config file consulted, whether or not it exists.
    pub config_path: Option<PathBuf>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "rl1", "rl1")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Where `prefs.json` is kept for `config`.
pub fn data_dir(config: &Rl1Config) -> Result<PathBuf> {
    config
        .data_dir
        .clone()
        .or_else(|| project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
        .ok_or_else(|| Rl1Error::Store("Could not determine a data directory; set RL1_HOME".into()))
}

pub fn load_catalog(config: &Rl1Config) -> Result<Catalog> {
    match &config.catalog_dir {
        Some(dir) => Catalog::load_dir(dir),
        None => Ok(Catalog::bundled()),
    }
}

pub fn initialize(config_override: Option<&Path>) -> Result<Rl1Context> {
    let config_path = config_override
        .map(Path::to_path_buf)
        .or_else(default_config_path);
    let config = Rl1Config::load(config_path.as_deref())?;

    let catalog = load_catalog(&config)?;
    let data_dir = data_dir(&config)?;
    tracing::debug!(
        data_dir = %data_dir.display(),
        items = catalog.len(),
        "initializing session"
    );

    let store = FileStore::open(data_dir)?;
    let session = Session::new(catalog, store, config.page_size())?;
    let api = Rl1Api::new(session, config.clone());

    Ok(Rl1Context {
        api,
        config,
        config_path,
    })
}
