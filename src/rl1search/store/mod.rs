//! # Storage Layer
//!
//! Preferences are persisted through the [`PrefStore`] trait: a flat map of
//! string keys to string values. Typing, defaults and validation live one
//! layer up in [`crate::prefs`]; a store only moves strings around.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One JSON object in `<data_dir>/prefs.json`
//!   - Writes go to a temp file that is then renamed over the original
//!   - A corrupt file is treated as empty (with a warning) rather than an error
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fixtures behind the `test_utils` feature
//!
//! ## Storage Format
//!
//! ```text
//! <data_dir>/
//! └── prefs.json     # {"stats.strength": "24", "theme.currentTheme": "age-of-stars", ...}
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for preference storage.
pub trait PrefStore {
    /// Read a value, `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Forget a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// All stored pairs, sorted by key.
    fn entries(&self) -> Result<Vec<(String, String)>>;
}
