use super::PrefStore;
use crate::error::Result;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    values: BTreeMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }

    fn entries(&self) -> Result<Vec<(String, String)>> {
        Ok(self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::prefs::keys;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with(mut self, key: &str, value: &str) -> Self {
            self.store.set(key, value).unwrap();
            self
        }

        /// All five attributes set to `value`.
        pub fn with_stats(self, value: u32) -> Self {
            let value = value.to_string();
            keys::ATTRIBUTES
                .iter()
                .fold(self, |fixture, key| fixture.with(key, &value))
        }

        pub fn ignoring_requirements(self) -> Self {
            self.with(keys::IGNORE_STATS, "true")
        }

        /// Preferences as an older release left them: split damage and
        /// wiki columns, sorted by a removed column.
        pub fn with_legacy_columns(self) -> Self {
            self.with(
                keys::SELECTED_COLUMNS,
                r#"["Image","Name","Strength","Arcane","Primary Damage","Secondary Damage","Wiki.gg","Fextralife"]"#,
            )
            .with(keys::SORT_BY, "Primary Damage")
        }
    }
}
