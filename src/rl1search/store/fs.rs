use super::PrefStore;
use crate::error::{Result, Rl1Error};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const PREFS_FILENAME: &str = "prefs.json";

pub struct FileStore {
    root: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store in `root`, reading `prefs.json` if it exists.
    ///
    /// Unreadable JSON is logged and treated as an empty store; the next
    /// write replaces the file.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let values = load_values(&root.join(PREFS_FILENAME))?;
        Ok(Self { root, values })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn prefs_path(&self) -> PathBuf {
        self.root.join(PREFS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(Rl1Error::Io)?;
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(&self.values).map_err(Rl1Error::Serialization)?;
        let tmp = self.root.join(format!("{}.tmp", PREFS_FILENAME));
        fs::write(&tmp, content).map_err(Rl1Error::Io)?;
        fs::rename(&tmp, self.prefs_path()).map_err(Rl1Error::Io)?;
        Ok(())
    }
}

fn load_values(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let content = fs::read_to_string(path).map_err(Rl1Error::Io)?;
    match serde_json::from_str::<BTreeMap<String, serde_json::Value>>(&content) {
        Ok(raw) => Ok(raw
            .into_iter()
            .map(|(k, v)| {
                let v = match v {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                (k, v)
            })
            .collect()),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt preferences file");
            Ok(BTreeMap::new())
        }
    }
}

impl PrefStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.values.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.save()?;
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("stats.strength", "24").unwrap();
        store.set("theme.currentTheme", "age-of-stars").unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("stats.strength").unwrap().as_deref(), Some("24"));
        assert_eq!(reopened.entries().unwrap().len(), 2);
    }

    #[test]
    fn missing_directory_is_created_on_first_write() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = FileStore::open(&nested).unwrap();
        assert!(store.get("x").unwrap().is_none());
        store.set("x", "1").unwrap();
        assert!(nested.join(PREFS_FILENAME).exists());
        assert!(!nested.join("prefs.json.tmp").exists());
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PREFS_FILENAME), "{not json").unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        assert!(store.entries().unwrap().is_empty());
        store.set("stats.faith", "30").unwrap();
        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("stats.faith").unwrap().as_deref(), Some("30"));
    }

    #[test]
    fn non_string_values_are_kept_as_json_text() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(PREFS_FILENAME),
            r#"{"stats.strength": 40, "stats.ignoreStats": true}"#,
        )
        .unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("stats.strength").unwrap().as_deref(), Some("40"));
        assert_eq!(store.get("stats.ignoreStats").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn remove_deletes_key() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("a", "1").unwrap();
        store.remove("a").unwrap();
        store.remove("never-set").unwrap();
        let reopened = FileStore::open(dir.path()).unwrap();
        assert!(reopened.get("a").unwrap().is_none());
    }
}
