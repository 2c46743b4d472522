//! Key-value persistence for the high score.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::parse_high_score;
use crate::types::HIGH_SCORE_KEY;

/// String key-value storage
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Load the stored high score; missing or malformed values read as 0
pub fn load_high_score(store: &dyn KeyValueStore) -> u32 {
    parse_high_score(store.get(HIGH_SCORE_KEY).as_deref())
}

/// Store `score` under the high-score key
pub fn save_high_score(store: &mut dyn KeyValueStore, score: u32) -> Result<()> {
    store.set(HIGH_SCORE_KEY, &score.to_string())
}

/// Process-local store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

fn default_version() -> u32 {
    1
}

/// JSON file store, rewritten on every `set`
///
/// A missing or unreadable file behaves like an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    data: StoreFile,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = fs::read(&path)
            .ok()
            .and_then(|bytes| serde_json::from_slice::<StoreFile>(&bytes).ok())
            .unwrap_or_else(|| StoreFile {
                version: default_version(),
                entries: BTreeMap::new(),
            });
        Self { path, data }
    }

    /// `$PINK_BLAST_STORE`, else `$XDG_DATA_HOME/pink-blast/store.json`,
    /// else `$HOME/.local/share/pink-blast/store.json`
    pub fn default_path() -> PathBuf {
        if let Some(explicit) = std::env::var_os("PINK_BLAST_STORE") {
            return PathBuf::from(explicit);
        }

        let base = std::env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".local");
                    p.push("share");
                    p
                })
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let mut path = base;
        path.push("pink-blast");
        path.push("store.json");
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }
        let text = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, text).with_context(|| format!("write {}", self.path.display()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.data.entries.insert(key.to_string(), value.to_string());
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("pink-blast-{}-{}", std::process::id(), name));
        p.push("store.json");
        p
    }

    #[test]
    fn memory_store_roundtrips_high_score() {
        let mut store = MemoryStore::new();
        assert_eq!(load_high_score(&store), 0);
        save_high_score(&mut store, 1234).unwrap();
        assert_eq!(store.get(HIGH_SCORE_KEY).as_deref(), Some("1234"));
        assert_eq!(load_high_score(&store), 1234);
    }

    #[test]
    fn malformed_high_score_reads_as_zero() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, "not a number").unwrap();
        assert_eq!(load_high_score(&store), 0);
    }

    #[test]
    fn json_store_persists_across_reopen() {
        let path = temp_path("reopen");
        let _ = fs::remove_file(&path);

        let mut store = JsonFileStore::open(&path);
        assert_eq!(store.get(HIGH_SCORE_KEY), None);
        save_high_score(&mut store, 987).unwrap();

        let reopened = JsonFileStore::open(&path);
        assert_eq!(load_high_score(&reopened), 987);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn corrupt_json_file_behaves_like_empty_store() {
        let path = temp_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(load_high_score(&store), 0);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
