use std::collections::HashMap as StdHashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

fn sanitize_filename(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Durable local key/value store: one JSON file per key under `dir`, with a
/// write-through in-memory map. Plays the role browser localStorage plays for
/// the web client; every read that finds a corrupt entry deletes it and
/// reports absence rather than failing.
#[derive(Clone)]
pub struct LocalStore {
    dir: PathBuf,
    map: Arc<parking_lot::RwLock<StdHashMap<String, JsonValue>>>,
}

impl LocalStore {
    /// Open (creating if needed) a store rooted at `dir` and load every
    /// readable entry. Unparsable files are removed on the spot.
    pub fn open(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        let mut map = StdHashMap::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else { continue };
            match std::fs::read_to_string(&path).ok().and_then(|s| serde_json::from_str::<JsonValue>(&s).ok()) {
                Some(v) => {
                    map.insert(stem.to_string(), v);
                }
                None => {
                    warn!(target: "railbite::storage", "purging corrupt entry '{}'", stem);
                    let _ = std::fs::remove_file(&path);
                }
            }
        }
        debug!(target: "railbite::storage", "opened store at {:?} with {} entries", dir, map.len());
        Ok(Self { dir, map: Arc::new(parking_lot::RwLock::new(map)) })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_filename(key)))
    }

    /// Get and deserialize a value. Any shape mismatch is treated as absent:
    /// the entry is purged and `None` returned, never an error.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.map.read().get(key).cloned()?;
        match serde_json::from_value::<T>(raw) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(target: "railbite::storage", "entry '{}' has wrong shape ({}), purging", key, e);
                self.remove(key);
                None
            }
        }
    }

    /// Get the raw JSON value without shape validation.
    pub fn get_raw(&self, key: &str) -> Option<JsonValue> {
        self.map.read().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.read().contains_key(key)
    }

    /// Serialize and persist a value under `key`, replacing any prior entry.
    /// A write failure leaves the in-memory value in place and is logged; the
    /// next process start then simply restores less than this one saw.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_value(value) {
            Ok(v) => v,
            Err(e) => {
                warn!(target: "railbite::storage", "failed to serialize '{}': {}", key, e);
                return;
            }
        };
        let path = self.key_path(key);
        if let Err(e) = std::fs::write(&path, json.to_string()) {
            warn!(target: "railbite::storage", "failed to persist '{}': {}", key, e);
        }
        self.map.write().insert(key.to_string(), json);
    }

    /// Remove an entry from memory and disk. Missing entries are a no-op.
    pub fn remove(&self, key: &str) {
        self.map.write().remove(key);
        let _ = std::fs::remove_file(self.key_path(key));
    }

    /// Take a value: read, deserialize, and remove in one step. Used for
    /// one-shot entries like the intended post-login destination.
    pub fn take<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let out = self.get::<T>(key);
        if out.is_some() {
            self.remove(key);
        }
        out
    }
}
