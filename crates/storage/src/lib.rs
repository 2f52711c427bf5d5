//! Storage layer: corpus files and the persisted index artifact set.
//!
//! Index artifacts are plain JSON files under a single directory, one per
//! key. The store exposes get/put semantics only; what the artifacts mean
//! is the engine's business.

pub mod corpus;
pub mod models;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

/// File-backed store for the index artifact set.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The file a key is persisted under.
    pub fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Fetch one artifact. Missing and corrupt files both read as `None`;
    /// a partial artifact set must never surface as an error.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path(key);
        let bytes = std::fs::read(&path).ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(
                    "Artifact {} is unreadable ({}); treating it as absent.",
                    path.display(),
                    err
                );
                None
            }
        }
    }

    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let bytes = serde_json::to_vec(value)?;
        std::fs::write(self.path(key), bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn get_returns_none_for_missing_key() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let value: Option<Vec<u32>> = store.get("nothing");
        assert!(value.is_none());
    }

    #[test]
    fn put_then_get_roundtrips() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        store.put("numbers", &vec![1u32, 2, 3]).unwrap();
        let value: Vec<u32> = store.get("numbers").unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn corrupt_artifact_reads_as_absent() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        store.put("numbers", &vec![1u32]).unwrap();
        std::fs::write(store.path("numbers"), b"{not json").unwrap();
        let value: Option<Vec<u32>> = store.get("numbers");
        assert!(value.is_none());
    }
}
