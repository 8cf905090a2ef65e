use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use repostate_core::RepoSnapshot;

use crate::traits::{SnapshotStore, StoreError};

/// In-memory store for tests. Keeps serialized JSON per job dir so corrupt
/// blobs can be injected with [`InMemorySnapshotStore::put_raw`], and saves
/// can be made to fail to exercise the fail-open path.
#[derive(Default)]
pub struct InMemorySnapshotStore {
    blobs: Mutex<HashMap<PathBuf, Vec<u8>>>,
    fail_saves: AtomicBool,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_raw(&self, job_dir: &Path, bytes: impl Into<Vec<u8>>) {
        self.blobs.lock().unwrap().insert(job_dir.to_path_buf(), bytes.into());
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn exists(&self, job_dir: &Path) -> bool {
        self.blobs.lock().unwrap().contains_key(job_dir)
    }

    fn load(&self, job_dir: &Path) -> Result<RepoSnapshot, StoreError> {
        let blobs = self.blobs.lock().unwrap();
        let bytes = blobs.get(job_dir).ok_or_else(|| StoreError::Missing { path: job_dir.to_path_buf() })?;
        serde_json::from_slice(bytes)
            .map_err(|e| StoreError::Corrupt { path: job_dir.to_path_buf(), source: e })
    }

    fn save(&self, job_dir: &Path, snapshot: &RepoSnapshot) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Io {
                path: job_dir.to_path_buf(),
                source: std::io::Error::other("saves disabled"),
            });
        }
        let bytes = serde_json::to_vec(snapshot)
            .map_err(|e| StoreError::Corrupt { path: job_dir.to_path_buf(), source: e })?;
        self.blobs.lock().unwrap().insert(job_dir.to_path_buf(), bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repostate_core::{RepoId, RepoSnapshot};

    fn snap() -> RepoSnapshot {
        RepoSnapshot::seeded(RepoId::new("octocat", "hello"), "https://github.com/octocat/hello")
    }

    #[test]
    fn save_load_and_exists() {
        let store = InMemorySnapshotStore::new();
        let dir = Path::new("/jobs/site");
        assert!(!store.exists(dir));
        store.save(dir, &snap()).unwrap();
        assert!(store.exists(dir));
        assert_eq!(store.load(dir).unwrap(), snap());
    }

    #[test]
    fn raw_garbage_is_corrupt() {
        let store = InMemorySnapshotStore::new();
        let dir = Path::new("/jobs/site");
        store.put_raw(dir, &b"}{"[..]);
        assert!(matches!(store.load(dir), Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn disabled_saves_fail_with_io() {
        let store = InMemorySnapshotStore::new();
        store.set_fail_saves(true);
        let err = store.save(Path::new("/jobs/site"), &snap()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
