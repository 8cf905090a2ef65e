use std::path::{Path, PathBuf};

use repostate_core::RepoSnapshot;
use tracing::debug;

use crate::traits::{SnapshotStore, StoreError};

/// Fixed filename inside each job's root directory. One file per job keeps
/// job state isolated and avoids cross-job collisions.
pub const SNAPSHOT_FILE: &str = "repo-state.json";

/// File-backed snapshot store: pretty-printed JSON so operators can inspect
/// the state, written to a sibling temp file and renamed into place.
#[derive(Clone, Debug, Default)]
pub struct FsSnapshotStore;

impl FsSnapshotStore {
    pub fn new() -> Self {
        Self
    }

    pub fn snapshot_path(job_dir: &Path) -> PathBuf {
        job_dir.join(SNAPSHOT_FILE)
    }
}

impl SnapshotStore for FsSnapshotStore {
    fn exists(&self, job_dir: &Path) -> bool {
        Self::snapshot_path(job_dir).is_file()
    }

    fn load(&self, job_dir: &Path) -> Result<RepoSnapshot, StoreError> {
        let path = Self::snapshot_path(job_dir);
        let bytes = match std::fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::Missing { path });
            }
            Err(e) => return Err(StoreError::Io { path, source: e }),
        };
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt { path, source: e })
    }

    fn save(&self, job_dir: &Path, snapshot: &RepoSnapshot) -> Result<(), StoreError> {
        let path = Self::snapshot_path(job_dir);

        std::fs::create_dir_all(job_dir)
            .map_err(|e| StoreError::Io { path: path.clone(), source: e })?;
        let bytes = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| StoreError::Corrupt { path: path.clone(), source: e })?;

        // Whole-file replace: write a sibling temp file, then rename over.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, bytes)
            .map_err(|e| StoreError::Io { path: tmp.clone(), source: e })?;
        std::fs::rename(&tmp, &path)
            .map_err(|e| StoreError::Io { path: path.clone(), source: e })?;
        debug!(path = %path.display(), "snapshot saved");
        Ok(())
    }
}
