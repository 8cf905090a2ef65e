use std::path::{Path, PathBuf};

use repostate_core::RepoSnapshot;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no snapshot at {path}")]
    Missing { path: PathBuf },

    #[error("corrupt snapshot at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("snapshot io at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-job snapshot persistence, keyed by the job's own root directory.
/// One blob per job; `save` replaces the whole thing, so readers never see a
/// partial write.
pub trait SnapshotStore: Send + Sync {
    fn exists(&self, job_dir: &Path) -> bool;
    fn load(&self, job_dir: &Path) -> Result<RepoSnapshot, StoreError>;
    fn save(&self, job_dir: &Path, snapshot: &RepoSnapshot) -> Result<(), StoreError>;
}
