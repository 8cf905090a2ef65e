use std::path::PathBuf;

use repostate_core::{RemoteState, RepoId};

use crate::contract::{RemoteError, RemoteRepoClient};

/// Remote state read from a JSON file on disk. Harness implementation for
/// the CLI and local experiments: point it at a file describing what the
/// remote currently looks like, edit the file, reconcile again.
#[derive(Clone, Debug)]
pub struct FileRemote {
    path: PathBuf,
}

impl FileRemote {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RemoteRepoClient for FileRemote {
    fn fetch_state(&self, repo: &RepoId) -> Result<RemoteState, RemoteError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RemoteError::NotFound(format!("{} ({})", repo, self.path.display())));
            }
            Err(e) => {
                return Err(RemoteError::Network(format!("read {}: {}", self.path.display(), e)));
            }
        };
        serde_json::from_slice(&bytes)
            .map_err(|e| RemoteError::Network(format!("parse {}: {}", self.path.display(), e)))
    }
}
