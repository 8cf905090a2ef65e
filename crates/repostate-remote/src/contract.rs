use repostate_core::{RemoteState, RepoId};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("network error talking to remote: {0}")]
    Network(String),

    #[error("remote rejected credentials: {0}")]
    Auth(String),

    #[error("remote repository not found: {0}")]
    NotFound(String),
}

/// Fetches the current state of one remote repository.
///
/// Implementations own connection handling and timeouts; callers treat any
/// error as "this poll produced nothing" and keep their last known state.
pub trait RemoteRepoClient: Send + Sync {
    fn fetch_state(&self, repo: &RepoId) -> Result<RemoteState, RemoteError>;
}
