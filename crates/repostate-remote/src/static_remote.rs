use std::collections::VecDeque;
use std::sync::Mutex;

use repostate_core::{RemoteState, RepoId};

use crate::contract::{RemoteError, RemoteRepoClient};

/// Scripted remote for tests: each fetch pops the next queued response.
/// An empty queue answers `NotFound`, so a test that over-fetches fails loudly.
#[derive(Default)]
pub struct StaticRemote {
    responses: Mutex<VecDeque<Result<RemoteState, RemoteError>>>,
}

impl StaticRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_state(&self, state: RemoteState) {
        self.responses.lock().unwrap().push_back(Ok(state));
    }

    pub fn push_error(&self, error: RemoteError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }
}

impl RemoteRepoClient for StaticRemote {
    fn fetch_state(&self, repo: &RepoId) -> Result<RemoteState, RemoteError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RemoteError::NotFound(repo.full_name())))
    }
}
