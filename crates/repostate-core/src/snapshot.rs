use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{BranchState, PullState, RepoId};

/// Persisted local view of one tracked repository. An immutable value from
/// the caller's perspective: the reconciler builds a fresh one per call and
/// the store replaces the whole file on save.
///
/// `repo` and `project_url` are seeded once, when the snapshot is first
/// created, and are not refreshed from job configuration afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSnapshot {
    pub repo: RepoId,
    pub project_url: String,
    #[serde(default)]
    pub branches: BTreeMap<String, BranchState>,
    #[serde(default)]
    pub pulls: BTreeMap<u64, PullState>,
}

impl RepoSnapshot {
    /// Empty snapshot seeded with the identity of the repository it tracks.
    pub fn seeded(repo: RepoId, project_url: impl Into<String>) -> Self {
        Self {
            repo,
            project_url: project_url.into(),
            branches: BTreeMap::new(),
            pulls: BTreeMap::new(),
        }
    }
}
