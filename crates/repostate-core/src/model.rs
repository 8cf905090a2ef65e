use serde::{Deserialize, Serialize};

/// One branch as a single poll observed it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteBranch {
    pub name: String,
    pub commit_sha: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PullStatus {
    Open,
    Closed,
    Merged,
}

/// One pull request as a single poll observed it. Closed/Merged entries are
/// the explicit signal that the local entry should be dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePull {
    pub number: u64,
    pub title: String,
    pub head_sha: String,
    pub source_branch: String,
    pub target_branch: String,
    pub status: PullStatus,
}

/// Everything one poll of the remote repository returned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteState {
    pub branches: Vec<RemoteBranch>,
    pub pulls: Vec<RemotePull>,
}

/// Locally tracked branch. `last_processed_sha` is bookkeeping owned by the
/// host (e.g. the last commit it acted on) and is never sourced from the
/// remote, so merges must leave it alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchState {
    pub name: String,
    pub commit_sha: String,
    pub last_seen_unix: i64,
    #[serde(default)]
    pub last_processed_sha: Option<String>,
}

/// Locally tracked pull request, same bookkeeping rules as [`BranchState`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullState {
    pub number: u64,
    pub title: String,
    pub head_sha: String,
    pub source_branch: String,
    pub target_branch: String,
    pub last_seen_unix: i64,
    #[serde(default)]
    pub last_processed_sha: Option<String>,
}

impl BranchState {
    pub fn from_remote(remote: &RemoteBranch, now_unix: i64) -> Self {
        Self {
            name: remote.name.clone(),
            commit_sha: remote.commit_sha.clone(),
            last_seen_unix: now_unix,
            last_processed_sha: None,
        }
    }
}

impl PullState {
    pub fn from_remote(remote: &RemotePull, now_unix: i64) -> Self {
        Self {
            number: remote.number,
            title: remote.title.clone(),
            head_sha: remote.head_sha.clone(),
            source_branch: remote.source_branch.clone(),
            target_branch: remote.target_branch.clone(),
            last_seen_unix: now_unix,
            last_processed_sha: None,
        }
    }
}
