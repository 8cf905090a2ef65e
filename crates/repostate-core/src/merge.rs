use crate::{BranchState, PullState, PullStatus, RemoteState, RepoSnapshot};

/// Merge one poll of remote state into the local snapshot.
///
/// Pure and total; the shell decides when to call it and what to do with the
/// result. Rules:
/// - unknown remote items are inserted
/// - known remote items are updated in place, preserving local bookkeeping
/// - Closed/Merged pulls are removed (explicit signal from the remote)
/// - local items a poll did not mention are retained; a transient remote
///   error or pagination gap must never drop history
pub fn merge_remote(snapshot: &mut RepoSnapshot, remote: &RemoteState, now_unix: i64) {
    for rb in &remote.branches {
        match snapshot.branches.get_mut(&rb.name) {
            Some(local) => {
                local.commit_sha = rb.commit_sha.clone();
                local.last_seen_unix = now_unix;
            }
            None => {
                snapshot.branches.insert(rb.name.clone(), BranchState::from_remote(rb, now_unix));
            }
        }
    }

    for rp in &remote.pulls {
        if rp.status != PullStatus::Open {
            snapshot.pulls.remove(&rp.number);
            continue;
        }
        match snapshot.pulls.get_mut(&rp.number) {
            Some(local) => {
                local.title = rp.title.clone();
                local.head_sha = rp.head_sha.clone();
                local.source_branch = rp.source_branch.clone();
                local.target_branch = rp.target_branch.clone();
                local.last_seen_unix = now_unix;
            }
            None => {
                snapshot.pulls.insert(rp.number, PullState::from_remote(rp, now_unix));
            }
        }
    }
}
