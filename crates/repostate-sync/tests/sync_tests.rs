use std::path::Path;
use std::sync::Arc;

use repostate_core::{PullStatus, RemoteBranch, RemotePull, RemoteState, RepoId};
use repostate_remote::{RemoteError, StaticRemote};
use repostate_store::{FsSnapshotStore, InMemorySnapshotStore, SnapshotStore};
use repostate_sync::{Job, RepoStateFactory, SourceRegistry, TrackedRepoSource, TrackingTrigger};

fn branch(name: &str, sha: &str) -> RemoteBranch {
    RemoteBranch { name: name.into(), commit_sha: sha.into() }
}

fn open_pull(number: u64, head_sha: &str) -> RemotePull {
    RemotePull {
        number,
        title: format!("pr {}", number),
        head_sha: head_sha.into(),
        source_branch: "feature".into(),
        target_branch: "main".into(),
        status: PullStatus::Open,
    }
}

fn branches(list: Vec<RemoteBranch>) -> RemoteState {
    RemoteState { branches: list, pulls: vec![] }
}

fn tracked_job(dir: &Path, remote: Arc<StaticRemote>) -> Job {
    Job::new("jobs/site", dir)
        .with_project_url("https://github.com/octocat/hello")
        .with_trigger(TrackingTrigger::new(remote))
}

#[test]
fn unbound_job_produces_nothing_twice() {
    let store = Arc::new(InMemorySnapshotStore::new());
    let factory = RepoStateFactory::new(store.clone());
    let job = Job::new("jobs/plain", "/jobs/plain");

    assert!(factory.reconcile(&job).is_none());
    assert!(factory.reconcile(&job).is_none());
    assert!(!store.exists(Path::new("/jobs/plain")));
}

#[test]
fn misconfigured_tracked_job_degrades_to_unbound() {
    let store = Arc::new(InMemorySnapshotStore::new());
    let factory = RepoStateFactory::new(store.clone());
    // Trigger attached but no project url: config error, not a panic.
    let job = Job::new("jobs/broken", "/jobs/broken")
        .with_trigger(TrackingTrigger::new(Arc::new(StaticRemote::new())));

    assert!(factory.reconcile(&job).is_none());
    assert!(!store.exists(Path::new("/jobs/broken")));
}

#[test]
fn first_reconciliation_creates_a_seeded_snapshot_file() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(StaticRemote::new());
    remote.push_state(RemoteState::default());

    let store = Arc::new(FsSnapshotStore::new());
    let factory = RepoStateFactory::new(store.clone());
    let job = tracked_job(dir.path(), remote);

    let snapshot = factory.reconcile(&job).unwrap();
    assert_eq!(snapshot.repo, RepoId::new("octocat", "hello"));
    assert_eq!(snapshot.project_url, "https://github.com/octocat/hello");
    assert!(store.exists(dir.path()));
    assert_eq!(store.load(dir.path()).unwrap(), snapshot);
}

#[test]
fn corrupt_snapshot_file_self_heals() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(FsSnapshotStore::snapshot_path(dir.path()), b"\x00garbage").unwrap();

    let remote = Arc::new(StaticRemote::new());
    remote.push_state(branches(vec![branch("main", "abc")]));

    let store = Arc::new(FsSnapshotStore::new());
    let factory = RepoStateFactory::new(store.clone());

    let snapshot = factory.reconcile(&tracked_job(dir.path(), remote)).unwrap();
    assert_eq!(snapshot.branches["main"].commit_sha, "abc");

    // The file was overwritten with a valid snapshot.
    assert_eq!(store.load(dir.path()).unwrap(), snapshot);
}

#[test]
fn merge_unions_local_history_with_the_latest_poll() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(StaticRemote::new());
    remote.push_state(RemoteState {
        branches: vec![branch("a", "sha-a"), branch("b", "sha-b")],
        pulls: vec![open_pull(1, "h1")],
    });
    remote.push_state(RemoteState {
        branches: vec![branch("b", "sha-b2"), branch("c", "sha-c")],
        pulls: vec![open_pull(1, "h2")],
    });

    let store = Arc::new(FsSnapshotStore::new());
    let factory = RepoStateFactory::new(store);
    let job = tracked_job(dir.path(), remote);

    factory.reconcile(&job).unwrap();
    let snapshot = factory.reconcile(&job).unwrap();

    assert_eq!(snapshot.branches.len(), 3);
    assert_eq!(snapshot.branches["a"].commit_sha, "sha-a");
    assert_eq!(snapshot.branches["b"].commit_sha, "sha-b2");
    assert_eq!(snapshot.branches["c"].commit_sha, "sha-c");
    assert_eq!(snapshot.pulls[&1].head_sha, "h2");
}

#[test]
fn remote_failure_serves_the_last_known_state() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(StaticRemote::new());
    remote.push_state(branches(vec![branch("main", "abc")]));
    remote.push_error(RemoteError::Network("connection refused".into()));

    let store = Arc::new(FsSnapshotStore::new());
    let factory = RepoStateFactory::new(store.clone());
    let job = tracked_job(dir.path(), remote);

    let first = factory.reconcile(&job).unwrap();
    let second = factory.reconcile(&job).unwrap();

    assert_eq!(first, second);
    assert_eq!(store.load(dir.path()).unwrap(), second);
}

#[test]
fn save_failure_still_returns_the_merged_snapshot() {
    let store = Arc::new(InMemorySnapshotStore::new());
    store.set_fail_saves(true);

    let remote = Arc::new(StaticRemote::new());
    remote.push_state(branches(vec![branch("main", "abc")]));

    let factory = RepoStateFactory::new(store.clone());
    let job = tracked_job(Path::new("/jobs/site"), remote);

    let snapshot = factory.reconcile(&job).unwrap();
    assert_eq!(snapshot.branches["main"].commit_sha, "abc");
    assert!(!store.exists(Path::new("/jobs/site")));
}

#[test]
fn identity_is_frozen_at_snapshot_creation() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(StaticRemote::new());
    remote.push_state(RemoteState::default());
    remote.push_state(RemoteState::default());

    let store = Arc::new(FsSnapshotStore::new());
    let factory = RepoStateFactory::new(store);

    let first = factory.reconcile(&tracked_job(dir.path(), remote.clone())).unwrap();
    assert_eq!(first.repo, RepoId::new("octocat", "hello"));

    // Reconfigure the job to point elsewhere; the persisted identity stays.
    let moved = Job::new("jobs/site", dir.path())
        .with_project_url("https://github.com/moved/elsewhere")
        .with_trigger(TrackingTrigger::new(remote));
    let second = factory.reconcile(&moved).unwrap();
    assert_eq!(second.repo, RepoId::new("octocat", "hello"));
    assert_eq!(second.project_url, "https://github.com/octocat/hello");
}

#[test]
fn concurrent_reconciliations_of_one_job_keep_both_updates() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(StaticRemote::new());
    remote.push_state(branches(vec![branch("feature-a", "sha-a")]));
    remote.push_state(branches(vec![branch("feature-b", "sha-b")]));

    let store = Arc::new(FsSnapshotStore::new());
    let factory = Arc::new(RepoStateFactory::new(store.clone()));
    let job = tracked_job(dir.path(), remote);

    std::thread::scope(|scope| {
        for _ in 0..2 {
            let factory = factory.clone();
            let job = job.clone();
            scope.spawn(move || {
                assert!(factory.reconcile(&job).is_some());
            });
        }
    });

    let persisted = store.load(dir.path()).unwrap();
    assert!(persisted.branches.contains_key("feature-a"));
    assert!(persisted.branches.contains_key("feature-b"));
}

#[test]
fn registry_yields_one_action_for_tracked_jobs_and_none_otherwise() {
    let remote = Arc::new(StaticRemote::new());
    remote.push_state(RemoteState::default());

    let mut registry = SourceRegistry::new();
    registry.register(Box::new(TrackedRepoSource::new(RepoStateFactory::new(Arc::new(
        InMemorySnapshotStore::new(),
    )))));

    let plain = Job::new("jobs/plain", "/jobs/plain");
    assert!(registry.actions_for(&plain).is_empty());

    let tracked = tracked_job(Path::new("/jobs/site"), remote);
    let actions = registry.actions_for(&tracked);
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].label, "Tracked repository octocat/hello");
}
