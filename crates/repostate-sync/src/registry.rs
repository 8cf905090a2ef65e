use repostate_core::RepoSnapshot;

use crate::factory::RepoStateFactory;
use crate::job::Job;

/// UI-facing result of reconciling one job: a label for rendering plus the
/// snapshot behind it.
#[derive(Clone, Debug)]
pub struct JobAction {
    pub label: String,
    pub snapshot: RepoSnapshot,
}

/// One contributor of per-job actions. Implementations are constructed
/// explicitly at process startup and registered on a [`SourceRegistry`];
/// there is no runtime discovery.
pub trait ActionSource: Send + Sync {
    fn actions_for(&self, job: &Job) -> Vec<JobAction>;
}

/// Explicit, ordered list of sources the host iterates per job.
#[derive(Default)]
pub struct SourceRegistry {
    sources: Vec<Box<dyn ActionSource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, source: Box<dyn ActionSource>) {
        self.sources.push(source);
    }

    pub fn actions_for(&self, job: &Job) -> Vec<JobAction> {
        self.sources.iter().flat_map(|s| s.actions_for(job)).collect()
    }
}

/// The tracked-repository source: zero or one action per job, produced by
/// the reconciling factory. Degrades to zero actions on every failure.
pub struct TrackedRepoSource {
    factory: RepoStateFactory,
}

impl TrackedRepoSource {
    pub fn new(factory: RepoStateFactory) -> Self {
        Self { factory }
    }
}

impl ActionSource for TrackedRepoSource {
    fn actions_for(&self, job: &Job) -> Vec<JobAction> {
        match self.factory.reconcile(job) {
            Some(snapshot) => {
                let label = format!("Tracked repository {}", snapshot.repo);
                vec![JobAction { label, snapshot }]
            }
            None => vec![],
        }
    }
}
