use std::sync::Arc;

use repostate_core::{merge_remote, RepoSnapshot};
use repostate_store::{SnapshotStore, StoreError};
use tracing::{info, warn};

use crate::job::Job;
use crate::locks::JobLocks;
use crate::resolver::{resolve_binding, Binding};
use crate::util::now_unix;

/// Obtains-or-creates the local snapshot for a tracked job, folds in one
/// poll of remote state, persists the result, and hands the snapshot back.
///
/// This sits on a UI-rendering path, so the one hard rule is that nothing
/// fails outward: every internal step returns a `Result` that is either used
/// or discarded here with a logged reason, and the caller gets the best
/// state that was available.
pub struct RepoStateFactory {
    store: Arc<dyn SnapshotStore>,
    locks: JobLocks,
}

impl RepoStateFactory {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store, locks: JobLocks::new() }
    }

    /// `None` only when the job does not track a repository (or its tracking
    /// configuration is broken, which degrades to the same thing).
    pub fn reconcile(&self, job: &Job) -> Option<RepoSnapshot> {
        let binding = match resolve_binding(job) {
            Ok(Some(binding)) => binding,
            Ok(None) => return None,
            Err(e) => {
                warn!(job = job.full_name(), error = %e, "tracked job is misconfigured; treating as unbound");
                return None;
            }
        };
        // A binding implies the trigger is attached.
        let trigger = job.trigger()?;

        let slot = self.locks.slot(job.full_name());
        let _guard = slot.lock().unwrap();

        let mut snapshot = self.load_or_seed(job, &binding);

        match trigger.remote().fetch_state(&binding.repo) {
            Ok(remote) => merge_remote(&mut snapshot, &remote, now_unix()),
            Err(e) => {
                warn!(job = job.full_name(), error = %e, "remote fetch failed; serving last known state");
            }
        }

        if let Err(e) = self.store.save(job.root_dir(), &snapshot) {
            warn!(job = job.full_name(), error = %e, "could not persist snapshot; serving in-memory state");
        }

        Some(snapshot)
    }

    /// Load the persisted snapshot, or seed a fresh one from the binding.
    /// Corrupt or unreadable state self-heals here instead of blocking the job.
    fn load_or_seed(&self, job: &Job, binding: &Binding) -> RepoSnapshot {
        match self.store.load(job.root_dir()) {
            Ok(snapshot) => snapshot,
            Err(StoreError::Missing { .. }) => {
                info!(job = job.full_name(), repo = %binding.repo, "no snapshot yet, creating one");
                RepoSnapshot::seeded(binding.repo.clone(), binding.project_url.clone())
            }
            Err(e @ StoreError::Corrupt { .. }) => {
                info!(job = job.full_name(), error = %e, "saved snapshot unreadable, re-creating");
                RepoSnapshot::seeded(binding.repo.clone(), binding.project_url.clone())
            }
            Err(e) => {
                warn!(job = job.full_name(), error = %e, "snapshot load failed, re-creating");
                RepoSnapshot::seeded(binding.repo.clone(), binding.project_url.clone())
            }
        }
    }
}
