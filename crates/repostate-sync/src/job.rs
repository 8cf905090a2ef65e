use std::path::{Path, PathBuf};
use std::sync::Arc;

use repostate_remote::RemoteRepoClient;

/// Project-level property: where the tracked project lives on the remote
/// host. Separate from the trigger because a job can carry the URL without
/// ever polling.
#[derive(Clone, Debug)]
pub struct ProjectProperty {
    pub project_url: String,
}

/// Trigger configuration for a job that polls a remote repository. Owns the
/// remote connection; the reconciler fetches through [`TrackingTrigger::remote`]
/// rather than deriving a connection of its own.
#[derive(Clone)]
pub struct TrackingTrigger {
    repo_override: Option<String>,
    remote: Arc<dyn RemoteRepoClient>,
}

impl TrackingTrigger {
    pub fn new(remote: Arc<dyn RemoteRepoClient>) -> Self {
        Self { repo_override: None, remote }
    }

    /// Explicit `owner/name`, taking precedence over derivation from the
    /// project URL.
    pub fn with_repo(mut self, full_name: impl Into<String>) -> Self {
        self.repo_override = Some(full_name.into());
        self
    }

    pub fn repo_override(&self) -> Option<&str> {
        self.repo_override.as_deref()
    }

    pub fn remote(&self) -> &Arc<dyn RemoteRepoClient> {
        &self.remote
    }
}

/// Handle on a job owned by the hosting system. Read-only here: this crate
/// inspects configuration and the root directory, never mutates either.
#[derive(Clone)]
pub struct Job {
    full_name: String,
    root_dir: PathBuf,
    project: Option<ProjectProperty>,
    trigger: Option<TrackingTrigger>,
}

impl Job {
    pub fn new(full_name: impl Into<String>, root_dir: impl Into<PathBuf>) -> Self {
        Self {
            full_name: full_name.into(),
            root_dir: root_dir.into(),
            project: None,
            trigger: None,
        }
    }

    pub fn with_project_url(mut self, project_url: impl Into<String>) -> Self {
        self.project = Some(ProjectProperty { project_url: project_url.into() });
        self
    }

    pub fn with_trigger(mut self, trigger: TrackingTrigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn project(&self) -> Option<&ProjectProperty> {
        self.project.as_ref()
    }

    pub fn trigger(&self) -> Option<&TrackingTrigger> {
        self.trigger.as_ref()
    }
}
