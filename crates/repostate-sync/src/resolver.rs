use repostate_core::{InvalidRepoId, RepoId};
use thiserror::Error;

use crate::job::Job;

/// What a tracked job is bound to. Recomputed from job configuration on
/// every reconciliation and never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub repo: RepoId,
    pub project_url: String,
}

#[derive(Debug, Error)]
pub enum BindingError {
    #[error("tracking trigger attached but no project url configured")]
    MissingProjectUrl,

    #[error("project url is not an absolute http(s) url: {0:?}")]
    MalformedUrl(String),

    #[error("cannot derive owner/name from project url {0:?}")]
    NoRepoInUrl(String),

    #[error(transparent)]
    InvalidRepo(#[from] InvalidRepoId),
}

/// Decide whether a job tracks a remote repository, from configuration only.
///
/// `Ok(None)` means "no tracking trigger", which is normal for most jobs. An
/// `Err` means the trigger is there but misconfigured; the caller logs it and
/// treats the job as unbound for this call. Never touches the network: this
/// runs during startup, before live connections exist.
pub fn resolve_binding(job: &Job) -> Result<Option<Binding>, BindingError> {
    let Some(trigger) = job.trigger() else {
        return Ok(None);
    };

    let project = job.project().ok_or(BindingError::MissingProjectUrl)?;
    let url = project.project_url.trim();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(BindingError::MalformedUrl(url.to_string()));
    }

    let repo = match trigger.repo_override() {
        Some(full_name) => RepoId::parse(full_name)?,
        None => repo_from_url(url)?,
    };

    Ok(Some(Binding { repo, project_url: url.to_string() }))
}

/// `https://host/owner/name[/...]` -> `owner/name`.
fn repo_from_url(url: &str) -> Result<RepoId, BindingError> {
    let rest = url.splitn(2, "://").nth(1).unwrap_or_default();
    let mut segments = rest.split('/').filter(|s| !s.is_empty());
    let _host = segments.next();
    match (segments.next(), segments.next()) {
        (Some(owner), Some(name)) => Ok(RepoId::parse(&format!("{}/{}", owner, name))?),
        _ => Err(BindingError::NoRepoInUrl(url.to_string())),
    }
}
