use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use repostate_remote::FileRemote;
use repostate_sync::{Job, TrackingTrigger};

/// Jobs config for the CLI harness. Each entry stands in for a job the
/// hosting system would normally own.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub jobs: Vec<JobEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JobEntry {
    pub name: String,
    pub dir: PathBuf,
    #[serde(default)]
    pub project_url: Option<String>,
    /// Explicit `owner/name` override; otherwise derived from the url.
    #[serde(default)]
    pub repo: Option<String>,
    /// JSON file describing current remote state. Present means the job
    /// polls; absent means the job is untracked.
    #[serde(default)]
    pub remote_state: Option<PathBuf>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let s = toml::to_string_pretty(self).context("serialize config")?;
        std::fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    pub fn starter() -> Self {
        Self {
            jobs: vec![JobEntry {
                name: "jobs/site".to_string(),
                dir: PathBuf::from("jobs/site"),
                project_url: Some("https://github.com/octocat/hello-world".to_string()),
                repo: None,
                remote_state: Some(PathBuf::from("remote/hello-world.json")),
            }],
        }
    }
}

impl JobEntry {
    pub fn to_job(&self) -> Job {
        let mut job = Job::new(&self.name, &self.dir);
        if let Some(url) = &self.project_url {
            job = job.with_project_url(url);
        }
        if let Some(path) = &self.remote_state {
            let mut trigger = TrackingTrigger::new(Arc::new(FileRemote::new(path)));
            if let Some(repo) = &self.repo {
                trigger = trigger.with_repo(repo);
            }
            job = job.with_trigger(trigger);
        }
        job
    }
}
