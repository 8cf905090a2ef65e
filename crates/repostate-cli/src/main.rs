mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use repostate_store::{FsSnapshotStore, SnapshotStore};
use repostate_sync::{RepoStateFactory, SourceRegistry, TrackedRepoSource};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "repostate", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a starter repostate.toml
    Init {
        #[arg(long, default_value = "repostate.toml")]
        config: PathBuf,
    },

    /// Print the persisted snapshot for one job directory
    Status {
        #[arg(long)]
        job: PathBuf,
    },

    /// Reconcile every configured job once
    Reconcile {
        #[arg(long, default_value = "repostate.toml")]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Init { config } => {
            if config.exists() {
                anyhow::bail!("{} already exists", config.display());
            }
            Config::starter().save_to(&config)?;
            println!("Wrote {}", config.display());
        }
        Command::Status { job } => {
            let snapshot = FsSnapshotStore::new()
                .load(&job)
                .with_context(|| format!("no readable snapshot under {}", job.display()))?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Command::Reconcile { config } => {
            let cfg = Config::load_from(&config)?;

            // Sources are built explicitly here, at startup; the registry is
            // the only place the host looks for them.
            let mut registry = SourceRegistry::new();
            registry.register(Box::new(TrackedRepoSource::new(RepoStateFactory::new(
                Arc::new(FsSnapshotStore::new()),
            ))));

            for entry in &cfg.jobs {
                let job = entry.to_job();
                let actions = registry.actions_for(&job);
                match actions.first() {
                    Some(action) => println!(
                        "{}: {} ({} branches, {} pulls)",
                        entry.name,
                        action.label,
                        action.snapshot.branches.len(),
                        action.snapshot.pulls.len(),
                    ),
                    None => println!("{}: not tracking a repository", entry.name),
                }
            }
        }
    }

    Ok(())
}
