//! Implementation of the `card-labeler run` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::warn;

use crate::cli::github_client;
use crate::cli::output::{label_list, output, CommandOutput};
use crate::domain::errors::DomainError;
use crate::domain::models::{CardEvent, Config, RepoContext};
use crate::infrastructure::config::ConfigLoader;
use crate::services::{LabelOutcome, Labeler};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Webhook payload of the project_card event
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: PathBuf,

    /// Repository as owner/repo
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repo: RepoContext,

    /// Label rules file (defaults to the configured rules_path)
    #[arg(long)]
    pub rules: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct RunOutput {
    pub repo: String,
    #[serde(flatten)]
    pub outcome: LabelOutcome,
}

impl CommandOutput for RunOutput {
    fn to_human(&self) -> String {
        match &self.outcome {
            LabelOutcome::Skipped { reason } => format!("Skipped: {reason}"),
            LabelOutcome::Applied {
                issue_number,
                added,
                removed,
                failed_removals,
            } => {
                let mut lines = vec![
                    format!("Labeled {}#{issue_number}", self.repo),
                    format!("  added:   {}", label_list(added)),
                    format!("  removed: {}", label_list(removed)),
                ];
                if !failed_removals.is_empty() {
                    let failed = label_list(failed_removals);
                    lines.push(format!("  failed to remove: {failed}"));
                }
                lines.join("\n")
            }
        }
    }
}

/// Read a `project_card` event payload from disk.
pub async fn read_event(path: &Path) -> Result<CardEvent> {
    let display = path.display();
    let payload = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read event payload from {display}"))?;
    let event = serde_json::from_str(&payload)
        .map_err(DomainError::from)
        .with_context(|| format!("Failed to parse event payload in {display}"))?;
    Ok(event)
}

pub async fn execute(args: RunArgs, config: &Config, json_mode: bool) -> Result<()> {
    let event = read_event(&args.event_path).await?;
    let rules_path = args.rules.unwrap_or_else(|| config.rules_path.clone());
    let rules = ConfigLoader::load_rules(&rules_path)?;
    if rules.is_empty() {
        warn!(path = %rules_path.display(), "label rules file has no entries");
    }

    let labeler = Labeler::new(github_client(config)?, rules);
    let outcome = labeler.apply(&event, &args.repo).await?;

    output(
        &RunOutput {
            repo: args.repo.to_string(),
            outcome,
        },
        json_mode,
    );
    Ok(())
}
