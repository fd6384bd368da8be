//! Implementation of the `card-labeler labels` commands.

use anyhow::{bail, Result};
use clap::Subcommand;
use serde::Serialize;

use crate::cli::github_client;
use crate::cli::output::{label_list, output, CommandOutput};
use crate::domain::models::{Config, RepoContext};
use crate::services::IssueResolver;

#[derive(Subcommand, Debug)]
pub enum LabelCommands {
    /// List the labels of an issue
    Get {
        /// Issue number
        #[arg(long)]
        issue: u64,

        /// Repository as owner/repo
        #[arg(long, env = "GITHUB_REPOSITORY")]
        repo: RepoContext,
    },

    /// Add labels to an issue in one request
    Add {
        /// Issue number
        #[arg(long)]
        issue: u64,

        /// Repository as owner/repo
        #[arg(long, env = "GITHUB_REPOSITORY")]
        repo: RepoContext,

        /// Labels to add
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Remove labels from an issue, one request per label
    Remove {
        /// Issue number
        #[arg(long)]
        issue: u64,

        /// Repository as owner/repo
        #[arg(long, env = "GITHUB_REPOSITORY")]
        repo: RepoContext,

        /// Labels to remove
        #[arg(required = true)]
        labels: Vec<String>,
    },
}

#[derive(Debug, Serialize)]
pub struct LabelsOutput {
    pub issue_number: u64,
    pub labels: Vec<String>,
}

impl CommandOutput for LabelsOutput {
    fn to_human(&self) -> String {
        format!("#{}: {}", self.issue_number, label_list(&self.labels))
    }
}

#[derive(Debug, Serialize)]
pub struct LabelChangeOutput {
    pub issue_number: u64,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub failed: Vec<String>,
}

impl CommandOutput for LabelChangeOutput {
    fn to_human(&self) -> String {
        let issue = self.issue_number;
        let mut lines = Vec::new();
        if !self.added.is_empty() {
            let added = label_list(&self.added);
            lines.push(format!("Added to #{issue}: {added}"));
        }
        if !self.removed.is_empty() {
            let removed = label_list(&self.removed);
            lines.push(format!("Removed from #{issue}: {removed}"));
        }
        if !self.failed.is_empty() {
            lines.push(format!("Failed: {}", label_list(&self.failed)));
        }
        lines.join("\n")
    }
}

pub async fn execute(command: LabelCommands, config: &Config, json_mode: bool) -> Result<()> {
    let resolver = IssueResolver::new(github_client(config)?);

    match command {
        LabelCommands::Get { issue, repo } => {
            let labels = resolver.get_labels(issue, &repo).await?;
            output(
                &LabelsOutput {
                    issue_number: issue,
                    labels,
                },
                json_mode,
            );
        }
        LabelCommands::Add {
            issue,
            repo,
            labels,
        } => {
            resolver.add_labels(issue, &labels, &repo).await?;
            output(
                &LabelChangeOutput {
                    issue_number: issue,
                    added: labels,
                    removed: vec![],
                    failed: vec![],
                },
                json_mode,
            );
        }
        LabelCommands::Remove {
            issue,
            repo,
            labels,
        } => {
            let report = resolver.remove_labels(issue, &labels, &repo).await;
            let failed = report.failed_names();
            output(
                &LabelChangeOutput {
                    issue_number: issue,
                    added: vec![],
                    removed: report.removed,
                    failed: failed.clone(),
                },
                json_mode,
            );
            if !failed.is_empty() {
                let count = failed.len();
                bail!("Failed to remove {count} label(s): {}", failed.join(", "));
            }
        }
    }

    Ok(())
}
