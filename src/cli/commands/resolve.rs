//! Implementation of the `card-labeler resolve` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::github_client;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{CardEvent, Config, Resolution};
use crate::services::IssueResolver;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Project card id
    #[arg(long)]
    pub card_id: u64,
}

#[derive(Debug, Serialize)]
pub struct ResolveOutput {
    pub card_id: u64,
    pub resolution: Resolution,
}

impl CommandOutput for ResolveOutput {
    fn to_human(&self) -> String {
        match &self.resolution {
            Resolution::Resolved(info) => format!(
                "Card {} -> project {} issue #{}",
                self.card_id, info.project_id, info.issue_number
            ),
            unresolved => format!(
                "Card {}: {}",
                self.card_id,
                unresolved.describe_absence().unwrap_or_default()
            ),
        }
    }
}

pub async fn execute(args: ResolveArgs, config: &Config, json_mode: bool) -> Result<()> {
    let resolver = IssueResolver::new(github_client(config)?);
    let resolution = resolver
        .get_related_info(&CardEvent::for_card(args.card_id))
        .await?;

    output(
        &ResolveOutput {
            card_id: args.card_id,
            resolution,
        },
        json_mode,
    );
    Ok(())
}
