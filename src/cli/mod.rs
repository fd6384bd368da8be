//! Command-line interface for card-labeler.

pub mod commands;
pub mod output;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::adapters::github::{GitHubClient, GitHubClientConfig};
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::SecretScrubber;

use commands::labels::LabelCommands;
use commands::resolve::ResolveArgs;
use commands::run::RunArgs;

#[derive(Parser, Debug)]
#[command(name = "card-labeler")]
#[command(about = "Label issues by the project column their card sits in")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// GitHub token
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub REST API base URL
    #[arg(long, global = true, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Configuration file (defaults to .github/card-labeler.config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply the label rules for a project_card event
    Run(RunArgs),

    /// Resolve a project card to its project number and issue number
    Resolve(ResolveArgs),

    /// Read, add or remove issue labels
    #[command(subcommand)]
    Labels(LabelCommands),
}

/// Load configuration and apply command-line overrides.
///
/// Token precedence: `--token`/`GITHUB_TOKEN`, then the Actions input
/// `INPUT_GITHUB_TOKEN`, then the configuration file and `CARD_LABELER_*`.
pub fn load_config(global: &GlobalArgs) -> Result<Config> {
    let mut config = match &global.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    let token = global
        .token
        .clone()
        .filter(|token| !token.is_empty())
        .or_else(|| {
            std::env::var("INPUT_GITHUB_TOKEN")
                .ok()
                .filter(|token| !token.is_empty())
        });
    if let Some(token) = token {
        config.github.token = token;
    }

    if let Some(api_url) = &global.api_url {
        config.github.api_url.clone_from(api_url);
        ConfigLoader::validate(&config)?;
    }

    Ok(config)
}

/// Build the GitHub client for commands that call the API.
pub fn github_client(config: &Config) -> Result<Arc<GitHubClient>> {
    ConfigLoader::require_token(config)?;
    let client = GitHubClient::with_config(GitHubClientConfig::from(config))
        .context("Failed to create GitHub client")?;
    Ok(Arc::new(client))
}

/// Print the error and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    let message = SecretScrubber::new().scrub_message(&format!("{err:#}"));
    if json_mode {
        let error = serde_json::json!({ "error": message });
        let body = serde_json::to_string_pretty(&error).unwrap_or_default();
        eprintln!("{body}");
    } else {
        eprintln!("Error: {message}");
    }
    std::process::exit(1);
}
