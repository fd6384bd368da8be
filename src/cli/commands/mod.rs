//! CLI command implementations.

pub mod labels;
pub mod resolve;
pub mod run;

use anyhow::Result;

use crate::domain::models::Config;

use super::Commands;

pub async fn execute(command: Commands, config: &Config, json_mode: bool) -> Result<()> {
    match command {
        Commands::Run(args) => run::execute(args, config, json_mode).await,
        Commands::Resolve(args) => resolve::execute(args, config, json_mode).await,
        Commands::Labels(command) => labels::execute(command, config, json_mode).await,
    }
}
