//! card-labeler CLI entry point.

use anyhow::Result;
use clap::Parser;

use card_labeler::cli::{self, Cli};
use card_labeler::infrastructure::logging::{LogConfig, LoggerImpl};

async fn run(cli: Cli) -> Result<()> {
    let config = cli::load_config(&cli.global)?;
    let _logger = LoggerImpl::init(&LogConfig::try_from(&config.logging)?)?;

    cli::commands::execute(cli.command, &config, cli.global.json).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    if let Err(err) = run(cli).await {
        cli::handle_error(err, json_mode);
    }
}
