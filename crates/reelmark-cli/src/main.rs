use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use reelmark_cli::{
    cli::{Cli, Commands},
    commands,
    config::CliConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.clone(), cli.mpv_path.clone())?;

    // Flag beats config; default is no logging at all.
    let level: LevelFilter = if cli.verbose {
        LevelFilter::DEBUG
    } else if let Some(level) = cli.log_level {
        level.into()
    } else {
        config
            .log
            .level
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(LevelFilter::OFF)
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(format!(
            "reelmark_core={level},reelmark_player={level},reelmark_cli={level}"
        )))
        .init();

    match cli.command {
        Commands::List { document, json } => commands::list_links(&document, json).await,
        Commands::Add { document, videos } => {
            let mut config = config;
            commands::add_links(&document, videos, &mut config, cli.config).await
        }
        Commands::Open { document, index } => commands::open_link(&document, index, &config).await,
    }
}
