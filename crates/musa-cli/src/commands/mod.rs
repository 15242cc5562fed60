use clap::{Parser, Subcommand};
use std::path::PathBuf;

use musa_config::ConfigLoader;

mod chat;
mod check;
mod clear;
mod summary;

/// ⌚ Musa — customer-service assistant for the 3QRab storefront
#[derive(Parser)]
#[command(name = "musa", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to musa.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat with the assistant in the terminal
    Chat,
    /// Show the conversation digest, patterns, and inferred preferences
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear the stored conversation history
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Verify configuration, credentials, and API reachability
    Check,
    /// Show current configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> musa_core::Result<()> {
        // Load config first so we can use it for the log format
        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let config = config_loader.get();

        // Resolve log level: --verbose > --quiet > --log-level > config
        let log_level = if self.verbose {
            "debug".to_string()
        } else if self.quiet {
            "error".to_string()
        } else {
            self.log_level
                .clone()
                .unwrap_or_else(|| config.logging.level.clone())
        };

        // Initialize tracing with the appropriate format
        if config.logging.format == "json" {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
                )
                .json()
                .with_target(true)
                .init();
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
                )
                .with_target(false)
                .init();
        }

        match self.command {
            Commands::Chat => chat::cmd_chat(config).await,
            Commands::Summary { json } => summary::cmd_summary(config, json),
            Commands::Clear { yes } => clear::cmd_clear(config, yes),
            Commands::Check => check::cmd_check(config).await,
            Commands::Config { json } => Self::cmd_config(config, json),
        }
    }

    fn cmd_config(config: musa_config::MusaConfig, json: bool) -> musa_core::Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(&config)
                    .map_err(|e| musa_core::MusaError::Config(e.to_string()))?
            );
        }
        Ok(())
    }
}
