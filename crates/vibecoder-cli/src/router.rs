// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use vibecoder_config::{ConfigManager, LogLevel, VibeConfig};

use crate::{
    commands::*,
    error::{CliError, CliResult},
    logging::init_logging,
};

/// VibeCoder - switches color themes by time of day and active language
#[derive(Parser, Debug)]
#[command(name = "vibecoder")]
#[command(bin_name = "vibecoder")]
#[command(about = "Switches color themes by time of day and active language")]
#[command(
    long_about = "VibeCoder: picks the editor color theme for you.\n\nThe active file's language wins when a theme is mapped to it; otherwise the\ntheme follows the time of day (morning, afternoon, night).\n\nQuick Start:\n  • vibecoder resolve --language rust   Show which theme would be picked\n  • vibecoder themes                    List registered themes\n  • vibecoder watch                     Run the switcher and read editor events"
)]
#[command(version)]
#[command(author = "VibeCoder Contributors")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (default: platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Diagnostic output level (off, info, debug)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve the theme for a context once
    #[command(about = "Show which theme would be active for a language and hour")]
    Resolve {
        /// Language identifier of the active file
        #[arg(short, long)]
        language: Option<String>,

        /// Hour of day, 0-23 (default: now)
        #[arg(long)]
        hour: Option<u32>,
    },

    /// List registered themes
    #[command(about = "List registered themes and what selects them")]
    Themes,

    /// Run the theme switcher
    #[command(about = "Run the switcher, reading editor events from stdin")]
    Watch {
        /// JSON settings file receiving the color theme
        #[arg(short, long, value_name = "PATH")]
        settings: Option<PathBuf>,

        /// Pin the clock to this hour instead of local time
        #[arg(long)]
        hour: Option<u32>,
    },

    /// Show the effective configuration
    #[command(about = "Show the effective configuration")]
    Config {
        /// Write a default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
}

impl Commands {
    /// Whether the command may run before its config file exists
    pub fn creates_config(&self) -> bool {
        matches!(self, Commands::Config { init: true })
    }
}

/// Route commands to their handlers
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and execute command
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();
        Self::execute(cli).await
    }

    /// Load configuration, install logging and run the selected command
    pub async fn execute(cli: Cli) -> CliResult<()> {
        let manager = match &cli.config {
            Some(path) => {
                ConfigManager::with_path(path.clone()).required(!cli.command.creates_config())
            }
            None => ConfigManager::new(),
        };
        let mut config = manager.load()?;
        let log_override = cli.log_level.as_deref().map(parse_log_level).transpose()?;
        if let Some(level) = log_override {
            config.log_level = level;
        }
        init_logging(config.log_level);
        debug!("Loaded configuration from {}", manager.config_path().display());

        Self::dispatch(cli.command, manager, config, log_override).await
    }

    async fn dispatch(
        command: Commands,
        manager: ConfigManager,
        config: VibeConfig,
        log_override: Option<LogLevel>,
    ) -> CliResult<()> {
        match command {
            Commands::Resolve { language, hour } => {
                ResolveCommand::new(config, language, hour).execute().await
            }
            Commands::Themes => ThemesCommand::new(config).execute().await,
            Commands::Watch { settings, hour } => {
                WatchCommand::new(manager, config, settings, hour)
                    .with_log_override(log_override)
                    .execute()
                    .await
            }
            Commands::Config { init } => ConfigCommand::new(manager, config, init).execute().await,
        }
    }
}

fn parse_log_level(level: &str) -> CliResult<LogLevel> {
    level.parse().map_err(|_| CliError::InvalidArgument {
        message: format!("unknown log level '{}' (expected off, info or debug)", level),
    })
}
