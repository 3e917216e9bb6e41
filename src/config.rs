//! Command line configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// RU Donuts order counter
#[derive(Debug, Parser)]
#[command(name = "rudonuts", about = "RU Donuts order counter", long_about = None)]
pub struct Config {
    /// Flavor catalog (YAML); the built-in menu is used when omitted
    #[arg(short, long, env = "RUDONUTS_MENU", global = true)]
    pub menu: Option<PathBuf>,

    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the menu with prices
    Menu,

    /// Take orders interactively, one command per line
    Shell(ShellArgs),
}

#[derive(Debug, Args)]
pub struct ShellArgs {
    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
