use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mailfeed")]
#[command(about = "Browse a sectioned, summarized mail feed from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to MAILFEED_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Feed server base URL, overriding the config file
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Tab to browse, overriding the config file
    #[arg(long, global = true)]
    pub tab: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Ignored when RUST_LOG is set
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the feed and print what a viewer of the given height would see
    Feed {
        #[arg(long, default_value = "900")]
        viewport_height: f64,

        /// Scroll to the bottom this many times after the initial load
        #[arg(long, default_value = "0")]
        scroll_steps: usize,

        /// Swipe these cards away after loading
        #[arg(long, value_name = "ID")]
        dismiss: Vec<String>,

        /// Open these cards in the mail client after loading
        #[arg(long, value_name = "ID")]
        open: Vec<String>,
    },

    /// List the server's tabs
    Tabs,

    /// List the sections of the selected tab
    Sections,

    /// Ask the server to summarize a message
    Summarize {
        #[arg(value_name = "ID")]
        id: String,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,

    /// Write the default configuration to the config path
    Init {
        #[arg(long)]
        force: bool,
    },
}
