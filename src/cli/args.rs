//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

/// Render a network inventory (hosts, addresses, hardware) as an ASCII tree
#[derive(Parser, Debug)]
#[command(name = "nettree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level: -d info, -dd debug, -ddd trace
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Network name (overrides configuration)
    #[arg(short, long, global = true)]
    pub network: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the inventory tree
    Show,

    /// Render a single host
    Find {
        /// Host name (first match wins)
        host: String,
    },

    /// Clone the inventory, extend a host in the copy, show both
    Clone {
        /// Host to extend in the copy
        #[arg(long, default_value = crate::application::sample::SERVER2)]
        host: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Print config template
    Template,

    /// Show config path
    Path,
}
