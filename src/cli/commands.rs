//! CLI commands and argument parsing

use crate::output::OutputFormat;
use crate::plugin::DEFAULT_CONNECTION;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query LaunchDarkly resources as tables
#[derive(Parser, Debug)]
#[command(name = "solidafy-launchdarkly")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Connection configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Connection name
    #[arg(long, global = true, default_value = DEFAULT_CONNECTION)]
    pub connection: String,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available tables
    Tables,

    /// Show the columns of a table
    Columns {
        /// Table name
        table: String,
    },

    /// Query a table
    Query {
        /// Table name
        table: String,

        /// Qualifier such as `project_key=default` or `date>=2024-01-01T00:00:00Z`
        #[arg(short = 'w', long = "where")]
        quals: Vec<String>,

        /// Maximum rows to return
        #[arg(long)]
        limit: Option<u64>,
    },

    /// Test connection to the API
    Check,
}
