//! CLI module
//!
//! Command-line interface for querying the tables.
//!
//! # Commands
//!
//! - `tables` - List available tables
//! - `columns` - Show a table's columns
//! - `query` - Stream rows from a table
//! - `check` - Test connection to the API

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
