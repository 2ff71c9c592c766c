//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::ConnectionConfig;
use crate::engine::QueryContext;
use crate::error::Result;
use crate::filter::QualSet;
use crate::output::{JsonWriterSink, OutputFormat};
use crate::plugin::{Connection, Plugin};
use serde_json::{json, Value};
use std::io::{self, BufWriter};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
    plugin: Plugin,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            plugin: Plugin::new(),
        }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Tables => {
                self.tables();
                Ok(())
            }
            Commands::Columns { table } => self.columns(table),
            Commands::Query {
                table,
                quals,
                limit,
            } => self.query(table, quals, *limit).await,
            Commands::Check => self.check().await,
        }
    }

    /// Load the connection from `--config`, or defaults
    fn load_connection(&self) -> Result<Connection> {
        let config = match &self.cli.config {
            Some(path) => ConnectionConfig::load(path)?,
            None => ConnectionConfig::default(),
        };
        Ok(Connection::new(self.cli.connection.clone(), config))
    }

    /// List tables
    fn tables(&self) {
        for table in self.plugin.tables().iter() {
            self.output_message(&json!({
                "name": table.name(),
                "description": table.description(),
            }));
        }
    }

    /// Show a table's columns
    fn columns(&self, name: &str) -> Result<()> {
        let table = self.plugin.tables().get(name)?;
        for column in table.columns() {
            let mut message = serde_json::to_value(column)?;
            if let Value::Object(ref mut fields) = message {
                fields.insert(
                    "get_key".to_string(),
                    json!(table.get_keys().contains(&column.name)),
                );
                fields.insert(
                    "list_qual".to_string(),
                    json!(table.list_quals().contains(&column.name)),
                );
            }
            self.output_message(&message);
        }
        Ok(())
    }

    /// Stream rows from a table to stdout
    async fn query(&self, table: &str, quals: &[String], limit: Option<u64>) -> Result<()> {
        let connection = self.load_connection()?;
        let ctx = QueryContext {
            quals: QualSet::parse_all(quals)?,
            limit,
        };

        let mut sink = JsonWriterSink::new(BufWriter::new(io::stdout()), self.cli.format);
        let stats = self
            .plugin
            .execute(&connection, table, &ctx, &mut sink)
            .await?;
        sink.finish()?;

        info!(
            rows = stats.rows_emitted,
            used_get = stats.used_get,
            "query finished"
        );
        Ok(())
    }

    /// Check connection
    async fn check(&self) -> Result<()> {
        let connection = self.load_connection()?;

        match self.plugin.check(&connection).await {
            Ok(()) => {
                self.output_message(&json!({
                    "type": "CONNECTION_STATUS",
                    "connectionStatus": {
                        "status": "SUCCEEDED",
                        "message": "Connection successful"
                    }
                }));
                Ok(())
            }
            Err(e) => {
                self.output_message(&json!({
                    "type": "CONNECTION_STATUS",
                    "connectionStatus": {
                        "status": "FAILED",
                        "message": format!("Connection failed: {e}")
                    }
                }));
                Err(e)
            }
        }
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}
