// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Solidafy LaunchDarkly
//!
//! LaunchDarkly's REST API exposed as queryable tables: projects,
//! environments, feature flags, access tokens, audit log entries, account
//! members and teams.
//!
//! ## Features
//!
//! - **Offset Pagination**: Streams every page until the reported total is reached
//! - **Parent-Child Fan-out**: Environments and flags are listed per project
//! - **Row Budgets**: A query limit stops every loop level without extra requests
//! - **Classified Errors**: 404 on a get is no row, 429 is retried, the rest propagates
//! - **Filter Pushdown**: Equality and date-range quals become request parameters
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solidafy_launchdarkly::{CollectSink, Connection, ConnectionConfig, Plugin, QueryContext};
//!
//! #[tokio::main]
//! async fn main() -> solidafy_launchdarkly::Result<()> {
//!     let plugin = Plugin::new();
//!     let connection = Connection::new("default", ConnectionConfig::with_token("api-..."));
//!
//!     let ctx = QueryContext::new().with_limit(10);
//!     let mut sink = CollectSink::new();
//!     plugin.execute(&connection, "launchdarkly_feature_flag", &ctx, &mut sink).await?;
//!
//!     for row in sink.rows() {
//!         println!("{}", row["key"]);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           Plugin                                │
//! │  execute(connection, table, quals, limit) → RowSink   check()   │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │  Tables  │    API    │   Paginate    │ Partition │   Classify  │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ Columns  │ Models    │ Offset/Total  │ Projects →│ Ignore 404  │
//! │ Get/List │ Client    │ Row budget    │  children │ Retry 429   │
//! │ Quals    │ Cache     │               │           │ Propagate   │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Connection configuration
pub mod config;

/// Credential resolution and request authentication
pub mod auth;

/// Error classification
pub mod classify;

/// HTTP client with retry and rate limiting
pub mod http;

/// Offset pagination
pub mod pagination;

/// Parent-child fan-out
pub mod partition;

/// Qualifiers and their request parameter mapping
pub mod filter;

/// LaunchDarkly REST API bindings
pub mod api;

/// Row sinks and query context
pub mod engine;

/// Table definitions
pub mod tables;

/// Query dispatch
pub mod plugin;

/// Row output
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::ConnectionConfig;
pub use engine::{CollectSink, QueryContext, QueryStats, RowSink};
pub use filter::{Operator, Qual, QualSet};
pub use plugin::{Connection, Plugin};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
