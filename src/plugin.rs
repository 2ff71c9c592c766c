//! Plugin entry point
//!
//! A `Plugin` owns everything that lives longer than one query: the table
//! registry, the error policy and the per-connection client cache. Queries
//! name a connection and a table; the plugin resolves the client, picks the
//! get or list path and streams rows into the caller's sink.

use crate::api::{ApiClient, ClientCache};
use crate::auth::{process_env, EnvLookup};
use crate::classify::ErrorPolicy;
use crate::config::ConnectionConfig;
use crate::engine::{LimitedSink, QueryContext, QueryStats, RowSink};
use crate::error::Result;
use crate::pagination::PageRequest;
use crate::tables::TableRegistry;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Default connection name
pub const DEFAULT_CONNECTION: &str = "launchdarkly";

/// A named connection configuration
#[derive(Debug, Clone)]
pub struct Connection {
    /// Cache key for the connection's client
    pub name: String,
    pub config: ConnectionConfig,
}

impl Connection {
    pub fn new(name: impl Into<String>, config: ConnectionConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

/// Query dispatcher for the LaunchDarkly tables
pub struct Plugin {
    tables: TableRegistry,
    clients: ClientCache<ApiClient>,
    policy: Arc<ErrorPolicy>,
    env: EnvLookup,
}

impl Default for Plugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin {
    /// Plugin with every table, the LaunchDarkly error policy and the
    /// process environment
    pub fn new() -> Self {
        Self {
            tables: TableRegistry::launchdarkly(),
            clients: ClientCache::new(),
            policy: Arc::new(ErrorPolicy::launchdarkly()),
            env: process_env,
        }
    }

    /// Replace the error policy
    #[must_use]
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    /// Replace the environment lookup used for credential fallback
    #[must_use]
    pub fn with_env(mut self, env: EnvLookup) -> Self {
        self.env = env;
        self
    }

    pub fn tables(&self) -> &TableRegistry {
        &self.tables
    }

    pub fn policy(&self) -> &ErrorPolicy {
        &self.policy
    }

    /// The connection's client, constructed on first use
    pub fn client(&self, connection: &Connection) -> Result<Arc<ApiClient>> {
        self.clients.get_or_try_init(&connection.name, || {
            ApiClient::connect(&connection.config, self.policy.clone(), self.env)
        })
    }

    /// Run one query against `table`, streaming rows into `sink`.
    ///
    /// When every get key of the table is pinned by an equality qual a
    /// single get is issued and a not-found response yields no row.
    /// Otherwise the table's list path runs until the source is drained
    /// or the budget is spent.
    pub async fn execute(
        &self,
        connection: &Connection,
        table: &str,
        ctx: &QueryContext,
        sink: &mut dyn RowSink,
    ) -> Result<QueryStats> {
        let start = Instant::now();
        let table = self.tables.get(table)?;
        let name = table.name();

        let client = self.client(connection).inspect_err(|e| {
            error!(table = name, connection = %connection.name, error = %e, "connection_error");
        })?;

        let mut limited = LimitedSink::new(sink, ctx.limit);
        let mut stats = QueryStats::default();

        if table.is_get(ctx) {
            stats.used_get = true;
            debug!(table = name, "using get path");

            let row = self
                .policy
                .resolve(table.get(&client, ctx).await)
                .inspect_err(|e| {
                    error!(table = name, operation = "get", error = %e, "api_error");
                })?;

            if let Some(row) = row {
                if !limited.is_exhausted() {
                    limited.emit(row)?;
                }
            }
        } else {
            let control = table
                .list(&client, ctx, &mut limited)
                .await
                .inspect_err(|e| {
                    error!(table = name, operation = "list", error = %e, "api_error");
                })?;
            stats.stopped_early = control.should_stop();
        }

        stats.rows_emitted = limited.emitted();
        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            table = name,
            rows = stats.rows_emitted,
            stopped_early = stats.stopped_early,
            duration_ms = stats.duration_ms,
            "query complete"
        );

        Ok(stats)
    }

    /// Verify the connection's credentials with a one-item project request
    pub async fn check(&self, connection: &Connection) -> Result<()> {
        let client = self.client(connection)?;
        client
            .list_projects(PageRequest::new(Some(1)))
            .await
            .inspect_err(|e| {
                error!(connection = %connection.name, error = %e, "connection check failed");
            })?;

        info!(connection = %connection.name, "connection check succeeded");
        Ok(())
    }
}

impl std::fmt::Debug for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugin")
            .field("tables", &self.tables)
            .field("clients", &self.clients)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
