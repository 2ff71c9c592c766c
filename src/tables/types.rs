//! Table trait and registry

use crate::api::ApiClient;
use crate::engine::{QueryContext, RowSink};
use crate::error::{Error, Result};
use crate::pagination::LoopControl;
use crate::types::Row;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Logical type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    String,
    Int,
    Bool,
    /// RFC 3339 string
    Timestamp,
    Json,
}

/// Column declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub description: &'static str,
}

impl Column {
    pub const fn new(name: &'static str, column_type: ColumnType, description: &'static str) -> Self {
        Self {
            name,
            column_type,
            description,
        }
    }
}

/// A queryable table
#[async_trait]
pub trait Table: Send + Sync {
    /// Table name
    fn name(&self) -> &'static str;

    /// One-line description
    fn description(&self) -> &'static str;

    /// Column declarations
    fn columns(&self) -> &'static [Column];

    /// Columns whose equality quals become list request parameters
    fn list_quals(&self) -> &'static [&'static str] {
        &[]
    }

    /// Columns that select the get-by-key path when all are pinned
    fn get_keys(&self) -> &'static [&'static str];

    /// Stream every matching row into `sink`
    async fn list(
        &self,
        client: &ApiClient,
        ctx: &QueryContext,
        sink: &mut dyn RowSink,
    ) -> Result<LoopControl>;

    /// Fetch the single row identified by the get keys
    async fn get(&self, client: &ApiClient, ctx: &QueryContext) -> Result<Row>;

    /// Whether `ctx` pins every get key with an equality qual
    fn is_get(&self, ctx: &QueryContext) -> bool {
        ctx.quals.has_equals_for(self.get_keys())
    }

    /// Look up a column declaration
    fn column(&self, name: &str) -> Option<&'static Column> {
        self.columns().iter().find(|c| c.name == name)
    }
}

/// Tables by name
#[derive(Clone, Default)]
pub struct TableRegistry {
    tables: BTreeMap<&'static str, Arc<dyn Table>>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every LaunchDarkly table
    pub fn launchdarkly() -> Self {
        Self::new()
            .with(super::AccessTokenTable)
            .with(super::AccountMemberTable)
            .with(super::AuditLogTable)
            .with(super::EnvironmentTable)
            .with(super::FeatureFlagTable)
            .with(super::ProjectTable)
            .with(super::TeamTable)
    }

    /// Register a table, replacing any table with the same name
    #[must_use]
    pub fn with(mut self, table: impl Table + 'static) -> Self {
        self.tables.insert(table.name(), Arc::new(table));
        self
    }

    /// Look up a table by name
    pub fn get(&self, name: &str) -> Result<Arc<dyn Table>> {
        self.tables
            .get(name)
            .cloned()
            .ok_or_else(|| Error::table_not_found(name))
    }

    /// Table names in sorted order
    pub fn names(&self) -> Vec<&'static str> {
        self.tables.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Table>> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl std::fmt::Debug for TableRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableRegistry")
            .field("tables", &self.names())
            .finish()
    }
}
