//! Row construction helpers

use crate::engine::QueryContext;
use crate::error::{Error, Result};
use crate::types::{JsonValue, Row};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Render unix milliseconds as an RFC 3339 timestamp
pub fn ms_to_rfc3339(ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Builds a row column by column; absent values become `null`
#[derive(Debug, Default)]
pub struct RowBuilder {
    row: Row,
}

impl RowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column from any serializable value
    #[must_use]
    pub fn value<T: Serialize>(mut self, column: &str, value: Option<T>) -> Self {
        let value = value
            .and_then(|v| serde_json::to_value(v).ok())
            .unwrap_or(JsonValue::Null);
        self.row.insert(column.to_string(), value);
        self
    }

    /// Set a string column
    #[must_use]
    pub fn string(self, column: &str, value: Option<&str>) -> Self {
        self.value(column, value)
    }

    /// Set a timestamp column from unix milliseconds
    #[must_use]
    pub fn timestamp(self, column: &str, ms: Option<i64>) -> Self {
        self.value(column, ms.and_then(ms_to_rfc3339))
    }

    /// Set a JSON column
    #[must_use]
    pub fn json(self, column: &str, value: Option<JsonValue>) -> Self {
        self.value(column, value)
    }

    pub fn build(self) -> Row {
        self.row
    }
}

/// String value of a required equality qual
pub(crate) fn required_qual(ctx: &QueryContext, column: &str) -> Result<String> {
    ctx.quals
        .equals_string(column)
        .ok_or_else(|| Error::invalid_qual(format!("an equality qual on '{column}' is required")))
}
