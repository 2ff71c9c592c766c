//! Translation of range qualifiers into request parameters

use super::types::{Operator, QualSet};
use crate::error::{Error, Result};
use crate::types::JsonValue;
use chrono::DateTime;
use tracing::debug;

/// Millisecond window sent as `after`/`before` request parameters.
///
/// The upstream bounds are exclusive, so `>`/`>=` become a lower bound one
/// millisecond after the value and `<`/`<=` an upper bound one millisecond
/// before it. `=` pins both bounds to the value itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    /// Lower bound in unix milliseconds
    pub after: Option<i64>,
    /// Upper bound in unix milliseconds
    pub before: Option<i64>,
}

impl TimeRange {
    /// Build the window from every qualifier on `column`.
    ///
    /// When several quals bound the same side, the tightest one wins.
    /// `!=` cannot be expressed upstream and is left to the caller.
    pub fn from_quals(quals: &QualSet, column: &str) -> Result<Self> {
        let mut range = Self::default();

        for qual in quals.for_column(column) {
            let value = timestamp_millis(&qual.value)?;
            match qual.operator {
                Operator::Gt | Operator::GtEq => range.raise_after(value.saturating_add(1)),
                Operator::Lt | Operator::LtEq => range.lower_before(value.saturating_sub(1)),
                Operator::Eq => {
                    range.raise_after(value);
                    range.lower_before(value);
                }
                Operator::NotEq => {
                    debug!(column, "range filter does not support '!=', skipping");
                }
            }
        }

        Ok(range)
    }

    /// Whether neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.after.is_none() && self.before.is_none()
    }

    /// Request parameters for the set bounds
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(after) = self.after {
            params.push(("after".to_string(), after.to_string()));
        }
        if let Some(before) = self.before {
            params.push(("before".to_string(), before.to_string()));
        }
        params
    }

    fn raise_after(&mut self, value: i64) {
        self.after = Some(self.after.map_or(value, |a| a.max(value)));
    }

    fn lower_before(&mut self, value: i64) {
        self.before = Some(self.before.map_or(value, |b| b.min(value)));
    }
}

/// Interpret a qualifier value as unix milliseconds.
///
/// Accepts integers (already milliseconds), numeric strings and RFC 3339
/// timestamps.
pub fn timestamp_millis(value: &JsonValue) -> Result<i64> {
    match value {
        JsonValue::Number(n) => n
            .as_i64()
            .ok_or_else(|| Error::invalid_qual(format!("timestamp out of range: {n}"))),
        JsonValue::String(s) => {
            if let Ok(ms) = s.trim().parse::<i64>() {
                return Ok(ms);
            }
            DateTime::parse_from_rfc3339(s.trim())
                .map(|dt| dt.timestamp_millis())
                .map_err(|e| Error::invalid_qual(format!("invalid timestamp '{s}': {e}")))
        }
        other => Err(Error::invalid_qual(format!("invalid timestamp: {other}"))),
    }
}
