//! Engine types

use crate::error::Result;
use crate::filter::{Qual, QualSet};
use crate::pagination::{ItemSink, PageRequest};
use crate::types::Row;

// ============================================================================
// Row Sinks
// ============================================================================

/// Consumer of table rows
pub trait RowSink: Send {
    /// Accept one row
    fn emit(&mut self, row: Row) -> Result<()>;

    /// Rows still wanted; `None` means unbounded
    fn remaining(&self) -> Option<u64>;

    /// Whether the budget is used up
    fn is_exhausted(&self) -> bool {
        self.remaining() == Some(0)
    }
}

/// Collects rows in memory
#[derive(Debug, Clone, Default)]
pub struct CollectSink {
    rows: Vec<Row>,
    budget: Option<u64>,
}

impl CollectSink {
    /// Create an unbounded sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that wants at most `budget` rows
    pub fn with_budget(budget: u64) -> Self {
        Self {
            rows: Vec::new(),
            budget: Some(budget),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl RowSink for CollectSink {
    fn emit(&mut self, row: Row) -> Result<()> {
        self.rows.push(row);
        Ok(())
    }

    fn remaining(&self) -> Option<u64> {
        self.budget
            .map(|b| b.saturating_sub(self.rows.len() as u64))
    }
}

/// Applies a query limit on top of another sink.
///
/// The effective budget is the smaller of the limit and the inner sink's
/// own budget.
pub struct LimitedSink<'a> {
    inner: &'a mut dyn RowSink,
    limit: Option<u64>,
    emitted: u64,
}

impl<'a> LimitedSink<'a> {
    pub fn new(inner: &'a mut dyn RowSink, limit: Option<u64>) -> Self {
        Self {
            inner,
            limit,
            emitted: 0,
        }
    }

    /// Rows passed through so far
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

impl RowSink for LimitedSink<'_> {
    fn emit(&mut self, row: Row) -> Result<()> {
        self.inner.emit(row)?;
        self.emitted += 1;
        Ok(())
    }

    fn remaining(&self) -> Option<u64> {
        let own = self.limit.map(|l| l.saturating_sub(self.emitted));
        match (own, self.inner.remaining()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

/// Converts typed items into rows for a [`RowSink`]
pub struct RowEmitter<'a, F> {
    sink: &'a mut dyn RowSink,
    to_row: F,
}

impl<'a, F> RowEmitter<'a, F> {
    pub fn new(sink: &'a mut dyn RowSink, to_row: F) -> Self {
        Self { sink, to_row }
    }
}

impl<T, F> ItemSink<T> for RowEmitter<'_, F>
where
    F: FnMut(T) -> Row,
{
    fn emit(&mut self, item: T) -> Result<()> {
        let row = (self.to_row)(item);
        self.sink.emit(row)
    }

    fn remaining(&self) -> Option<u64> {
        self.sink.remaining()
    }
}

// ============================================================================
// Query Context
// ============================================================================

/// Inputs of one table query
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    /// Predicates supplied by the caller
    pub quals: QualSet,
    /// Maximum rows wanted
    pub limit: Option<u64>,
}

impl QueryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a qualifier
    #[must_use]
    pub fn with_qual(mut self, qual: Qual) -> Self {
        self.quals.push(qual);
        self
    }

    /// Replace the qualifier set
    #[must_use]
    pub fn with_quals(mut self, quals: QualSet) -> Self {
        self.quals = quals;
        self
    }

    /// Set the row limit
    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// First page request, sized by the row limit
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.limit)
    }
}

/// Statistics from one query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Rows handed to the sink
    pub rows_emitted: u64,
    /// Whether the budget ended the query before the source was drained
    pub stopped_early: bool,
    /// Whether the get-by-key path served the query
    pub used_get: bool,
    /// Duration in milliseconds
    pub duration_ms: u64,
}
