//! Query engine surface
//!
//! The contract between the tables and whatever consumes their rows.
//!
//! # Overview
//!
//! The engine module provides:
//! - `RowSink` - Row-at-a-time consumer with a cooperative budget
//! - `CollectSink` / `LimitedSink` - In-memory and limit-enforcing sinks
//! - `RowEmitter` - Adapts a `RowSink` to the typed fetch loops
//! - `QueryContext` / `QueryStats` - Per-query inputs and results

mod types;

pub use types::{CollectSink, LimitedSink, QueryContext, QueryStats, RowEmitter, RowSink};

#[cfg(test)]
mod tests;
