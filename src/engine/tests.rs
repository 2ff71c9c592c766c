//! Tests for engine module

use super::*;
use crate::filter::Qual;
use crate::pagination::{ItemSink, MAX_PAGE_LIMIT};
use crate::types::Row;
use serde_json::json;

fn row(key: &str) -> Row {
    let mut row = Row::new();
    row.insert("key".to_string(), json!(key));
    row
}

// ============================================================================
// Sink Tests
// ============================================================================

#[test]
fn test_collect_sink_unbounded() {
    let mut sink = CollectSink::new();
    assert_eq!(sink.remaining(), None);
    assert!(!sink.is_exhausted());

    sink.emit(row("a")).unwrap();
    sink.emit(row("b")).unwrap();
    assert_eq!(sink.rows().len(), 2);
    assert_eq!(sink.remaining(), None);
}

#[test]
fn test_collect_sink_budget() {
    let mut sink = CollectSink::with_budget(2);
    assert_eq!(sink.remaining(), Some(2));

    sink.emit(row("a")).unwrap();
    assert_eq!(sink.remaining(), Some(1));
    sink.emit(row("b")).unwrap();
    assert!(sink.is_exhausted());

    let rows = sink.into_rows();
    assert_eq!(rows[1]["key"], "b");
}

#[test]
fn test_limited_sink_uses_smaller_budget() {
    let mut inner = CollectSink::with_budget(5);
    let mut limited = LimitedSink::new(&mut inner, Some(2));
    assert_eq!(limited.remaining(), Some(2));

    limited.emit(row("a")).unwrap();
    limited.emit(row("b")).unwrap();
    assert!(limited.is_exhausted());
    assert_eq!(limited.emitted(), 2);
    assert_eq!(inner.rows().len(), 2);
}

#[test]
fn test_limited_sink_defers_to_inner() {
    let mut inner = CollectSink::with_budget(1);
    let mut limited = LimitedSink::new(&mut inner, Some(10));
    assert_eq!(limited.remaining(), Some(1));

    limited.emit(row("a")).unwrap();
    assert!(limited.is_exhausted());
}

#[test]
fn test_limited_sink_without_limits() {
    let mut inner = CollectSink::new();
    let limited = LimitedSink::new(&mut inner, None);
    assert_eq!(limited.remaining(), None);
}

#[test]
fn test_row_emitter_converts_items() {
    let mut sink = CollectSink::with_budget(3);
    {
        let mut emitter = RowEmitter::new(&mut sink, |key: &str| row(key));
        assert_eq!(ItemSink::<&str>::remaining(&emitter), Some(3));
        emitter.emit("first").unwrap();
        emitter.emit("second").unwrap();
        assert_eq!(ItemSink::<&str>::remaining(&emitter), Some(1));
    }

    assert_eq!(sink.rows()[0]["key"], "first");
    assert_eq!(sink.rows()[1]["key"], "second");
}

// ============================================================================
// QueryContext Tests
// ============================================================================

#[test]
fn test_query_context_builder() {
    let ctx = QueryContext::new()
        .with_qual(Qual::eq("key", "web"))
        .with_limit(7);

    assert_eq!(ctx.limit, Some(7));
    assert_eq!(ctx.quals.equals_string("key").as_deref(), Some("web"));
    assert_eq!(ctx.page_request().limit, 7);
}

#[test]
fn test_query_context_page_request_clamped() {
    assert_eq!(QueryContext::new().page_request().limit, MAX_PAGE_LIMIT);
    assert_eq!(
        QueryContext::new().with_limit(1000).page_request().limit,
        MAX_PAGE_LIMIT
    );
}

#[test]
fn test_query_stats_default() {
    let stats = QueryStats::default();
    assert_eq!(stats.rows_emitted, 0);
    assert!(!stats.stopped_early);
    assert!(!stats.used_get);
}
