//! Tests for partition module

use super::*;
use crate::error::{Error, Result};
use crate::pagination::{ItemSink, LoopControl, Page, PageRequest};
use pretty_assertions::assert_eq;
use std::future::ready;

#[derive(Default)]
struct ScopedSink {
    items: Vec<Scoped<u32>>,
    budget: Option<u64>,
}

impl ItemSink<Scoped<u32>> for ScopedSink {
    fn emit(&mut self, item: Scoped<u32>) -> Result<()> {
        self.items.push(item);
        Ok(())
    }

    fn remaining(&self) -> Option<u64> {
        self.budget
            .map(|b| b.saturating_sub(self.items.len() as u64))
    }
}

/// Serve `keys` as an offset-paginated parent collection
fn parent_page(keys: &[&str], request: &PageRequest) -> Result<Page<String>> {
    let start = (request.offset as usize).min(keys.len());
    let end = (start + request.limit as usize).min(keys.len());
    let items = keys[start..end].iter().map(|k| k.to_string()).collect();
    Ok(Page::new(items, keys.len() as u64))
}

/// Serve `count` children per parent
fn child_page(count: u32, request: &PageRequest) -> Result<Page<u32>> {
    let start = (request.offset as u32).min(count);
    let end = (start + request.limit).min(count);
    Ok(Page::new((start..end).collect(), u64::from(count)))
}

#[test]
fn test_scoped_new() {
    let scoped = Scoped::new("default", 7);
    assert_eq!(scoped.parent_key, "default");
    assert_eq!(scoped.item, 7);
}

#[test]
fn test_tag_sink_forwards_budget() {
    let mut sink = ScopedSink {
        budget: Some(2),
        ..Default::default()
    };

    {
        let mut tagged = TagSink::new("proj", &mut sink);
        assert_eq!(ItemSink::<u32>::remaining(&tagged), Some(2));
        tagged.emit(1u32).unwrap();
        assert_eq!(ItemSink::<u32>::remaining(&tagged), Some(1));
    }

    assert_eq!(sink.items, vec![Scoped::new("proj", 1)]);
}

#[tokio::test]
async fn test_fan_out_tags_children() {
    let mut sink = ScopedSink::default();
    let mut child_calls = Vec::new();

    let control = fan_out(
        PageRequest::new(None),
        |req: PageRequest| ready(parent_page(&["p1", "p2"], &req)),
        PageRequest::new(None),
        |key: String, req: PageRequest| {
            child_calls.push((key.clone(), req.offset));
            ready(child_page(2, &req))
        },
        &mut sink,
    )
    .await
    .unwrap();

    assert_eq!(control, LoopControl::Continue);
    assert_eq!(
        sink.items,
        vec![
            Scoped::new("p1", 0),
            Scoped::new("p1", 1),
            Scoped::new("p2", 0),
            Scoped::new("p2", 1),
        ]
    );
    assert_eq!(
        child_calls,
        vec![("p1".to_string(), 0), ("p2".to_string(), 0)]
    );
}

#[tokio::test]
async fn test_fan_out_pages_both_levels() {
    let keys: Vec<String> = (0..25).map(|i| format!("p{i}")).collect();
    let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
    let mut sink = ScopedSink::default();
    let mut parent_offsets = Vec::new();

    fan_out(
        PageRequest::new(None),
        |req: PageRequest| {
            parent_offsets.push(req.offset);
            ready(parent_page(&key_refs, &req))
        },
        PageRequest::new(Some(3)),
        |_key: String, req: PageRequest| ready(child_page(5, &req)),
        &mut sink,
    )
    .await
    .unwrap();

    assert_eq!(parent_offsets, vec![0, 20]);
    assert_eq!(sink.items.len(), 25 * 5);
    assert_eq!(sink.items.last(), Some(&Scoped::new("p24", 4)));
}

#[tokio::test]
async fn test_fan_out_budget_stops_parent_loop() {
    let keys: Vec<String> = (0..40).map(|i| format!("p{i}")).collect();
    let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
    let mut sink = ScopedSink {
        budget: Some(3),
        ..Default::default()
    };
    let mut parent_calls = 0;
    let mut child_parents = Vec::new();

    let control = fan_out(
        PageRequest::new(None),
        |req: PageRequest| {
            parent_calls += 1;
            ready(parent_page(&key_refs, &req))
        },
        PageRequest::new(Some(3)),
        |key: String, req: PageRequest| {
            child_parents.push(key);
            ready(child_page(2, &req))
        },
        &mut sink,
    )
    .await
    .unwrap();

    assert_eq!(control, LoopControl::Stop);
    assert_eq!(
        sink.items,
        vec![
            Scoped::new("p0", 0),
            Scoped::new("p0", 1),
            Scoped::new("p1", 0),
        ]
    );
    assert_eq!(parent_calls, 1);
    assert_eq!(child_parents, vec!["p0".to_string(), "p1".to_string()]);
}

#[tokio::test]
async fn test_fan_out_no_parents() {
    let mut sink = ScopedSink::default();
    let mut child_calls = 0;

    let control = fan_out(
        PageRequest::new(None),
        |req: PageRequest| ready(parent_page(&[], &req)),
        PageRequest::new(None),
        |_key: String, req: PageRequest| {
            child_calls += 1;
            ready(child_page(2, &req))
        },
        &mut sink,
    )
    .await
    .unwrap();

    assert_eq!(control, LoopControl::Continue);
    assert!(sink.items.is_empty());
    assert_eq!(child_calls, 0);
}

#[tokio::test]
async fn test_fan_out_child_error_propagates() {
    let mut sink = ScopedSink::default();

    let err = fan_out(
        PageRequest::new(None),
        |req: PageRequest| ready(parent_page(&["p1", "p2"], &req)),
        PageRequest::new(None),
        |key: String, req: PageRequest| {
            if key == "p2" {
                ready(Err(Error::http_status(403, "forbidden")))
            } else {
                ready(child_page(1, &req))
            }
        },
        &mut sink,
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(sink.items, vec![Scoped::new("p1", 0)]);
}
