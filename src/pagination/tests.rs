//! Tests for pagination module

use super::*;
use crate::error::{Error, Result};
use std::future::ready;

fn param<'a>(request: &'a PageRequest, key: &str) -> Option<&'a str> {
    request
        .params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// In-memory offset-paginated source
struct FakeSource {
    items: Vec<u32>,
    report_total: bool,
    requests: Vec<PageRequest>,
}

impl FakeSource {
    fn new(count: u32) -> Self {
        Self {
            items: (0..count).collect(),
            report_total: true,
            requests: Vec::new(),
        }
    }

    fn fetch(&mut self, request: PageRequest) -> Result<Page<u32>> {
        let start = (request.offset as usize).min(self.items.len());
        let end = (start + request.limit as usize).min(self.items.len());
        let items = self.items[start..end].to_vec();
        self.requests.push(request);

        if self.report_total {
            Ok(Page::new(items, self.items.len() as u64))
        } else {
            Ok(Page {
                items,
                total_count: None,
            })
        }
    }
}

/// Sink with an optional budget
#[derive(Default)]
struct BudgetSink {
    items: Vec<u32>,
    budget: Option<u64>,
}

impl BudgetSink {
    fn with_budget(budget: u64) -> Self {
        Self {
            items: Vec::new(),
            budget: Some(budget),
        }
    }
}

impl ItemSink<u32> for BudgetSink {
    fn emit(&mut self, item: u32) -> Result<()> {
        self.items.push(item);
        Ok(())
    }

    fn remaining(&self) -> Option<u64> {
        self.budget
            .map(|b| b.saturating_sub(self.items.len() as u64))
    }
}

// ============================================================================
// PageRequest Tests
// ============================================================================

#[test]
fn test_page_request_default() {
    let request = PageRequest::new(None);
    assert_eq!(request.offset, 0);
    assert_eq!(request.limit, MAX_PAGE_LIMIT);
    assert!(request.params.is_empty());
}

#[test]
fn test_page_request_limit_clamped() {
    assert_eq!(PageRequest::new(Some(5)).limit, 5);
    assert_eq!(PageRequest::new(Some(20)).limit, 20);
    assert_eq!(PageRequest::new(Some(500)).limit, 20);
    assert_eq!(PageRequest::new(Some(0)).limit, 1);
}

#[test]
fn test_page_request_params() {
    let request = PageRequest::new(Some(10))
        .with_param("filter", "query:web")
        .with_param_opt("expand", None::<&str>)
        .with_param_opt("tag", Some("beta"));

    assert_eq!(param(&request, "filter"), Some("query:web"));
    assert_eq!(param(&request, "tag"), Some("beta"));
    assert_eq!(param(&request, "expand"), None);

    let config = request.to_request_config();
    assert_eq!(
        config.query,
        vec![
            ("limit".to_string(), "10".to_string()),
            ("offset".to_string(), "0".to_string()),
            ("filter".to_string(), "query:web".to_string()),
            ("tag".to_string(), "beta".to_string()),
        ]
    );
}

#[test]
fn test_page_deserialize() {
    let page: Page<serde_json::Value> =
        serde_json::from_str(r#"{"items": [{"key": "a"}], "totalCount": 7}"#).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total_count, Some(7));

    let page: Page<serde_json::Value> = serde_json::from_str(r#"{"items": []}"#).unwrap();
    assert!(page.total_count.is_none());

    let page: Page<serde_json::Value> = serde_json::from_str("{}").unwrap();
    assert!(page.items.is_empty());
}

#[test]
fn test_loop_control() {
    assert!(LoopControl::Stop.should_stop());
    assert!(!LoopControl::Continue.should_stop());
}

// ============================================================================
// Fetch Loop Tests
// ============================================================================

#[tokio::test]
async fn test_paginate_fetches_every_page() {
    let mut source = FakeSource::new(45);
    let mut sink = BudgetSink::default();

    let control = paginate(
        PageRequest::new(None),
        |req| ready(source.fetch(req)),
        &mut sink,
    )
    .await
    .unwrap();

    assert_eq!(control, LoopControl::Continue);
    assert_eq!(sink.items, (0..45).collect::<Vec<_>>());

    let offsets: Vec<u64> = source.requests.iter().map(|r| r.offset).collect();
    assert_eq!(offsets, vec![0, 20, 40]);
    assert!(source.requests.iter().all(|r| r.limit == 20));
}

#[tokio::test]
async fn test_paginate_exact_multiple_of_limit() {
    let mut source = FakeSource::new(40);
    let mut sink = BudgetSink::default();

    paginate(
        PageRequest::new(Some(10)),
        |req| ready(source.fetch(req)),
        &mut sink,
    )
    .await
    .unwrap();

    assert_eq!(sink.items.len(), 40);
    assert_eq!(source.requests.len(), 4);
}

#[tokio::test]
async fn test_paginate_budget_stops_fetching() {
    let mut source = FakeSource::new(100);
    let mut sink = BudgetSink::with_budget(25);

    let control = paginate(
        PageRequest::new(Some(25)),
        |req| ready(source.fetch(req)),
        &mut sink,
    )
    .await
    .unwrap();

    assert_eq!(control, LoopControl::Stop);
    assert_eq!(sink.items, (0..25).collect::<Vec<_>>());
    // 20 + 5 of the second page; no third request
    assert_eq!(source.requests.len(), 2);
}

#[tokio::test]
async fn test_paginate_budget_mid_page() {
    let mut source = FakeSource::new(100);
    let mut sink = BudgetSink::with_budget(3);

    let control = paginate(
        PageRequest::new(Some(3)),
        |req| ready(source.fetch(req)),
        &mut sink,
    )
    .await
    .unwrap();

    assert_eq!(control, LoopControl::Stop);
    assert_eq!(sink.items, vec![0, 1, 2]);
    assert_eq!(source.requests.len(), 1);
}

#[tokio::test]
async fn test_paginate_exhausted_sink_never_fetches() {
    let mut source = FakeSource::new(10);
    let mut sink = BudgetSink::with_budget(0);

    let control = paginate(
        PageRequest::new(None),
        |req| ready(source.fetch(req)),
        &mut sink,
    )
    .await
    .unwrap();

    assert_eq!(control, LoopControl::Stop);
    assert!(source.requests.is_empty());
}

#[tokio::test]
async fn test_paginate_empty_source() {
    let mut source = FakeSource::new(0);
    let mut sink = BudgetSink::default();

    let control = paginate(
        PageRequest::new(None),
        |req| ready(source.fetch(req)),
        &mut sink,
    )
    .await
    .unwrap();

    assert_eq!(control, LoopControl::Continue);
    assert!(sink.items.is_empty());
    assert_eq!(source.requests.len(), 1);
}

#[tokio::test]
async fn test_paginate_without_total_stops_after_one_page() {
    let mut source = FakeSource::new(50);
    source.report_total = false;
    let mut sink = BudgetSink::default();

    paginate(
        PageRequest::new(None),
        |req| ready(source.fetch(req)),
        &mut sink,
    )
    .await
    .unwrap();

    assert_eq!(sink.items.len(), 20);
    assert_eq!(source.requests.len(), 1);
}

#[tokio::test]
async fn test_paginate_empty_page_terminates_despite_total() {
    let mut sink = BudgetSink::default();
    let mut calls = 0;

    // Server claims 100 items but serves none past the first page
    paginate(
        PageRequest::new(None),
        |req: PageRequest| {
            calls += 1;
            let items = if req.offset == 0 { vec![1u32, 2, 3] } else { vec![] };
            ready(Ok(Page::new(items, 100)))
        },
        &mut sink,
    )
    .await
    .unwrap();

    assert_eq!(sink.items, vec![1, 2, 3]);
    assert_eq!(calls, 2);
}

#[tokio::test]
async fn test_paginate_total_grows_between_pages() {
    let mut sink = BudgetSink::default();
    let mut offsets = Vec::new();

    // Total reads 20 on the first page and 25 afterwards
    paginate(
        PageRequest::new(None),
        |req: PageRequest| {
            offsets.push(req.offset);
            let page = match req.offset {
                0 => Page::new((0..20u32).collect(), 20),
                _ => Page::new((20..25u32).collect(), 25),
            };
            ready(Ok(page))
        },
        &mut sink,
    )
    .await
    .unwrap();

    // The loop ends as soon as offset reaches the first reported total
    assert_eq!(offsets, vec![0]);
    assert_eq!(sink.items.len(), 20);
}

#[tokio::test]
async fn test_paginate_propagates_fetch_error() {
    let mut sink = BudgetSink::default();

    let err = paginate(
        PageRequest::new(None),
        |req: PageRequest| {
            let result = if req.offset == 0 {
                Ok(Page::new((0..20u32).collect(), 40))
            } else {
                Err(Error::http_status(500, "boom"))
            };
            ready(result)
        },
        &mut sink,
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(sink.items.len(), 20);
}

#[tokio::test]
async fn test_paginate_forwards_params() {
    let mut source = FakeSource::new(5);
    let mut sink = BudgetSink::default();

    paginate(
        PageRequest::new(None).with_param("filter", "query:web"),
        |req| ready(source.fetch(req)),
        &mut sink,
    )
    .await
    .unwrap();

    assert_eq!(param(&source.requests[0], "filter"), Some("query:web"));
}

// ============================================================================
// Pager Tests
// ============================================================================

#[tokio::test]
async fn test_pager_walks_pages() {
    let mut source = FakeSource::new(30);
    let mut pager = Pager::new(PageRequest::new(None), |req| ready(source.fetch(req)));

    let first = pager.next_page().await.unwrap().unwrap();
    assert_eq!(first.len(), 20);
    assert_eq!(pager.request().offset, 20);

    let second = pager.next_page().await.unwrap().unwrap();
    assert_eq!(second.len(), 10);

    assert!(pager.next_page().await.unwrap().is_none());
    assert_eq!(source.requests.len(), 2);
}
