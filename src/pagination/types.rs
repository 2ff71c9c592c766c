//! Pagination types and traits

use crate::error::Result;
use crate::http::RequestConfig;
use serde::Deserialize;

/// Largest page the upstream API serves
pub const MAX_PAGE_LIMIT: u32 = 20;

/// Cursor state for one fetch loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Items to skip; only ever increases within a loop
    pub offset: u64,
    /// Page size, never above [`MAX_PAGE_LIMIT`]
    pub limit: u32,
    /// Filter parameters sent with every page
    pub params: Vec<(String, String)>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: MAX_PAGE_LIMIT,
            params: Vec::new(),
        }
    }
}

impl PageRequest {
    /// Create a request for the first page.
    ///
    /// The requested size is clamped to `1..=MAX_PAGE_LIMIT`; `None` asks for
    /// the largest page.
    pub fn new(requested_limit: Option<u64>) -> Self {
        Self {
            limit: clamp_limit(requested_limit),
            ..Default::default()
        }
    }

    /// Add a filter parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Add a filter parameter when a value is present
    #[must_use]
    pub fn with_param_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.with_param(key, v),
            None => self,
        }
    }

    /// Render as HTTP query parameters
    pub fn to_request_config(&self) -> RequestConfig {
        let mut config = RequestConfig::new()
            .query("limit", self.limit)
            .query("offset", self.offset);
        for (key, value) in &self.params {
            config = config.query(key.as_str(), value);
        }
        config
    }
}

/// Clamp a caller-requested page size to what the server allows
fn clamp_limit(requested: Option<u64>) -> u32 {
    match requested {
        Some(n) if n < u64::from(MAX_PAGE_LIMIT) => (n as u32).max(1),
        _ => MAX_PAGE_LIMIT,
    }
}

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    /// Items in server order
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Running total reported by the server, if any
    #[serde(rename = "totalCount", default)]
    pub total_count: Option<u64>,
}

impl<T> Page<T> {
    /// Create a page with a total count
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        Self {
            items,
            total_count: Some(total_count),
        }
    }
}

/// Whether enclosing loops may keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Source drained; the caller may continue
    Continue,
    /// Budget exhausted; every enclosing loop must stop
    Stop,
}

impl LoopControl {
    /// Check if we should stop
    pub fn should_stop(&self) -> bool {
        matches!(self, Self::Stop)
    }
}

/// Consumer of fetched items with a cooperative row budget
pub trait ItemSink<T> {
    /// Accept one item
    fn emit(&mut self, item: T) -> Result<()>;

    /// Items still wanted; `None` means unbounded
    fn remaining(&self) -> Option<u64>;

    /// Whether the budget is used up
    fn is_exhausted(&self) -> bool {
        self.remaining() == Some(0)
    }
}
