//! HTTP client module
//!
//! Provides the transport used by the API bindings.
//!
//! # Features
//!
//! - **Classified Retries**: an `ErrorClassifier` decides which failures are
//!   reissued; everything else is returned to the caller untouched
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Backoff Strategies**: Constant, linear, and exponential backoff,
//!   with `Retry-After` honoured when the server sends it

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
