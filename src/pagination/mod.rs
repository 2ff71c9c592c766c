//! Pagination module
//!
//! The offset/limit fetch loop shared by every list operation.
//!
//! # Overview
//!
//! The upstream API reports a running `totalCount` instead of a cursor, so
//! a loop advances its offset by the number of items received and stops
//! once the offset reaches the total reported by the latest page. Items are
//! handed one by one to an [`ItemSink`], which can end the loop early when
//! its row budget runs out. Retrying a failed page is not this module's job:
//! the transport has already retried whatever the classifier allows by the
//! time an error reaches the loop.

mod fetch_loop;
mod types;

pub use fetch_loop::{paginate, Pager};
pub use types::{ItemSink, LoopControl, Page, PageRequest, MAX_PAGE_LIMIT};

#[cfg(test)]
mod tests;
