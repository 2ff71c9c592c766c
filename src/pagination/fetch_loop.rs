//! The paginated fetch loop

use super::types::{ItemSink, LoopControl, Page, PageRequest};
use crate::error::Result;
use std::future::Future;
use tracing::debug;

/// Page-at-a-time driver over an offset-paginated endpoint.
///
/// `fetch` is called with the current request; the pager advances the offset
/// by the number of items returned and reports completion when the offset
/// reaches the page's `totalCount`. An empty page, or a page without a
/// total, also completes the pager.
pub struct Pager<F> {
    fetch: F,
    request: PageRequest,
    done: bool,
}

impl<F> Pager<F> {
    /// Create a pager starting at `request`
    pub fn new(request: PageRequest, fetch: F) -> Self {
        Self {
            fetch,
            request,
            done: false,
        }
    }

    /// The request the next fetch will use
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    /// Fetch the next page, or `None` once drained
    pub async fn next_page<T, Fut>(&mut self) -> Result<Option<Vec<T>>>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        if self.done {
            return Ok(None);
        }

        let page = (self.fetch)(self.request.clone()).await?;

        let received = page.items.len() as u64;
        self.request.offset += received;

        // Re-checked after every page since the total may grow mid-loop.
        self.done = match page.total_count {
            Some(total) => received == 0 || self.request.offset >= total,
            None => true,
        };

        debug!(
            offset = self.request.offset,
            limit = self.request.limit,
            received,
            total = ?page.total_count,
            done = self.done,
            "fetched page"
        );

        Ok(Some(page.items))
    }
}

/// Drive a fetch loop to completion or until `sink` runs out of budget.
///
/// The budget is consulted before every fetch and after every item, so no
/// request is issued once the sink is exhausted.
pub async fn paginate<T, F, Fut, S>(request: PageRequest, fetch: F, sink: &mut S) -> Result<LoopControl>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
    S: ItemSink<T> + ?Sized,
{
    let mut pager = Pager::new(request, fetch);

    loop {
        if sink.is_exhausted() {
            return Ok(LoopControl::Stop);
        }

        let Some(items) = pager.next_page().await? else {
            return Ok(LoopControl::Continue);
        };

        for item in items {
            sink.emit(item)?;
            if sink.is_exhausted() {
                return Ok(LoopControl::Stop);
            }
        }
    }
}
