//! Nested pagination over a parent collection

use super::types::{ParentKey, Scoped, TagSink};
use crate::error::Result;
use crate::pagination::{paginate, ItemSink, LoopControl, Page, PageRequest, Pager};
use std::future::Future;
use tracing::debug;

/// Run a child fetch loop for every parent, emitting tagged children.
///
/// `parents` pages through the parent collection starting at
/// `parent_request`. For each parent, `children` is driven from
/// `child_request` with the parent's key. Returns [`LoopControl::Stop`] as
/// soon as the sink's budget runs out at either level.
pub async fn fan_out<P, C, PF, PFut, CF, CFut, S>(
    parent_request: PageRequest,
    parents: PF,
    child_request: PageRequest,
    mut children: CF,
    sink: &mut S,
) -> Result<LoopControl>
where
    P: ParentKey,
    PF: FnMut(PageRequest) -> PFut,
    PFut: Future<Output = Result<Page<P>>>,
    CF: FnMut(String, PageRequest) -> CFut,
    CFut: Future<Output = Result<Page<C>>>,
    S: ItemSink<Scoped<C>> + ?Sized,
{
    let mut pager = Pager::new(parent_request, parents);

    loop {
        if sink.is_exhausted() {
            return Ok(LoopControl::Stop);
        }

        let Some(batch) = pager.next_page().await? else {
            return Ok(LoopControl::Continue);
        };

        for parent in batch {
            let key = parent.parent_key().to_string();
            debug!(parent = %key, "listing children");

            let mut tagged = TagSink::new(&key, sink);
            let control = paginate(
                child_request.clone(),
                |req| children(key.clone(), req),
                &mut tagged,
            )
            .await?;

            if control.should_stop() {
                debug!(parent = %key, "budget exhausted, stopping fan-out");
                return Ok(LoopControl::Stop);
            }
        }
    }
}
