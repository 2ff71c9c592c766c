//! Partition module
//!
//! Parent-child fan-out for tables whose rows live under another resource.
//! Environments and flags are listed per project: the project list is paged
//! through, and for every project a full child pagination loop runs with the
//! project's key stamped onto each child item.
//!
//! Both loop levels share one budget. When the child sink reports that its
//! budget is spent, the parent loop stops too and no further parent page is
//! requested.

mod fan_out;
mod types;

pub use fan_out::fan_out;
pub use types::{ParentKey, Scoped, TagSink};

#[cfg(test)]
mod tests;
