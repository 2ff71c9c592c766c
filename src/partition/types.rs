//! Partition types and traits

use crate::error::Result;
use crate::pagination::ItemSink;

/// An item that scopes child resources
pub trait ParentKey {
    /// Key substituted into the child endpoint path
    fn parent_key(&self) -> &str;
}

impl ParentKey for String {
    fn parent_key(&self) -> &str {
        self
    }
}

/// A child item tagged with the key of its parent
#[derive(Debug, Clone, PartialEq)]
pub struct Scoped<T> {
    /// Key of the parent the item was listed under
    pub parent_key: String,
    /// The child item
    pub item: T,
}

impl<T> Scoped<T> {
    /// Create a new scoped item
    pub fn new(parent_key: impl Into<String>, item: T) -> Self {
        Self {
            parent_key: parent_key.into(),
            item,
        }
    }
}

/// Adapter that tags child items before handing them to the outer sink.
///
/// Budget queries go straight through to the wrapped sink, so a child loop
/// sees the budget left for the whole fan-out.
pub struct TagSink<'a, S: ?Sized> {
    parent_key: &'a str,
    inner: &'a mut S,
}

impl<'a, S: ?Sized> TagSink<'a, S> {
    /// Wrap `inner`, tagging every item with `parent_key`
    pub fn new(parent_key: &'a str, inner: &'a mut S) -> Self {
        Self { parent_key, inner }
    }
}

impl<C, S> ItemSink<C> for TagSink<'_, S>
where
    S: ItemSink<Scoped<C>> + ?Sized,
{
    fn emit(&mut self, item: C) -> Result<()> {
        self.inner.emit(Scoped::new(self.parent_key, item))
    }

    fn remaining(&self) -> Option<u64> {
        self.inner.remaining()
    }
}
