//! Per-connection client cache
//!
//! Holds one client per connection name for the lifetime of the owning
//! plugin. Concurrent first use of the same name constructs the client
//! exactly once: each name maps to its own `OnceCell`, and racing callers
//! block on that cell rather than on the whole map.

use super::client::ApiClient;
use crate::error::{Error, Result};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

type Slot<C> = Arc<OnceCell<Arc<C>>>;

/// Construct-once cache of connection clients
pub struct ClientCache<C = ApiClient> {
    slots: Mutex<HashMap<String, Slot<C>>>,
}

impl<C> Default for ClientCache<C> {
    fn default() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }
}

impl<C> ClientCache<C> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the client for `key`, building it with `init` on first use.
    ///
    /// A failed `init` leaves the slot empty so the next call tries again.
    pub fn get_or_try_init<F>(&self, key: &str, init: F) -> Result<Arc<C>>
    where
        F: FnOnce() -> Result<C>,
    {
        let slot = self.slot(key)?;
        slot.get_or_try_init(|| {
            debug!(connection = key, "constructing client");
            init().map(Arc::new)
        })
        .cloned()
    }

    /// The client for `key`, if already constructed
    pub fn get(&self, key: &str) -> Option<Arc<C>> {
        let slots = self.slots.lock().ok()?;
        slots.get(key).and_then(|slot| slot.get().cloned())
    }

    /// Drop the client for `key`; returns whether one was cached
    pub fn invalidate(&self, key: &str) -> bool {
        match self.slots.lock() {
            Ok(mut slots) => slots
                .remove(key)
                .is_some_and(|slot| slot.get().is_some()),
            Err(_) => false,
        }
    }

    /// Number of constructed clients
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .map(|slots| slots.values().filter(|s| s.get().is_some()).count())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, key: &str) -> Result<Slot<C>> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| Error::Other("client cache lock poisoned".to_string()))?;
        Ok(Arc::clone(slots.entry(key.to_string()).or_default()))
    }
}

impl<C> std::fmt::Debug for ClientCache<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCache")
            .field("clients", &self.len())
            .finish()
    }
}
