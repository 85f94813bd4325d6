//! Application state for the transport roster API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::MemoryStore;

/// Shared application state.
///
/// Holds the loaded roster. The roster is read-only for the lifetime of
/// the server; report builds never mutate it, so handlers share it through
/// a plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The loaded roster store.
    roster: Arc<MemoryStore>,
}

impl AppState {
    /// Creates a new application state with the given roster store.
    pub fn new(roster: MemoryStore) -> Self {
        Self {
            roster: Arc::new(roster),
        }
    }

    /// Returns a reference to the roster store.
    pub fn roster(&self) -> &MemoryStore {
        &self.roster
    }
}
