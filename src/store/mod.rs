//! Roster storage for the transport roster engine.
//!
//! This module provides the read-only [`RosterStore`] query interface the
//! aggregator consumes, the in-memory [`MemoryStore`] implementation, and
//! the [`RosterLoader`] for bulk-loading roster YAML files.
//!
//! # Example
//!
//! ```no_run
//! use transport_roster::store::{RosterLoader, RosterStore};
//!
//! let store = RosterLoader::load("./data/roster").unwrap();
//! let employee = store.find_employee_by_name("Alice").unwrap();
//! ```

mod loader;
mod memory;

pub use loader::RosterLoader;
pub use memory::{MemoryStore, RosterStore};
