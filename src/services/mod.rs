//! High-level services.
//!
//! Services own the index and graph collaborators and expose the operations
//! the presentation layer calls.

mod search;

pub use search::ComponentSearchEngine;
