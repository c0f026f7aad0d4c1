//! Data models for the type catalog and search results.

mod catalog;
mod component;
mod search;
mod type_id;

pub use catalog::TypeCatalog;
pub use component::Component;
pub use search::{SearchMatch, SearchResult};
pub use type_id::TypeId;
