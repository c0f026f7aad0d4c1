//! # Refscout
//!
//! Component reference search for editor tooling.
//!
//! Refscout answers one question for a project editor: "which objects carry a
//! component of this type?" It resolves a user-typed short name (for example
//! `Rigidbody`) against every type known to the running process — engine
//! types and project script classes alike — and then walks both graph
//! universes the editor knows about: persisted object templates ("prefab"
//! assets) and the currently loaded live graphs ("scenes").
//!
//! ## Features
//!
//! - Lazy, cached short-name index over engine and project type catalogs
//! - Deterministic resolution of ambiguous short names (first candidate wins)
//! - Bounded rescan-on-miss so newly compiled project scripts are found
//!   without unbounded catalog rebuilding
//! - Uniform pre-order traversal over template-backed and live-backed nodes
//! - No persistence, no background work: everything runs on the caller's
//!   thread and rebuilds from the host collaborators on demand
//!
//! ## Example
//!
//! ```rust,ignore
//! use refscout::{ComponentSearchEngine, ObjectGraphSource, TypeIndex};
//!
//! let mut engine = ComponentSearchEngine::new(&config, index, graphs);
//! let matches = engine.search("Rigidbody")?;
//! for hit in &matches {
//!     println!("{} ({:?})", hit.path, hit.universe);
//! }
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

// Module declarations
pub mod catalog;
pub mod config;
pub mod graph;
pub mod index;
pub mod models;
pub mod observability;
pub mod services;

// Re-exports for convenience
pub use catalog::{
    CompiledClass, EngineTypeSource, ModuleRegistry, ProjectScriptSource, ScriptHandle,
    ScriptRegistry, TypeCatalogBuilder, TypeCatalogSource,
};
pub use config::FinderConfig;
pub use graph::{
    AssetLocator, GraphNode, GraphUniverse, LiveNode, ObjectGraphSource, SceneIndex, TemplateNode,
    TemplateStore,
};
pub use index::TypeIndex;
pub use models::{Component, SearchMatch, SearchResult, TypeCatalog, TypeId};
pub use services::ComponentSearchEngine;

/// Error type for refscout operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `TypeNotFound` | A short name matches no catalog entry even after one rescan |
/// | `TemplateLoad` | A template asset exists in the index but fails to load |
/// | `Config` | The configuration file is unreadable or malformed |
#[derive(Debug, ThisError)]
pub enum Error {
    /// No type with the given short name exists in the catalog.
    ///
    /// Raised when:
    /// - The name is absent from both the engine and project catalogs
    /// - The one-shot catalog rescan also came up empty
    /// - The name is empty or blank (blank input never matches an entry)
    ///
    /// A search that fails this way performed no traversal and produced no
    /// partial results. Distinct from a successful search with zero matches,
    /// which is `Ok` with an empty result.
    #[error("no component type named '{0}' in the catalog")]
    TypeNotFound(String),

    /// A template asset failed to load.
    ///
    /// Produced by [`TemplateStore`] implementations. The search core logs
    /// the failure and skips the asset; this variant never escapes
    /// [`ComponentSearchEngine::search`].
    #[error("failed to load template '{locator}': {cause}")]
    TemplateLoad {
        /// Locator of the template asset that failed to load.
        locator: String,
        /// The underlying cause.
        cause: String,
    },

    /// Configuration could not be read or parsed.
    #[error("invalid config: {0}")]
    Config(String),
}

/// Result type alias for refscout operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::TypeNotFound("Rigidbody".to_string());
        assert_eq!(
            err.to_string(),
            "no component type named 'Rigidbody' in the catalog"
        );

        let err = Error::TemplateLoad {
            locator: "templates/player".to_string(),
            cause: "missing file".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to load template 'templates/player': missing file"
        );

        let err = Error::Config("bad toml".to_string());
        assert_eq!(err.to_string(), "invalid config: bad toml");
    }
}
