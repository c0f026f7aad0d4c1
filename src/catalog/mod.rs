//! Type catalog construction.
//!
//! The catalog is the raw material the type index is built from: every type
//! identifier the running process knows about, merged from two disjoint
//! sources:
//!
//! - [`EngineTypeSource`] - types in the engine's reserved namespaces
//! - [`ProjectScriptSource`] - compiled classes of project-authored scripts
//!
//! Both implement [`TypeCatalogSource`]; [`TypeCatalogBuilder`] concatenates
//! them in order and deduplicates by type identity. Building cannot fail: a
//! source that finds nothing contributes nothing.

mod engine;
mod project;

pub use engine::{EngineTypeSource, ModuleRegistry};
pub use project::{CompiledClass, ProjectScriptSource, ScriptHandle, ScriptRegistry};

use std::collections::HashSet;

use tracing::debug;

use crate::models::{TypeCatalog, TypeId};

/// A source of candidate type identifiers.
pub trait TypeCatalogSource {
    /// Enumerates every type this source currently knows about, in the
    /// source's own stable enumeration order.
    fn discover(&self) -> Vec<TypeId>;
}

/// Merges catalog sources into a deduplicated [`TypeCatalog`].
pub struct TypeCatalogBuilder {
    sources: Vec<Box<dyn TypeCatalogSource>>,
}

impl TypeCatalogBuilder {
    /// Creates a builder over the given sources.
    ///
    /// Source order matters: the catalog enumerates source 0's types before
    /// source 1's, and the index's first-candidate tie-break follows catalog
    /// order. Hosts list the engine source before the project source.
    #[must_use]
    pub fn new(sources: Vec<Box<dyn TypeCatalogSource>>) -> Self {
        Self { sources }
    }

    /// Builds a fresh catalog from all sources.
    ///
    /// Types are deduplicated by identity, keeping the first occurrence. An
    /// empty catalog is a valid result.
    #[must_use]
    pub fn build(&self) -> TypeCatalog {
        let mut seen = HashSet::new();
        let mut types = Vec::new();
        for source in &self.sources {
            for type_id in source.discover() {
                if seen.insert(type_id.clone()) {
                    types.push(type_id);
                }
            }
        }
        debug!(count = types.len(), "built type catalog");
        TypeCatalog::new(types)
    }
}
