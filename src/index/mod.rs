//! Short-name resolution over the type catalog.
//!
//! [`TypeIndex`] owns a [`TypeCatalogBuilder`] and derives, lazily, a map
//! from short name to every catalog type sharing that name. Resolution picks
//! the first candidate in catalog order, which makes collisions (the same
//! short name declared in two namespaces) deterministic: callers always get
//! the same winner until the index is reset.
//!
//! A lookup that misses triggers at most one catalog rescan before giving
//! up. Project scripts compile while the editor runs, so a miss may simply
//! mean the index predates the newest class; a single rescan amortizes the
//! rebuild cost while keeping termination structurally obvious.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::TypeCatalogBuilder;
use crate::models::{TypeCatalog, TypeId};

/// Maximum number of catalog rescans per failed lookup.
const MAX_RESCANS: usize = 1;

/// Cached mapping from short name to candidate types.
///
/// Built lazily on the first resolution request and kept until
/// [`reset`](Self::reset). Hosts create one index when the search tool opens
/// and pass it into the search engine by ownership; there is no ambient
/// global state.
pub struct TypeIndex {
    builder: TypeCatalogBuilder,
    catalog: Option<TypeCatalog>,
    by_short_name: Option<HashMap<String, Vec<TypeId>>>,
}

impl TypeIndex {
    /// Creates an unbuilt index over `builder`.
    #[must_use]
    pub const fn new(builder: TypeCatalogBuilder) -> Self {
        Self {
            builder,
            catalog: None,
            by_short_name: None,
        }
    }

    /// Resolves a short name to its canonical type.
    ///
    /// Returns the first candidate in catalog enumeration order. On a miss,
    /// rebuilds the catalog once and retries; `None` after that is final for
    /// this call. `None` is a normal outcome, not an error — blank names take
    /// the same path as any other unknown name.
    pub fn resolve(&mut self, name: &str) -> Option<TypeId> {
        // Explicit loop with a capped counter rather than recursion, so the
        // termination bound is visible in the control flow.
        let mut rescans = 0;
        loop {
            if let Some(first) = self.map().get(name).and_then(|c| c.first()) {
                return Some(first.clone());
            }
            if rescans >= MAX_RESCANS {
                debug!(name, "short name unresolved after rescan");
                return None;
            }
            rescans += 1;
            debug!(name, "short name not in index, rescanning catalogs");
            self.reset();
        }
    }

    /// Returns every candidate sharing `name`, in catalog order.
    ///
    /// Empty when the name is unknown. Never triggers a rescan; this is a
    /// read-only view for collision inspection.
    pub fn candidates(&mut self, name: &str) -> &[TypeId] {
        self.map().get(name).map_or(&[], Vec::as_slice)
    }

    /// Builds the catalog and derived map now instead of on first lookup.
    ///
    /// Hosts call this at tool-open so the first search does not pay the
    /// scan cost.
    pub fn prime(&mut self) {
        let entries = self.map().len();
        debug!(entries, "type index primed");
    }

    /// Discards the catalog and derived map; the next lookup rebuilds both.
    pub fn reset(&mut self) {
        self.catalog = None;
        self.by_short_name = None;
    }

    fn map(&mut self) -> &HashMap<String, Vec<TypeId>> {
        let catalog = self.catalog.get_or_insert_with(|| self.builder.build());
        self.by_short_name.get_or_insert_with(|| {
            let mut map: HashMap<String, Vec<TypeId>> = HashMap::new();
            for type_id in catalog.iter() {
                map.entry(type_id.short_name().to_string())
                    .or_default()
                    .push(type_id.clone());
            }
            map
        })
    }
}
