//! The merged catalog of types known to the process.

use crate::models::TypeId;

/// An ordered, deduplicated set of [`TypeId`] produced by one catalog build.
///
/// A catalog is built fresh on each (re)scan and never mutated afterwards.
/// Enumeration order is stable within one build: engine types first, then
/// project script types, each in their source's enumeration order. An empty
/// catalog is valid, if degenerate.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: Vec<TypeId>,
}

impl TypeCatalog {
    /// Creates a catalog from already-deduplicated, ordered types.
    #[must_use]
    pub const fn new(types: Vec<TypeId>) -> Self {
        Self { types }
    }

    /// Iterates the catalog in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, TypeId> {
        self.types.iter()
    }

    /// Returns the number of distinct types in the catalog.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if the catalog holds no types.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<'a> IntoIterator for &'a TypeCatalog {
    type Item = &'a TypeId;
    type IntoIter = std::slice::Iter<'a, TypeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}
