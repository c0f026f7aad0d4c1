//! Components attached to graph nodes.

use crate::models::TypeId;

/// A behavior/data unit attached to a graph node.
///
/// A component carries its concrete runtime type plus that type's ancestor
/// chain (base types, nearest first). The chain is explicit metadata supplied
/// by whichever collaborator materialized the node — there is no runtime
/// subtype query to fall back on — and it is what makes "assignable to"
/// checks possible for base-type searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Concrete runtime type of this component instance.
    type_id: TypeId,
    /// Base types of `type_id`, nearest ancestor first.
    ancestors: Vec<TypeId>,
}

impl Component {
    /// Creates a component with no declared base types.
    #[must_use]
    pub const fn new(type_id: TypeId) -> Self {
        Self {
            type_id,
            ancestors: Vec::new(),
        }
    }

    /// Creates a component with an explicit ancestor chain, nearest first.
    #[must_use]
    pub const fn with_ancestors(type_id: TypeId, ancestors: Vec<TypeId>) -> Self {
        Self { type_id, ancestors }
    }

    /// Returns the concrete runtime type of this component.
    #[must_use]
    pub const fn type_id(&self) -> &TypeId {
        &self.type_id
    }

    /// Returns the declared base types, nearest ancestor first.
    #[must_use]
    pub fn ancestors(&self) -> &[TypeId] {
        &self.ancestors
    }

    /// Returns `true` if this component's runtime type is assignable to
    /// `target`: either the concrete type itself or one of its ancestors.
    #[must_use]
    pub fn is_assignable_to(&self, target: &TypeId) -> bool {
        self.type_id == *target || self.ancestors.contains(target)
    }
}
