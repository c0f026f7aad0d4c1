//! Search result types.

use crate::graph::GraphUniverse;
use crate::models::TypeId;

/// Result of one component search: matches in insertion order.
///
/// Template matches come before live matches; within each universe, root
/// enumeration order then pre-order traversal order. The result is not
/// deduplicated — a node reachable from two roots appears once per subtree it
/// was found in, and a node owning two matching components contributes two
/// entries.
pub type SearchResult = Vec<SearchMatch>;

/// One matching component instance found on a graph node.
///
/// Matches are owned projections of the visited node: the engine does not
/// retain node references past the query that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// Display name of the owning node.
    pub node_name: String,
    /// Slash-joined path from the node's root, e.g. `Player/Arm/Hand`.
    pub path: String,
    /// Which graph universe the node was found in.
    pub universe: GraphUniverse,
    /// Concrete runtime type of the matching component.
    pub component_type: TypeId,
}
