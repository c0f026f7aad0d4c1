//! Live-backed graph nodes.

use crate::graph::{GraphNode, GraphUniverse};
use crate::models::Component;

/// Host collaborator: the set of currently loaded live graphs.
pub trait SceneIndex {
    /// Number of live graphs currently loaded, in load order.
    fn loaded_scene_count(&self) -> usize;

    /// Root-level nodes of the live graph at `index`.
    ///
    /// An out-of-range index yields an empty list; the loaded set can shrink
    /// between the count query and the root query.
    fn scene_roots(&self, index: usize) -> Vec<LiveNode>;
}

/// A node of a currently loaded live graph.
///
/// Unlike template nodes, live nodes carry an activation flag; inactive
/// nodes are included in searches by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveNode {
    name: String,
    active: bool,
    components: Vec<Component>,
    children: Vec<LiveNode>,
}

impl LiveNode {
    /// Creates an active leaf node with no components.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: true,
            components: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Marks this node inactive.
    #[must_use]
    pub const fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Attaches a component to this node.
    #[must_use]
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Appends a child node.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }
}

impl GraphNode for LiveNode {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn universe(&self) -> GraphUniverse {
        GraphUniverse::Live
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn children(&self) -> Vec<&dyn GraphNode> {
        self.children.iter().map(|c| c as &dyn GraphNode).collect()
    }

    fn components(&self) -> &[Component] {
        &self.components
    }
}
