//! Object graph enumeration.
//!
//! This module provides the uniform view the search engine walks:
//!
//! - [`GraphNode`] - shared capability set over both node kinds
//! - [`TemplateNode`] / [`TemplateStore`] - persisted template assets
//! - [`LiveNode`] / [`SceneIndex`] - currently loaded live graphs
//! - [`ObjectGraphSource`] - root enumeration over both universes
//!
//! Nodes are owned by whichever collaborator produced them; the search engine
//! only reads them during the query that enumerated them. Roots are
//! re-enumerated from the collaborators on every search, so results always
//! reflect the project's current state.

mod live;
mod template;

pub use live::{LiveNode, SceneIndex};
pub use template::{AssetLocator, TemplateNode, TemplateStore};

use tracing::warn;

use crate::models::Component;

/// Which universe a graph node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphUniverse {
    /// Persisted, reusable object template stored in the project.
    Template,
    /// Object structure currently instantiated and loaded for execution.
    Live,
}

impl GraphUniverse {
    /// Returns the universe as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Template => "template",
            Self::Live => "live",
        }
    }
}

/// A node in a hierarchical object graph.
///
/// The capability set is deliberately small: children and components are all
/// the search engine needs for a pre-order walk. Both node kinds implement
/// it, so traversal code never branches on the universe.
pub trait GraphNode {
    /// Display name of this node.
    fn display_name(&self) -> &str;

    /// Which universe this node belongs to.
    fn universe(&self) -> GraphUniverse;

    /// Whether this node is active.
    ///
    /// Template nodes are always considered active; live nodes report their
    /// activation flag.
    fn is_active(&self) -> bool;

    /// Child nodes in declaration order.
    fn children(&self) -> Vec<&dyn GraphNode>;

    /// Components attached to this node.
    fn components(&self) -> &[Component];
}

/// Enumerates root nodes of both graph universes.
///
/// Owns the two host collaborators and performs no caching of its own: every
/// call re-queries the template store and the scene index.
pub struct ObjectGraphSource {
    templates: Box<dyn TemplateStore>,
    scenes: Box<dyn SceneIndex>,
}

impl ObjectGraphSource {
    /// Creates a graph source over the given collaborators.
    #[must_use]
    pub fn new(templates: Box<dyn TemplateStore>, scenes: Box<dyn SceneIndex>) -> Self {
        Self { templates, scenes }
    }

    /// Returns one root per stored object template, in asset enumeration
    /// order.
    ///
    /// A template that fails to load is logged and skipped; root enumeration
    /// never aborts a search.
    #[must_use]
    pub fn template_roots(&self) -> Vec<TemplateNode> {
        let mut roots = Vec::new();
        for locator in self.templates.find_template_assets() {
            match self.templates.load_template(&locator) {
                Ok(root) => roots.push(root),
                Err(err) => {
                    warn!(locator = %locator, error = %err, "skipping unloadable template");
                },
            }
        }
        roots
    }

    /// Returns every root-level node of every loaded live graph, in
    /// scene-load order.
    ///
    /// When `include_inactive` is false, inactive roots are dropped.
    /// Descendant traversal is the caller's concern.
    #[must_use]
    pub fn live_roots(&self, include_inactive: bool) -> Vec<LiveNode> {
        let mut roots = Vec::new();
        for scene in 0..self.scenes.loaded_scene_count() {
            for root in self.scenes.scene_roots(scene) {
                if include_inactive || root.is_active() {
                    roots.push(root);
                }
            }
        }
        roots
    }
}
