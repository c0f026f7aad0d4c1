//! Template-backed graph nodes.

use std::fmt;

use crate::graph::{GraphNode, GraphUniverse};
use crate::models::Component;
use crate::Result;

/// Locator of a template asset within the project's asset index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetLocator(String);

impl AssetLocator {
    /// Creates a locator from its project-relative path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the project-relative path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host collaborator: the project's asset index, restricted to templates.
pub trait TemplateStore {
    /// Returns a locator for every template-typed asset in the project.
    fn find_template_assets(&self) -> Vec<AssetLocator>;

    /// Loads the template stored at `locator`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TemplateLoad`] when the asset cannot be
    /// materialized into a node tree.
    fn load_template(&self, locator: &AssetLocator) -> Result<TemplateNode>;
}

/// A node of a persisted object template.
///
/// Template nodes own their children and components outright; a loaded
/// template is a self-contained tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateNode {
    name: String,
    components: Vec<Component>,
    children: Vec<TemplateNode>,
}

impl TemplateNode {
    /// Creates a leaf template node with no components.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
            children: Vec::new(),
        }
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

impl GraphNode for TemplateNode {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn universe(&self) -> GraphUniverse {
        GraphUniverse::Template
    }

    fn is_active(&self) -> bool {
        // Templates carry no activation state; they are definitions, not
        // instances.
        true
    }

    fn children(&self) -> Vec<&dyn GraphNode> {
        self.children.iter().map(|c| c as &dyn GraphNode).collect()
    }

    fn components(&self) -> &[Component] {
        &self.components
    }
}
