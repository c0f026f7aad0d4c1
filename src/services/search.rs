//! Component search across both graph universes.

use tracing::{debug, info};

use crate::config::FinderConfig;
use crate::graph::{GraphNode, ObjectGraphSource};
use crate::index::TypeIndex;
use crate::models::{SearchMatch, SearchResult, TypeId};
use crate::{Error, Result};

/// Searches template and live graphs for nodes owning components of a named
/// type.
///
/// Owns the [`TypeIndex`] and [`ObjectGraphSource`] for its lifetime; hosts
/// construct one engine when the search tool opens and call
/// [`reset_index`](Self::reset_index) when it reopens. All work happens
/// synchronously on the caller's thread.
pub struct ComponentSearchEngine {
    index: TypeIndex,
    graphs: ObjectGraphSource,
    include_inactive: bool,
}

impl ComponentSearchEngine {
    /// Creates an engine over the given index and graph source.
    #[must_use]
    pub fn new(config: &FinderConfig, index: TypeIndex, graphs: ObjectGraphSource) -> Self {
        Self {
            index,
            graphs,
            include_inactive: config.include_inactive,
        }
    }

    /// Finds every node, in either universe, owning at least one component
    /// assignable to the type `name` resolves to.
    ///
    /// The result is insertion-ordered: template matches first, then live
    /// matches; within each universe, root enumeration order then pre-order
    /// traversal order. A node contributes one entry per matching component
    /// instance, and nothing is deduplicated across universes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeNotFound`] when `name` resolves to no catalog
    /// type even after one rescan. No traversal happens in that case; a
    /// resolvable name with zero owners is `Ok` with an empty result.
    pub fn search(&mut self, name: &str) -> Result<SearchResult> {
        let Some(type_id) = self.index.resolve(name) else {
            return Err(Error::TypeNotFound(name.to_string()));
        };
        debug!(name, type_id = %type_id, "resolved search target");

        let mut matches = Vec::new();
        for root in self.graphs.template_roots() {
            collect(&root, &type_id, &mut Vec::new(), &mut matches);
        }
        let template_matches = matches.len();

        for root in self.graphs.live_roots(self.include_inactive) {
            collect(&root, &type_id, &mut Vec::new(), &mut matches);
        }

        info!(
            name,
            template_matches,
            live_matches = matches.len() - template_matches,
            "component search finished"
        );
        Ok(matches)
    }

    /// Forces the next search to rebuild the type catalog from scratch.
    ///
    /// Hosts call this when the tool is (re)opened.
    pub fn reset_index(&mut self) {
        self.index.reset();
    }

    /// Access to the owned index, for priming and collision inspection.
    pub fn index_mut(&mut self) -> &mut TypeIndex {
        &mut self.index
    }
}

/// Pre-order walk appending one match per assignable component instance.
fn collect(
    node: &dyn GraphNode,
    target: &TypeId,
    path: &mut Vec<String>,
    out: &mut Vec<SearchMatch>,
) {
    path.push(node.display_name().to_string());
    for component in node.components() {
        if component.is_assignable_to(target) {
            out.push(SearchMatch {
                node_name: node.display_name().to_string(),
                path: path.join("/"),
                universe: node.universe(),
                component_type: component.type_id().clone(),
            });
        }
    }
    for child in node.children() {
        collect(child, target, path, out);
    }
    path.pop();
}
