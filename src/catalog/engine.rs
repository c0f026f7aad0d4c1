//! Engine-namespace catalog source.

use tracing::debug;

use crate::catalog::TypeCatalogSource;
use crate::models::TypeId;

/// Host collaborator: enumeration of modules loaded in the running process.
pub trait ModuleRegistry {
    /// Names of all loaded modules, in a stable enumeration order.
    fn loaded_modules(&self) -> Vec<String>;

    /// Types declared by the named module, with namespace metadata encoded
    /// in their qualified paths.
    fn module_types(&self, module: &str) -> Vec<TypeId>;
}

/// Catalog source for types in the engine's reserved namespaces.
///
/// Walks every loaded module and keeps the types whose declaring namespace
/// falls under one of the configured prefixes. Module enumeration order is
/// preserved, which keeps the catalog (and therefore first-candidate
/// resolution) deterministic across rebuilds.
pub struct EngineTypeSource {
    registry: Box<dyn ModuleRegistry>,
    namespaces: Vec<String>,
}

impl EngineTypeSource {
    /// Creates a source filtering `registry` by the given namespace prefixes.
    #[must_use]
    pub fn new(registry: Box<dyn ModuleRegistry>, namespaces: Vec<String>) -> Self {
        Self {
            registry,
            namespaces,
        }
    }
}

impl TypeCatalogSource for EngineTypeSource {
    fn discover(&self) -> Vec<TypeId> {
        let mut types = Vec::new();
        for module in self.registry.loaded_modules() {
            for type_id in self.registry.module_types(&module) {
                if self.namespaces.iter().any(|ns| type_id.in_namespace(ns)) {
                    types.push(type_id);
                }
            }
        }
        debug!(count = types.len(), "discovered engine namespace types");
        types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeModules;

    impl ModuleRegistry for FakeModules {
        fn loaded_modules(&self) -> Vec<String> {
            vec!["engine_core".to_string(), "game".to_string()]
        }

        fn module_types(&self, module: &str) -> Vec<TypeId> {
            match module {
                "engine_core" => vec![
                    TypeId::new("engine::Transform"),
                    TypeId::new("engine::physics::Rigidbody"),
                    TypeId::new("internal::Allocator"),
                ],
                _ => vec![TypeId::new("game::Boss")],
            }
        }
    }

    #[test]
    fn test_discover_keeps_only_reserved_namespaces() {
        let source = EngineTypeSource::new(Box::new(FakeModules), vec!["engine".to_string()]);
        let discovered = source.discover();
        let found: Vec<&str> = discovered.iter().map(TypeId::qualified).collect();
        assert_eq!(
            found,
            vec!["engine::Transform", "engine::physics::Rigidbody"]
        );
    }

    #[test]
    fn test_discover_with_no_matching_namespace_is_empty() {
        let source = EngineTypeSource::new(Box::new(FakeModules), vec!["render".to_string()]);
        assert!(source.discover().is_empty());
    }
}
