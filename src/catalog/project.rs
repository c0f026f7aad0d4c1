//! Project-script catalog source.

use std::cell::RefCell;
use std::fmt;

use tracing::debug;

use crate::catalog::TypeCatalogSource;
use crate::models::TypeId;

/// Handle to one script asset known to the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScriptHandle(String);

impl ScriptHandle {
    /// Creates a handle from the script's asset identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the script's asset identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScriptHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The compiled class a script asset resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledClass {
    /// Identifier of the compiled type.
    pub type_id: TypeId,
    /// Name of the module the class was compiled into.
    pub module: String,
}

/// Host collaborator: enumeration of script assets and their compiled
/// classes.
pub trait ScriptRegistry {
    /// Every script asset currently known to the process, in a stable
    /// enumeration order.
    fn all_scripts(&self) -> Vec<ScriptHandle>;

    /// The compiled class for `handle`, or `None` when the script does not
    /// resolve to a class (non-class scripts, compile failures).
    fn compiled_class(&self, handle: &ScriptHandle) -> Option<CompiledClass>;
}

/// Catalog source for project-authored script classes.
///
/// Asks the registry for every script asset, resolves each to its compiled
/// class, and keeps the classes compiled into the single designated project
/// module. The discovered script list is memoized: script enumeration is the
/// expensive part of a scan, and the list rarely changes within one editor
/// session. [`clear_script_cache`](Self::clear_script_cache) drops the memo.
pub struct ProjectScriptSource {
    registry: Box<dyn ScriptRegistry>,
    project_module: String,
    scripts: RefCell<Option<Vec<ScriptHandle>>>,
}

impl ProjectScriptSource {
    /// Creates a source over `registry`, keeping classes compiled into
    /// `project_module`.
    #[must_use]
    pub fn new(registry: Box<dyn ScriptRegistry>, project_module: impl Into<String>) -> Self {
        Self {
            registry,
            project_module: project_module.into(),
            scripts: RefCell::new(None),
        }
    }

    /// Drops the memoized script list; the next discovery re-enumerates.
    pub fn clear_script_cache(&self) {
        self.scripts.borrow_mut().take();
    }

    fn scripts(&self) -> Vec<ScriptHandle> {
        self.scripts
            .borrow_mut()
            .get_or_insert_with(|| self.registry.all_scripts())
            .clone()
    }
}

impl TypeCatalogSource for ProjectScriptSource {
    fn discover(&self) -> Vec<TypeId> {
        let mut types = Vec::new();
        for handle in self.scripts() {
            let Some(class) = self.registry.compiled_class(&handle) else {
                continue;
            };
            if class.module == self.project_module {
                types.push(class.type_id);
            }
        }
        debug!(count = types.len(), "discovered project script types");
        types
    }
}
