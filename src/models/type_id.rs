//! Stable, namespace-qualified type identifiers.
//!
//! A [`TypeId`] names one concrete type known to the running process, using
//! its fully qualified path with `::` separators:
//!
//! ```text
//! engine::physics::Rigidbody
//! scripts::PlayerController
//! ```
//!
//! The last segment is the *short name* — what a user types into the search
//! field. Short names are not unique across namespaces; the catalog keeps
//! every collision and the index picks the first candidate deterministically.
//!
//! # Examples
//!
//! ```
//! use refscout::TypeId;
//!
//! let id = TypeId::new("engine::physics::Rigidbody");
//! assert_eq!(id.short_name(), "Rigidbody");
//! assert_eq!(id.namespace(), "engine::physics");
//! assert!(id.in_namespace("engine"));
//! assert!(!id.in_namespace("eng"));
//! ```

use std::fmt;
use std::sync::Arc;

/// Separator between path segments of a qualified type name.
const SEPARATOR: &str = "::";

/// An opaque, stable identifier for a concrete type.
///
/// Immutable once obtained and cheap to clone (shared string backing).
/// Identity, hashing, and ordering all follow the qualified path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId {
    /// Fully qualified path, e.g. `engine::physics::Rigidbody`.
    qualified: Arc<str>,
}

impl TypeId {
    /// Creates a type identifier from a fully qualified path.
    ///
    /// The path is taken as-is; an unqualified name (no `::`) is valid and
    /// simply has an empty namespace.
    #[must_use]
    pub fn new(qualified: impl Into<Arc<str>>) -> Self {
        Self {
            qualified: qualified.into(),
        }
    }

    /// Returns the fully qualified path.
    #[must_use]
    pub fn qualified(&self) -> &str {
        &self.qualified
    }

    /// Returns the unqualified display name (the last path segment).
    ///
    /// This is the name users type into the search field, and the key the
    /// type index buckets candidates under.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.qualified
            .rsplit_once(SEPARATOR)
            .map_or(&*self.qualified, |(_, name)| name)
    }

    /// Returns the declaring namespace (everything before the last segment).
    ///
    /// Empty for unqualified names.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.qualified
            .rsplit_once(SEPARATOR)
            .map_or("", |(ns, _)| ns)
    }

    /// Returns `true` if the declaring namespace is `prefix` or falls under
    /// it.
    ///
    /// The test is segment-aware: `engine::physics` is in namespace
    /// `engine`, but `engineered` is not.
    #[must_use]
    pub fn in_namespace(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return false;
        }
        let ns = self.namespace();
        ns == prefix
            || ns
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with(SEPARATOR))
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified)
    }
}

impl From<&str> for TypeId {
    fn from(qualified: &str) -> Self {
        Self::new(qualified)
    }
}
