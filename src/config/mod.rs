//! Configuration management.

use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

/// Main configuration for refscout.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Reserved engine namespace prefixes whose types enter the catalog.
    pub engine_namespaces: Vec<String>,
    /// The single project-authored module whose script classes are indexed.
    pub project_module: String,
    /// Whether searches traverse inactive live nodes.
    pub include_inactive: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            engine_namespaces: vec!["engine".to_string()],
            project_module: "scripts".to_string(),
            include_inactive: true,
        }
    }
}

impl FinderConfig {
    /// Loads configuration from a TOML file, falling back to defaults for
    /// absent keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        let file: ConfigFile =
            toml::from_str(&raw).map_err(|e| Error::Config(format!("parse error: {e}")))?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            engine_namespaces: file
                .engine_namespaces
                .unwrap_or(defaults.engine_namespaces),
            project_module: file.project_module.unwrap_or(defaults.project_module),
            include_inactive: file.include_inactive.unwrap_or(defaults.include_inactive),
        }
    }
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    /// Engine namespace prefixes.
    engine_namespaces: Option<Vec<String>>,
    /// Project module name.
    project_module: Option<String>,
    /// Traverse inactive live nodes.
    include_inactive: Option<bool>,
}
