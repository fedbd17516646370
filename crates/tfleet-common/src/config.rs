//! Generator configuration model.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TfleetError};
use crate::types::ResourceKind;

/// Root configuration for document generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Where the generated document is written.
    pub output_path: PathBuf,
    /// Resource kind stamped by the factory.
    pub resource_kind: ResourceKind,
    /// Whether to pretty-print the generated JSON.
    pub pretty: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_path: crate::constants::default_output_path(),
            resource_kind: ResourceKind::default(),
            pretty: true,
        }
    }
}

impl GeneratorConfig {
    /// Loads a configuration file.
    ///
    /// Files ending in `.json` are parsed as JSON, anything else as YAML.
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading generator config");

        let content = std::fs::read_to_string(path).map_err(|e| TfleetError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Ok(serde_json::from_str(&content)?)
        } else {
            serde_yaml::from_str(&content).map_err(|e| TfleetError::Config {
                message: format!("{}: {e}", path.display()),
            })
        }
    }
}
