//! Unified error types for the tfleet workspace.
//!
//! Library crates return [`TfleetError`] through the [`Result`] alias; the
//! CLI wraps it in `anyhow` at the outer edge.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum TfleetError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A resource, module, or group name was rejected.
    #[error("invalid name \"{name}\": {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why the name was rejected.
        reason: &'static str,
    },

    /// A required entry was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Type of the missing entry.
        kind: &'static str,
        /// Identifier of the missing entry.
        id: String,
    },

    /// Two fragments declared the same entry and collisions were not allowed.
    #[error("duplicate {section} entry \"{name}\" under \"{group}\"")]
    Collision {
        /// Top-level section the collision happened in.
        section: &'static str,
        /// Resource kind or enclosing group of the entry.
        group: String,
        /// Colliding entry name.
        name: String,
    },

    /// A fleet manifest is malformed.
    #[error("invalid manifest {path}: {message}")]
    Manifest {
        /// Path of the manifest.
        path: PathBuf,
        /// Description of the problem.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, TfleetError>;
