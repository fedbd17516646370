//! System-wide constants and default paths.

use std::path::PathBuf;

/// Directory the generated configuration is written to by default.
pub const DEFAULT_OUTPUT_DIR: &str = "terraform";

/// File name of the generated configuration.
pub const DEFAULT_OUTPUT_FILE: &str = "main.tf.json";

/// Resource kind stamped by the factory unless configured otherwise.
pub const DEFAULT_RESOURCE_KIND: &str = "null_resource";

/// Attribute block holding the change triggers of a `null_resource`.
pub const TRIGGERS_KEY: &str = "triggers";

/// Trigger key carrying the synthesized unique token.
pub const TRIGGER_ID_KEY: &str = "id";

/// Trigger key carrying the synthesized UTC timestamp.
pub const TRIGGER_TIMESTAMP_KEY: &str = "timestamp";

/// Environment name used when none is supplied.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "tfleet";

/// Returns the default output path, `terraform/main.tf.json`.
pub fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR).join(DEFAULT_OUTPUT_FILE)
}
