//! Writing merged documents to disk.

use std::path::Path;

use tfleet_common::error::{Result, TfleetError};
use tfleet_template::fragment::Document;

/// Serializes `document` to `path`, creating parent directories.
///
/// The file is written next to its destination first and then renamed over
/// it, so readers never observe a half-written document. The staging file
/// is removed again if either step fails.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_document(document: &Document, path: &Path, pretty: bool) -> Result<()> {
    let text = document.to_json(pretty)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }

    let staging = path.with_extension("json.tmp");
    let written = std::fs::write(&staging, text)
        .map_err(|e| io_error(&staging, e))
        .and_then(|()| std::fs::rename(&staging, path).map_err(|e| io_error(path, e)));
    if let Err(err) = written {
        if let Err(cleanup) = std::fs::remove_file(&staging) {
            tracing::debug!(
                path = %staging.display(),
                error = %cleanup,
                "no staging file to remove"
            );
        }
        return Err(err);
    }

    tracing::info!(
        path = %path.display(),
        resources = document.as_fragment().total_resource_count(),
        "wrote document"
    );
    Ok(())
}

/// Reads and validates a previously written document.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid document.
pub fn read_document(path: &Path) -> Result<Document> {
    tracing::debug!(path = %path.display(), "reading document");
    let text = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    Document::from_json(&text)
}

fn io_error(path: &Path, source: std::io::Error) -> TfleetError {
    TfleetError::Io {
        path: path.to_path_buf(),
        source,
    }
}
