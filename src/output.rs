//! JSON output. Consumes the accumulated chapter records and writes one file.

use crate::model::ChapterRecord;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Errors from the JSON writer.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output file: {path}: {source}")]
    CreateFile {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write JSON: {path}: {source}")]
    Serialize {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Write records as a pretty-printed JSON array.
///
/// One serialization call after full buffering; nothing touches the file until
/// every chapter has been fetched.
pub fn write_json(records: &[ChapterRecord], path: &Path) -> Result<(), OutputError> {
    let file = File::create(path).map_err(|e| OutputError::CreateFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::to_writer_pretty(file, records).map_err(|e| OutputError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })
}
