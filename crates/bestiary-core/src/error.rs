//! Error types for bestiary-core.

use std::path::PathBuf;

/// A structural problem that makes a single record impossible to normalize.
///
/// Malformed optional fields never produce this error; they fall back to
/// their documented defaults instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("monster record has no `name` field")]
    MissingName,
}

/// A batch normalization aborted by one record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("monster record #{index} could not be normalized")]
pub struct BatchError {
    /// Position of the offending record in the input sequence (0-based).
    pub index: usize,
    #[source]
    pub source: NormalizeError,
}

/// Failure reading, parsing, or writing a dataset file.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid JSON", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode JSON for {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} must contain a JSON array of objects", .path.display())]
    NotAnArray { path: PathBuf },
}

impl DatasetError {
    /// True when the error came from reading a file that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DatasetError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
