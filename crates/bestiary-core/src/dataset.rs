//! Dataset files — JSON arrays of monster records on disk.
//!
//! Files written by other tools sometimes start with a UTF-8 byte order mark;
//! it is stripped before parsing.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::DatasetError;
use crate::types::RawMonster;

const BOM: char = '\u{feff}';

/// Read a file as UTF-8 text with any leading byte order mark removed.
pub fn read_text(path: &Path) -> Result<String, DatasetError> {
    let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match text.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

/// Parse a file as a single JSON document.
pub fn load_value(path: &Path) -> Result<Value, DatasetError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a JSON array of record objects.
pub fn load_records(path: &Path) -> Result<Vec<RawMonster>, DatasetError> {
    let not_an_array = || DatasetError::NotAnArray {
        path: path.to_path_buf(),
    };

    match load_value(path)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(record) => Ok(record),
                _ => Err(not_an_array()),
            })
            .collect(),
        _ => Err(not_an_array()),
    }
}

/// Write `value` as pretty-printed JSON (two-space indent) with a trailing
/// newline.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), DatasetError> {
    let mut text = serde_json::to_string_pretty(value).map_err(|source| DatasetError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    text.push('\n');
    std::fs::write(path, text).map_err(|source| DatasetError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "wrote dataset");
    Ok(())
}

/// Check that a file parses as JSON. Returns the number of elements for an
/// array and `1` for any other document.
pub fn validate(path: &Path) -> Result<usize, DatasetError> {
    Ok(match load_value(path)? {
        Value::Array(items) => items.len(),
        _ => 1,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
