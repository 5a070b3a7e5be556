//! Line grep over dataset files.
//!
//! Works on raw lines rather than parsed JSON so the reported line numbers
//! point straight into the file as an editor shows it.

use std::io::BufRead;
use std::path::Path;

use crate::error::DatasetError;
use crate::types::GrepHit;

/// Every line containing `pattern` (and `also`, when given). Matching is
/// case-sensitive.
pub fn grep_lines<R: BufRead>(
    reader: R,
    pattern: &str,
    also: Option<&str>,
) -> std::io::Result<Vec<GrepHit>> {
    let mut hits = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.contains(pattern) && also.map_or(true, |extra| line.contains(extra)) {
            hits.push(GrepHit {
                line_number: index + 1,
                text: line.trim().to_string(),
            });
        }
    }
    Ok(hits)
}

/// [`grep_lines`] over the file at `path`.
pub fn grep_file(path: &Path, pattern: &str, also: Option<&str>) -> Result<Vec<GrepHit>, DatasetError> {
    let read_error = |source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::open(path).map_err(read_error)?;
    let hits = grep_lines(std::io::BufReader::new(file), pattern, also).map_err(read_error)?;
    tracing::debug!(path = %path.display(), pattern, hits = hits.len(), "grep complete");
    Ok(hits)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
