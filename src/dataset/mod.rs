use std::fs;
use std::path::Path;

use crate::error::BenchmarkError;

/// Loads a text file containing comma-separated base-10 integers into a
/// `Vec<u32>`.
///
/// The whole file is read and parsed in one pass. Values are returned in
/// file order: no sorting and no de-duplication happens here, every probe
/// receives the same unmodified sequence. An empty (or whitespace-only)
/// file yields an empty vector.
pub fn load_values<P: AsRef<Path>>(path: P) -> Result<Vec<u32>, BenchmarkError> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(BenchmarkError::FileNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|e| BenchmarkError::Load {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    parse_values(&content).map_err(|reason| BenchmarkError::Load {
        path: path.to_path_buf(),
        reason,
    })
}

/// Parses a single logical record of comma-separated `u32` values.
///
/// Malformed tokens (non-numeric, out of range, empty from a trailing or
/// doubled comma) are errors rather than being silently dropped.
fn parse_values(content: &str) -> Result<Vec<u32>, String> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(Vec::new());
    }

    content
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<u32>()
                .map_err(|e| format!("invalid token '{}': {}", token, e))
        })
        .collect()
}
