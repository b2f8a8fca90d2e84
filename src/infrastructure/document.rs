//! JSON document loading

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{BrowseError, BrowseResult};

/// Read and decode the JSON file at `path`.
pub fn load_document(path: &Path) -> BrowseResult<Value> {
    let bytes = fs::read(path).map_err(|source| {
        tracing::info!(path = %path.display(), error = %source, "cannot read document");
        BrowseError::FileRead(source)
    })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "read document");
    parse_document(&bytes)
}

/// Decode JSON bytes into a generic value.
pub fn parse_document(bytes: &[u8]) -> BrowseResult<Value> {
    Ok(serde_json::from_slice(bytes)?)
}
