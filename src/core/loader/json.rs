use std::{fs, path::Path};

use serde_json::Value;

use crate::error::PipelineError;

/// Read and parse a JSON catalog document.
pub fn read_json_document(path: &Path) -> Result<Value, PipelineError> {
    let content = fs::read_to_string(path)
        .map_err(|e| PipelineError::load(path, format!("failed to read file: {}", e)))?;

    serde_json::from_str(&content)
        .map_err(|e| PipelineError::load(path, format!("invalid JSON: {}", e)))
}
