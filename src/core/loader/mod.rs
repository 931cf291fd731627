//! Catalog loading.
//!
//! Turns a catalog source file into a validated [`Catalog`]:
//!
//! - `json`: a `{ "locales": [..], "translations": [..] }` document
//! - `typescript`: a TypeScript/JavaScript module exporting `locales` and
//!   `translations`, evaluated statically from its AST

mod json;
mod typescript;

use std::path::Path;

use serde_json::Value;

use super::catalog::Catalog;
use crate::error::PipelineError;

pub use json::read_json_document;
pub use typescript::{ModuleGraph, SCRIPT_EXTENSIONS};

/// Load the catalog stored at `path`.
///
/// Returns [`PipelineError::NotFound`] when `path` does not exist and
/// [`PipelineError::Load`] for anything that cannot be read, parsed,
/// evaluated or validated.
pub fn load_catalog(path: &Path) -> Result<Catalog, PipelineError> {
    if !path.exists() {
        return Err(PipelineError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(PipelineError::load(path, "not a file"));
    }

    tracing::debug!(path = %path.display(), "loading translation catalog");
    let document = read_document(path)?;

    let catalog = Catalog::from_value(&document).map_err(|e| PipelineError::load(path, e.to_string()))?;
    tracing::debug!(
        records = catalog.records().len(),
        locales = catalog.locales().len(),
        "translation catalog loaded"
    );
    Ok(catalog)
}

fn read_document(path: &Path) -> Result<Value, PipelineError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    if extension.eq_ignore_ascii_case("json") {
        return read_json_document(path);
    }
    if SCRIPT_EXTENSIONS.contains(&extension) {
        return ModuleGraph::new().catalog_document(path);
    }

    Err(PipelineError::load(
        path,
        format!(
            "unsupported catalog format `.{}` (expected .json or one of .{})",
            extension,
            SCRIPT_EXTENSIONS.join(", .")
        ),
    ))
}
