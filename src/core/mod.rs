//! Core generation engine.
//!
//! Implements the linear pipeline that turns a translation catalog into
//! per-locale JSON files:
//!
//! 1. **Load**: read the catalog source into a validated [`Catalog`]
//! 2. **Project**: reduce the catalog to `{Key, Value}` entries per locale
//! 3. **Write**: serialize each projection to `<output>/<locale>.json`
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog data model (Catalog, MessageRecord, LocaleId)
//! - `loader`: Catalog loading from JSON documents and TypeScript modules
//! - `project`: Locale projection and default-locale fallback
//! - `writer`: Locale file serialization
//! - `workdir`: Scoped transient work directory
//! - `pipeline`: Entry points tying the phases together

pub mod catalog;
pub mod loader;
pub mod pipeline;
pub mod project;
pub mod workdir;
pub mod writer;

pub use catalog::{Catalog, CatalogError, LocaleId, MessageRecord};
pub use loader::load_catalog;
pub use pipeline::{
    GeneratedLocale, PipelineOptions, PipelineSummary, generate, generate_from_file,
};
pub use project::{DEFAULT_LOCALE, LocaleEntry, LocalePlan, project, resolve_locales};
pub use workdir::WorkDir;
pub use writer::{LocaleWriter, MissingValue};
