//! locgen - per-locale JSON dictionaries from a translation catalog
//!
//! locgen reads a translation catalog (a TypeScript module exporting
//! `locales` and `translations`, or the equivalent JSON document) and writes
//! one flat `[{ "Key": .., "Value": .. }]` JSON file per locale for a runtime
//! localization layer.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Generation pipeline (load, project, write)
//! - `error`: Pipeline error taxonomy
//!
//! ## Library use
//!
//! ```no_run
//! use locgen::core::{Catalog, LocaleId, MessageRecord, PipelineOptions, generate};
//!
//! let catalog = Catalog::new(
//!     [LocaleId::from("en-us"), LocaleId::from("fr")],
//!     vec![MessageRecord::new("HI").with_value("en-us", "Hi").with_value("fr", "Salut")],
//! )?;
//! let summary = generate(&catalog, &PipelineOptions::new("public/locales", ".temp"))?;
//! assert_eq!(summary.files.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
