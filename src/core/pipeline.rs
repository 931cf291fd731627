//! Generation pipeline: load, project, write.

use std::path::{Path, PathBuf};

use super::catalog::{Catalog, LocaleId};
use super::loader::load_catalog;
use super::project::{DEFAULT_LOCALE, project, resolve_locales};
use super::workdir::WorkDir;
use super::writer::{LocaleWriter, MissingValue};
use crate::error::PipelineError;

/// Where and how a run writes its output.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub output_dir: PathBuf,
    /// Work root. Each run stages its files in a fresh directory inside it.
    pub work_dir: PathBuf,
    pub default_locale: LocaleId,
    pub missing_value: MissingValue,
}

impl PipelineOptions {
    pub fn new(output_dir: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            work_dir: work_dir.into(),
            default_locale: LocaleId::new(DEFAULT_LOCALE),
            missing_value: MissingValue::default(),
        }
    }
}

/// A locale file written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLocale {
    pub locale: LocaleId,
    pub path: PathBuf,
    pub entry_count: usize,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    pub files: Vec<GeneratedLocale>,
    pub record_count: usize,
    pub default_locale_substituted: bool,
}

/// Load the catalog at `input` and generate its locale files.
///
/// Nothing is created on disk when the catalog cannot be loaded.
pub fn generate_from_file(
    input: &Path,
    options: &PipelineOptions,
) -> Result<PipelineSummary, PipelineError> {
    let catalog = load_catalog(input)?;
    generate(&catalog, options)
}

/// Write one locale file per declared locale of `catalog`.
///
/// The first failure aborts the run; files written before it are kept.
pub fn generate(
    catalog: &Catalog,
    options: &PipelineOptions,
) -> Result<PipelineSummary, PipelineError> {
    let plan = resolve_locales(catalog.locales(), &options.default_locale);

    let work_dir = WorkDir::acquire(&options.work_dir)?;
    let writer = LocaleWriter::new(&options.output_dir, options.missing_value)
        .with_staging_dir(work_dir.path());

    let result = write_all(catalog, &plan.locales, &writer);
    if let Err(err) = &result {
        tracing::debug!(error = %err, "generation failed");
        work_dir.log_contents();
    }

    Ok(PipelineSummary {
        files: result?,
        record_count: catalog.records().len(),
        default_locale_substituted: plan.substituted_default,
    })
}

fn write_all(
    catalog: &Catalog,
    locales: &[LocaleId],
    writer: &LocaleWriter<'_>,
) -> Result<Vec<GeneratedLocale>, PipelineError> {
    writer.ensure_output_dir()?;

    let mut files = Vec::with_capacity(locales.len());
    for locale in locales {
        let entries = project(catalog.records(), locale);
        let path = writer.write(locale, &entries)?;
        tracing::info!(locale = %locale, path = %path.display(), "locale file generated");
        files.push(GeneratedLocale {
            locale: locale.clone(),
            path,
            entry_count: entries.len(),
        });
    }
    Ok(files)
}
