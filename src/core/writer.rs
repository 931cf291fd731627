//! Locale file serialization.
//!
//! Each locale is written to `<output>/<locale>.json`. A locale id may
//! contain `/` to place its file in a subdirectory; ids that would leave the
//! output directory are rejected.

use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::catalog::LocaleId;
use super::project::LocaleEntry;
use crate::error::PipelineError;

/// How an entry without a translation is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MissingValue {
    /// `{"Key": "X", "Value": null}`
    #[default]
    Null,
    /// `{"Key": "X"}`
    Omit,
    /// `{"Key": "X", "Value": ""}`
    Empty,
}

/// Writes locale files into an output directory.
///
/// When a staging directory is set, each file is serialized there first and
/// then moved into the output directory.
pub struct LocaleWriter<'a> {
    output_dir: &'a Path,
    staging_dir: Option<&'a Path>,
    missing_value: MissingValue,
}

impl<'a> LocaleWriter<'a> {
    pub fn new(output_dir: &'a Path, missing_value: MissingValue) -> Self {
        Self {
            output_dir,
            staging_dir: None,
            missing_value,
        }
    }

    pub fn with_staging_dir(mut self, staging_dir: &'a Path) -> Self {
        self.staging_dir = Some(staging_dir);
        self
    }

    /// Create the output directory if it does not exist yet.
    pub fn ensure_output_dir(&self) -> Result<(), PipelineError> {
        fs::create_dir_all(self.output_dir).map_err(|e| PipelineError::write(self.output_dir, e))
    }

    /// Path of the file written for `locale`.
    pub fn file_path(&self, locale: &LocaleId) -> PathBuf {
        self.output_dir.join(file_name(locale))
    }

    /// Serialize `entries` to `<output_dir>/<locale>.json`, replacing any
    /// existing file.
    pub fn write(&self, locale: &LocaleId, entries: &[LocaleEntry]) -> Result<PathBuf, PipelineError> {
        self.ensure_output_dir()?;

        let content = render(entries, self.missing_value);
        let target = self.file_path(locale);
        if !stays_inside(&file_name(locale)) {
            return Err(PipelineError::write(
                &target,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("locale id `{}` escapes the output directory", locale),
                ),
            ));
        }
        create_parent(&target)?;

        match self.staging_dir {
            Some(staging_dir) => {
                let staged = staging_dir.join(file_name(locale));
                create_parent(&staged)?;
                fs::write(&staged, content).map_err(|e| PipelineError::write(&staged, e))?;
                move_into_place(&staged, &target).map_err(|e| PipelineError::write(&target, e))?;
            }
            None => {
                fs::write(&target, content).map_err(|e| PipelineError::write(&target, e))?;
            }
        }

        Ok(target)
    }
}

fn file_name(locale: &LocaleId) -> String {
    format!("{}.json", locale)
}

/// Whether a relative file name stays below the directory it is joined to.
fn stays_inside(name: &str) -> bool {
    Path::new(name)
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

fn create_parent(path: &Path) -> Result<(), PipelineError> {
    match path.parent() {
        Some(parent) => fs::create_dir_all(parent).map_err(|e| PipelineError::write(parent, e)),
        None => Ok(()),
    }
}

/// Render entries as a 2-space indented JSON array with a trailing newline.
pub fn render(entries: &[LocaleEntry], missing_value: MissingValue) -> String {
    let array = Value::Array(
        entries
            .iter()
            .map(|entry| entry_to_value(entry, missing_value))
            .collect(),
    );
    // Serializing a `Value` cannot fail.
    let content = serde_json::to_string_pretty(&array).unwrap_or_default();
    format!("{}\n", content)
}

fn entry_to_value(entry: &LocaleEntry, missing_value: MissingValue) -> Value {
    let mut object = Map::new();
    object.insert("Key".to_string(), Value::String(entry.key.clone()));

    let value = match (&entry.value, missing_value) {
        (Some(text), _) => Some(Value::String(text.clone())),
        (None, MissingValue::Null) => Some(Value::Null),
        (None, MissingValue::Empty) => Some(Value::String(String::new())),
        (None, MissingValue::Omit) => None,
    };
    if let Some(value) = value {
        object.insert("Value".to_string(), value);
    }

    Value::Object(object)
}

/// Rename `from` to `to`, copying when they live on different filesystems.
fn move_into_place(from: &Path, to: &Path) -> io::Result<()> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    fs::copy(from, to)?;
    fs::remove_file(from)
}
