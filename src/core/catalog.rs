//! Catalog data model.
//!
//! A [`Catalog`] is the validated, immutable input of the pipeline: an ordered
//! list of [`MessageRecord`]s plus the ordered set of declared locales.

use std::{
    collections::{BTreeMap, HashSet},
    fmt,
};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Property of a record holding its translation key.
pub const KEY_PROPERTY: &str = "key";

/// Opaque locale identifier such as `en-us` or `fr`.
///
/// No structural validation is applied; the id is used verbatim as the
/// output file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleId(String);

impl LocaleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LocaleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One translatable message: a key and its text per locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    pub key: String,
    pub values: BTreeMap<LocaleId, String>,
}

impl MessageRecord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            values: BTreeMap::new(),
        }
    }

    /// Builder-style helper used when assembling catalogs in code.
    pub fn with_value(mut self, locale: impl Into<LocaleId>, value: impl Into<String>) -> Self {
        self.values.insert(locale.into(), value.into());
        self
    }

    pub fn value(&self, locale: &LocaleId) -> Option<&str> {
        self.values.get(locale).map(String::as_str)
    }
}

/// Reasons a catalog document cannot become a [`Catalog`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog must be an object with `locales` and `translations`")]
    NotAnObject,
    #[error("catalog does not define `translations`")]
    MissingTranslations,
    #[error("`translations` must be an array of records")]
    TranslationsNotArray,
    #[error("record #{index} {reason}")]
    InvalidRecord { index: usize, reason: String },
    #[error("duplicate translation key `{0}`")]
    DuplicateKey(String),
}

/// Validated translation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    locales: Vec<LocaleId>,
    records: Vec<MessageRecord>,
}

impl Catalog {
    /// Build a catalog from declared locales and records.
    ///
    /// Repeated locales collapse to their first occurrence. Record keys must
    /// be unique.
    pub fn new(
        locales: impl IntoIterator<Item = LocaleId>,
        records: Vec<MessageRecord>,
    ) -> Result<Self, CatalogError> {
        {
            let mut seen_keys = HashSet::new();
            for record in &records {
                if !seen_keys.insert(record.key.as_str()) {
                    return Err(CatalogError::DuplicateKey(record.key.clone()));
                }
            }
        }

        let mut seen_locales = HashSet::new();
        let locales = locales
            .into_iter()
            .filter(|locale| seen_locales.insert(locale.clone()))
            .collect();

        Ok(Self { locales, records })
    }

    /// Build a catalog from a `{ "locales": [..], "translations": [..] }`
    /// document.
    ///
    /// A missing or malformed `locales` value yields an empty declaration,
    /// which the projector later replaces with the default locale.
    pub fn from_value(document: &Value) -> Result<Self, CatalogError> {
        let Value::Object(fields) = document else {
            return Err(CatalogError::NotAnObject);
        };

        let translations = fields
            .get("translations")
            .ok_or(CatalogError::MissingTranslations)?;
        let Value::Array(items) = translations else {
            return Err(CatalogError::TranslationsNotArray);
        };

        let records = items
            .iter()
            .enumerate()
            .map(|(index, item)| record_from_value(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        let locales = fields.get("locales").map(locales_from_value).unwrap_or_default();

        Self::new(locales, records)
    }

    pub fn locales(&self) -> &[LocaleId] {
        &self.locales
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn record_from_value(index: usize, item: &Value) -> Result<MessageRecord, CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidRecord { index, reason };

    let Value::Object(fields) = item else {
        return Err(invalid("is not an object".to_string()));
    };

    let key = match fields.get(KEY_PROPERTY) {
        Some(Value::String(key)) => key.clone(),
        Some(_) => return Err(invalid("has a non-string `key`".to_string())),
        None => return Err(invalid("has no `key`".to_string())),
    };

    let mut record = MessageRecord::new(key);
    for (name, value) in fields {
        if name == KEY_PROPERTY {
            continue;
        }
        match value {
            Value::String(text) => {
                record.values.insert(LocaleId::new(name.as_str()), text.clone());
            }
            // Treated like a missing translation.
            Value::Null => {}
            _ => {
                return Err(invalid(format!(
                    "(`{}`) has a non-string value for locale `{}`",
                    record.key, name
                )));
            }
        }
    }

    Ok(record)
}

fn locales_from_value(value: &Value) -> Vec<LocaleId> {
    let Value::Array(items) = value else {
        tracing::debug!("`locales` is not an array, ignoring it");
        return Vec::new();
    };

    let locales: Option<Vec<LocaleId>> = items
        .iter()
        .map(|item| item.as_str().map(LocaleId::from))
        .collect();

    locales.unwrap_or_else(|| {
        tracing::debug!("`locales` contains non-string entries, ignoring it");
        Vec::new()
    })
}
