//! Locale projection.
//!
//! Reduces a catalog to the flat `{Key, Value}` shape consumed at runtime.

use serde::{Deserialize, Serialize};

use super::catalog::{LocaleId, MessageRecord};

/// Locale substituted when a catalog declares none.
pub const DEFAULT_LOCALE: &str = "en-us";

/// One element of a locale file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleEntry {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value", default)]
    pub value: Option<String>,
}

/// Locales a run will generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalePlan {
    pub locales: Vec<LocaleId>,
    /// True when the declaration was empty and `default` was used instead.
    pub substituted_default: bool,
}

/// Decide which locales to generate, falling back to `default` when the
/// catalog declares none.
pub fn resolve_locales(declared: &[LocaleId], default: &LocaleId) -> LocalePlan {
    if declared.is_empty() {
        tracing::warn!(
            default = %default,
            "locales array is empty or invalid, defaulting to [\"{}\"]",
            default
        );
        return LocalePlan {
            locales: vec![default.clone()],
            substituted_default: true,
        };
    }

    LocalePlan {
        locales: declared.to_vec(),
        substituted_default: false,
    }
}

/// Project every record onto `locale`, preserving record order.
///
/// Records without a value for `locale` yield an entry with `value: None`.
pub fn project(records: &[MessageRecord], locale: &LocaleId) -> Vec<LocaleEntry> {
    records
        .iter()
        .map(|record| LocaleEntry {
            key: record.key.clone(),
            value: record.value(locale).map(str::to_string),
        })
        .collect()
}
