use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_LOCALE, MissingValue};

pub const CONFIG_FILE_NAME: &str = ".locgenrc.json";

/// Environment variable overriding `input`.
pub const INPUT_ENV: &str = "TRANSLATIONS_INPUT_FILE";

/// Environment variable overriding `outputDir`.
pub const OUTPUT_ENV: &str = "LOCALES_OUTPUT_DIRECTORY";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_input")]
    pub input: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_temp_dir")]
    pub temp_dir: String,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default)]
    pub missing_value: MissingValue,
}

fn default_input() -> String {
    "src/translations/index.ts".to_string()
}

fn default_output_dir() -> String {
    "public/locales".to_string()
}

fn default_temp_dir() -> String {
    ".temp".to_string()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output_dir: default_output_dir(),
            temp_dir: default_temp_dir(),
            default_locale: default_locale(),
            missing_value: MissingValue::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.default_locale.trim().is_empty() {
            bail!("Invalid 'defaultLocale': must not be empty");
        }
        if self.input.trim().is_empty() {
            bail!("Invalid 'input': must not be empty");
        }
        if self.output_dir.trim().is_empty() {
            bail!("Invalid 'outputDir': must not be empty");
        }
        if self.temp_dir.trim().is_empty() {
            bail!("Invalid 'tempDir': must not be empty");
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the file the config was read from, None when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
