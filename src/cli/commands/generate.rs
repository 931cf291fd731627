//! Generate command - Write one JSON dictionary per locale.
//!
//! Settings are resolved in this order, first match wins:
//! command-line flag, environment variable, `.locgenrc.json`, built-in default.
//! Paths from flags and environment are relative to the current directory;
//! paths from a config file, including its defaults, are relative to the
//! directory holding that file.

use std::{
    env,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, GenerateSummary};
use crate::{
    cli::args::GenerateArgs,
    config::{Config, ConfigLoadResult, load_config},
    core::{LocaleId, PipelineOptions, generate_from_file},
};

/// Fully resolved settings of a generation run.
#[derive(Debug)]
pub struct GenerateSettings {
    pub input: PathBuf,
    pub options: PipelineOptions,
    pub config_path: Option<PathBuf>,
}

pub fn generate(args: GenerateArgs) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    let config = load_config(&cwd)?;
    let settings = resolve_settings(&args, config, &cwd)?;

    tracing::debug!(
        input = %settings.input.display(),
        output = %settings.options.output_dir.display(),
        work_dir = %settings.options.work_dir.display(),
        "starting translation processing"
    );
    let outcome = generate_from_file(&settings.input, &settings.options);

    Ok(CommandResult {
        summary: CommandSummary::Generate(GenerateSummary {
            input: settings.input,
            output_dir: settings.options.output_dir,
            work_dir: settings.options.work_dir,
            config_path: settings.config_path,
            outcome,
        }),
    })
}

/// Merge command-line/environment arguments over the loaded configuration.
pub fn resolve_settings(
    args: &GenerateArgs,
    loaded: ConfigLoadResult,
    cwd: &Path,
) -> Result<GenerateSettings> {
    let ConfigLoadResult { config, path } = loaded;
    let Config {
        input,
        output_dir,
        temp_dir,
        default_locale,
        missing_value,
    } = config;
    let config_dir = path.as_deref().and_then(Path::parent).unwrap_or(Path::new(""));

    let default_locale = non_empty(args.default_locale.clone()).unwrap_or(default_locale);
    if default_locale.trim().is_empty() {
        bail!("Invalid default locale: must not be empty");
    }

    let mut options = PipelineOptions::new(
        non_empty_path(args.output.clone()).unwrap_or_else(|| config_dir.join(output_dir)),
        non_empty_path(args.temp_dir.clone()).unwrap_or_else(|| config_dir.join(temp_dir)),
    );
    options.default_locale = LocaleId::new(default_locale);
    options.missing_value = args.missing_value.unwrap_or(missing_value);

    let settings = GenerateSettings {
        input: non_empty_path(args.input.clone()).unwrap_or_else(|| config_dir.join(input)),
        options,
        config_path: path,
    };
    check_work_dir(&settings, cwd)?;
    Ok(settings)
}

/// The work directory must not hold the output directory or the input.
fn check_work_dir(settings: &GenerateSettings, cwd: &Path) -> Result<()> {
    let work_dir = normalize(cwd, &settings.options.work_dir);
    let output_dir = normalize(cwd, &settings.options.output_dir);
    let input = normalize(cwd, &settings.input);

    if output_dir.starts_with(&work_dir) {
        bail!(
            "Invalid work directory {}: it contains the output directory {}",
            settings.options.work_dir.display(),
            settings.options.output_dir.display()
        );
    }
    if input.starts_with(&work_dir) {
        bail!(
            "Invalid work directory {}: it contains the input file {}",
            settings.options.work_dir.display(),
            settings.input.display()
        );
    }
    Ok(())
}

/// Absolute form of `path` with `.` and `..` folded, without touching the
/// filesystem.
fn normalize(cwd: &Path, path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in cwd.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

// An empty environment variable counts as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn non_empty_path(value: Option<PathBuf>) -> Option<PathBuf> {
    value.filter(|v| !v.as_os_str().is_empty())
}
