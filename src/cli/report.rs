//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow locgen to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, GenerateSummary, InitSummary};
use crate::core::PipelineSummary;
use crate::error::PipelineError;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate_to(
            summary,
            verbose,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        ),
        CommandSummary::Init(summary) => print_init_to(summary, &mut io::stdout().lock()),
    }
}

/// Print the outcome of a generation run.
///
/// Progress goes to `out`, the failure message to `err`.
pub fn print_generate_to<O: Write, E: Write>(
    summary: &GenerateSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    let _ = writeln!(out, "{} {}", "Input file:".bold(), summary.input.display());
    let _ = writeln!(
        out,
        "{} {}",
        "Output directory:".bold(),
        summary.output_dir.display()
    );
    if verbose {
        let _ = writeln!(
            out,
            "{} {}",
            "Work directory:".bold(),
            summary.work_dir.display()
        );
        if let Some(config_path) = &summary.config_path {
            let _ = writeln!(out, "{} {}", "Config file:".bold(), config_path.display());
        }
    }

    match &summary.outcome {
        Ok(pipeline) => print_pipeline_success(pipeline, out),
        Err(error) => print_pipeline_failure(error, err),
    }
}

fn print_pipeline_success<W: Write>(pipeline: &PipelineSummary, writer: &mut W) {
    for file in &pipeline.files {
        let _ = writeln!(
            writer,
            "{} Locale file generated: {} {}",
            SUCCESS_MARK.green(),
            file.path.display(),
            format!("({})", plural(file.entry_count, "key", "keys")).dimmed()
        );
    }

    let default_note = if pipeline.default_locale_substituted {
        " (no locales declared, used the default locale)"
    } else {
        ""
    };
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Generated {} from {}{}",
            plural(pipeline.files.len(), "locale file", "locale files"),
            plural(pipeline.record_count, "key", "keys"),
            default_note
        )
        .green()
    );
}

fn print_pipeline_failure<W: Write>(error: &PipelineError, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {}",
        FAILURE_MARK.red(),
        "Translation processing failed:".bold().red(),
        error
    );
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

// ============================================================
// Tests
// ============================================================
