//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all locgen commands.
//! It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `generate`: Generate locale JSON files from the translation catalog (default)
//! - `init`: Initialize locgen configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{INPUT_ENV, OUTPUT_ENV};
use crate::core::MissingValue;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Arguments of `generate`, which runs when no subcommand is given.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

impl Arguments {
    /// The command to run, defaulting to `generate`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Generate(self.generate))
    }

    /// Get the verbose flag of the command that will run.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(args)) => args.verbose,
            Some(Command::Init) => false,
            None => self.generate.verbose,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Translation catalog to read (.ts, .js or .json) [default: src/translations/index.ts]
    #[arg(short, long, env = INPUT_ENV)]
    pub input: Option<PathBuf>,

    /// Directory receiving one <locale>.json per locale [default: public/locales]
    #[arg(short, long, env = OUTPUT_ENV)]
    pub output: Option<PathBuf>,

    /// Transient work directory, removed after every run [default: .temp]
    #[arg(long)]
    pub temp_dir: Option<PathBuf>,

    /// Locale generated when the catalog declares none [default: en-us]
    #[arg(long)]
    pub default_locale: Option<String>,

    /// How entries without a translation are written [default: null]
    #[arg(long, value_enum)]
    pub missing_value: Option<MissingValue>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate locale JSON files from the translation catalog
    Generate(GenerateArgs),
    /// Initialize a new .locgenrc.json configuration file
    Init,
}
