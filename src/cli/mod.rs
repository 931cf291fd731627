//! Command-line interface layer.
//!
//! ## Module Structure
//!
//! - `args`: clap argument definitions
//! - `commands`: Command implementations (generate, init)
//! - `exit_status`: Process exit codes
//! - `report`: Colored terminal output

use std::io::{self, IsTerminal};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod args;
pub mod commands;
mod exit_status;
pub mod report;

pub use args::{Arguments, Command, GenerateArgs};
pub use exit_status::ExitStatus;

/// Environment variable holding a tracing filter directive (e.g. `locgen=debug`).
pub const LOG_ENV: &str = "LOCGEN_LOG";

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let result = match args.into_command() {
        Command::Generate(args) => commands::generate::generate(args)?,
        Command::Init => commands::init::init()?,
    };
    report::print(&result, verbose);

    Ok(result.exit_status())
}

/// Install the stderr diagnostics subscriber.
///
/// `LOCGEN_LOG` takes precedence; otherwise warnings are shown, or debug
/// output with `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));
    let ansi = io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .try_init();
}
