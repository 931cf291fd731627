use std::process::ExitCode;

use clap::Parser;
use locgen::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    // `.env` values back the `env`-enabled arguments; a missing file is fine.
    let _ = dotenvy::dotenv();
    let args = Arguments::parse();
    locgen::cli::init_tracing(args.verbose());

    match locgen::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
