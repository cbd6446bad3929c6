//! versync - Minimum-version sync checker CLI
//!
//! Cross-checks the minimum supported versions declared in:
//! - CI environment descriptors (ci/deps/*.yaml and root-level *.yml)
//! - pyproject.toml (project.optional-dependencies)
//! - the in-code compatibility table
//!
//! Meant to run as a pre-commit or CI gate: exits 0 when every compared
//! descriptor agrees with the other two sources, 1 otherwise.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use versync::checker::Checker;
use versync::cli::CliArgs;
use versync::output::{create_formatter, OutputConfig};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("versync v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Project root: {}", args.path.display());
    }

    let outcome = Checker::new(args.clone()).run()?;

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&outcome, &mut stdout)?;
    stdout.flush()?;

    if outcome.has_differences() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
