//! CLI entry point for the engawa dimensionality-reduction pipeline.
//!
//! Parses command-line arguments with clap, initializes logging from the
//! verbosity flags, and runs the embedding pipeline. All failures are
//! reported through `tracing` and the process still exits with status
//! zero; wrapper scripts watch the logs and the output files, not the
//! exit status.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, field, info};

use engawa_cli::{
    cli::{Cli, CliError, run_cli},
    logging::{LogOptions, LoggingError, init_logging},
};

fn try_main(cli: Cli) -> Result<()> {
    run_cli(cli).context("failed to execute command")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = LogOptions {
        verbose: cli.verbose,
        debug: cli.debug,
        benchmark: cli.benchmark,
    };
    if let Err(err) = init_logging(options) {
        report_logging_init_error(&err);
        return ExitCode::SUCCESS;
    }
    if options.debug {
        info!("debug messages enabled");
    }
    if options.benchmark {
        info!("benchmarking enabled");
    }

    if let Err(err) = try_main(cli) {
        let code_field = err
            .downcast_ref::<CliError>()
            .map(|cli_error| field::display(cli_error.code()));
        error!(error = %err, code = code_field, "command execution failed");
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
