use std::process::ExitCode;

use anyhow::Result;

pub mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{CommandResult, ScanOutcome, run};

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let result = run(&args)?;
    report::print(&result, args.verbose);

    Ok(ExitStatus::from_result(&result).into())
}
