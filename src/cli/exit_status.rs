use std::process::ExitCode;

use super::run::{CommandResult, ScanOutcome};

/// Exit status for a jois run.
///
/// - `Success` (0): Run completed (including "no icons" and "unused icons" reports)
/// - `Failure` (1): Unused icons were found and `--fail-on-unused` was given
/// - `Error` (2): Run failed (unreadable sprite, parse error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed.
    Success,
    /// Unused icons were found in fail-on-unused mode.
    Failure,
    /// Run failed due to an error.
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CommandResult) -> Self {
        match result.outcome {
            ScanOutcome::UnusedIcons(_) if result.fail_on_unused => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
