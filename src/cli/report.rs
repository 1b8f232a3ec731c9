//! Report printing.
//!
//! Separate from core logic to allow jois to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::run::{CommandResult, ScanOutcome};

pub const NO_SPRITE_ICONS: &str = "No sprite icons found!";
pub const NO_UNUSED_ICONS: &str = "No unused icons found!";
pub const UNUSED_ICONS_HEADER: &str = "Unused icons found:";

/// Print the run outcome to stdout and, in verbose mode, a summary to stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    report_to(result, &mut io::stdout().lock());

    if verbose {
        print_summary_to(result, &mut io::stderr().lock());
    }
}

/// Print the run outcome to a custom writer.
pub fn report_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.outcome {
        ScanOutcome::NoSpriteIcons => {
            let _ = writeln!(writer, "{}", NO_SPRITE_ICONS.yellow());
        }
        ScanOutcome::AllIconsUsed => {
            let _ = writeln!(writer, "{}", NO_UNUSED_ICONS.green());
        }
        ScanOutcome::UnusedIcons(unused) => {
            let _ = writeln!(writer, "{}", UNUSED_ICONS_HEADER.bold().yellow());
            for id in unused {
                let _ = writeln!(writer, "- {}", id);
            }
        }
    }
}

fn print_summary_to<W: Write>(result: &CommandResult, writer: &mut W) {
    let unused_count = match &result.outcome {
        ScanOutcome::UnusedIcons(unused) => unused.len(),
        _ => 0,
    };

    let _ = writeln!(
        writer,
        "Note: Checked {} source {}, {} of {} declared icon(s) unused",
        result.source_files_checked,
        if result.source_files_checked == 1 {
            "file"
        } else {
            "files"
        },
        unused_count,
        result.declared_count
    );
}
