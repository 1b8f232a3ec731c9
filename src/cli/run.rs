//! Main entry point for a jois run.
//!
//! Reads the sprite, scans the project and computes which declared icons
//! are never referenced.
//!
//! # Returns
//! - `Ok(CommandResult)` with the outcome of the scan
//! - `Err` if the sprite or a source file cannot be read or parsed

use anyhow::Result;

use super::args::Arguments;
use crate::core::{ScanContext, find_unused_icons};

#[derive(Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The sprite declares no symbols; no source file was scanned.
    NoSpriteIcons,
    /// Every declared icon is referenced somewhere.
    AllIconsUsed,
    /// Declared icons with no reference, in sprite order.
    UnusedIcons(Vec<String>),
}

/// Result of a jois run.
#[derive(Debug)]
pub struct CommandResult {
    pub outcome: ScanOutcome,
    /// Number of icons declared in the sprite.
    pub declared_count: usize,
    /// Number of source files that were parsed.
    pub source_files_checked: usize,
    /// If true, unused icons should produce a failing exit status.
    pub fail_on_unused: bool,
}

pub fn run(args: &Arguments) -> Result<CommandResult> {
    let ctx = ScanContext::new(args)?;

    let declared = ctx.declared_icons()?;
    if declared.is_empty() {
        return Ok(CommandResult {
            outcome: ScanOutcome::NoSpriteIcons,
            declared_count: 0,
            source_files_checked: 0,
            fail_on_unused: args.fail_on_unused,
        });
    }

    let scan_result = ctx.source_files();
    let used = ctx.used_icons(&scan_result.files)?;
    let unused = find_unused_icons(&declared, &used);

    let outcome = if unused.is_empty() {
        ScanOutcome::AllIconsUsed
    } else {
        ScanOutcome::UnusedIcons(unused)
    };

    Ok(CommandResult {
        outcome,
        declared_count: declared.len(),
        source_files_checked: scan_result.files.len(),
        fail_on_unused: args.fail_on_unused,
    })
}
