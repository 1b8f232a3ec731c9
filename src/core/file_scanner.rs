use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Directories that are never descended into.
pub const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

/// Result of scanning files.
pub struct ScanResult {
    /// Matched source files, sorted.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Find candidate source files under `base_dir`.
///
/// A file is kept if it is a `.jsx`/`.tsx` file or its path relative to
/// `base_dir` matches one of `includes`, and it matches none of `ignores`.
pub fn scan_files(
    base_dir: &Path,
    includes: &[String],
    ignores: &[String],
    verbose: bool,
) -> ScanResult {
    let include_patterns = compile_patterns(includes, verbose);
    let ignore_patterns = compile_patterns(ignores, verbose);

    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(base_dir)
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(base_dir).unwrap_or(path);

        if ignore_patterns.iter().any(|p| p.matches_path(relative)) {
            continue;
        }

        if is_default_source_file(path) || include_patterns.iter().any(|p| p.matches_path(relative))
        {
            files.push(path.to_path_buf());
        }
    }

    files.sort();

    ScanResult {
        files,
        skipped_count,
    }
}

fn compile_patterns(patterns: &[String], verbose: bool) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid glob pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
                None
            }
        })
        .collect()
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

fn is_default_source_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "jsx")
    )
}
