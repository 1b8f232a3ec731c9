use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result};
use colored::Colorize;
use rayon::prelude::*;
use swc_common::SourceMap;

use crate::{
    cli::args::Arguments,
    config::{Config, load_config},
    core::{
        collect::IconUsageCollector,
        file_scanner::{ScanResult, scan_files},
        parsers::jsx::parse_source,
        sprite::parse_sprite_ids,
    },
};

/// Per-run analysis context.
///
/// Holds the merged configuration and the project root. Configuration
/// priority (highest to lowest):
/// 1. CLI arguments (e.g. `--svg-path`)
/// 2. `.joisrc.json` config file
/// 3. Built-in defaults
pub struct ScanContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory. Sprite and glob patterns are relative to it.
    pub root_dir: PathBuf,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,
}

impl ScanContext {
    /// Create a new `ScanContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is unreadable or invalid, or if a
    /// glob pattern given on the command line is invalid.
    pub fn new(args: &Arguments) -> Result<Self> {
        let verbose = args.verbose;
        let root_dir = args
            .project_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;

        if verbose {
            match &config_result.source {
                Some(path) => eprintln!("Note: Using configuration from {}", path.display()),
                None => eprintln!("Note: No .joisrc.json found, using default configuration"),
            }
        }

        let mut config = config_result.config;

        if let Some(svg_path) = &args.svg_path {
            config.sprite_path = svg_path.to_string_lossy().to_string();
        }

        config.includes.extend(args.patterns.iter().cloned());
        config.validate()?;

        Ok(Self::from_config(root_dir, config, verbose))
    }

    pub fn from_config(root_dir: PathBuf, config: Config, verbose: bool) -> Self {
        Self {
            config,
            root_dir,
            verbose,
        }
    }

    /// Location of the sprite, resolved against the project root.
    pub fn sprite_path(&self) -> PathBuf {
        self.root_dir.join(&self.config.sprite_path)
    }

    /// Read the sprite and return the icon identifiers it declares.
    pub fn declared_icons(&self) -> Result<Vec<String>> {
        let sprite_path = self.sprite_path();
        let markup = fs::read_to_string(&sprite_path)
            .with_context(|| format!("Failed to read sprite file: {}", sprite_path.display()))?;
        let ids = parse_sprite_ids(&markup)
            .with_context(|| format!("Failed to parse sprite file: {}", sprite_path.display()))?;

        if self.verbose {
            eprintln!(
                "Note: {} icon(s) declared in {}",
                ids.len(),
                sprite_path.display()
            );
        }

        Ok(ids)
    }

    /// Enumerate candidate source files under the project root.
    pub fn source_files(&self) -> ScanResult {
        let scan_result = scan_files(
            &self.root_dir,
            &self.config.includes,
            &self.config.ignores,
            self.verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!("{}", access_warning(scan_result.skipped_count, self.verbose));
        }

        scan_result
    }

    /// Parse every file and union the icon identifiers they reference.
    ///
    /// Files are read and parsed in parallel. The first unreadable or
    /// unparsable file aborts the run.
    pub fn used_icons(&self, files: &[PathBuf]) -> Result<HashSet<String>> {
        let per_file = files
            .par_iter()
            .map(|file_path| self.file_icons(file_path))
            .collect::<Result<Vec<_>>>()?;

        Ok(per_file.into_iter().flatten().collect())
    }

    fn file_icons(&self, file_path: &Path) -> Result<HashSet<String>> {
        let code = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read source file: {}", file_path.display()))?;

        let source_map = Arc::new(SourceMap::default());
        let module =
            parse_source(code, file_path, source_map).context("Failed to parse source file")?;

        let ids = IconUsageCollector::new(&self.config.component_name, &self.config.id_attribute)
            .collect(&module);

        if self.verbose {
            eprintln!(
                "Note: {} - {} icon reference(s)",
                file_path.display(),
                ids.len()
            );
        }

        Ok(ids)
    }
}

fn access_warning(skipped_count: usize, verbose: bool) -> String {
    format!(
        "{} {} path(s) skipped due to access errors{}",
        "warning:".bold().yellow(),
        skipped_count,
        if verbose { "" } else { " (use -v for details)" }
    )
}
