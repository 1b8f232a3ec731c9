//! CLI argument definitions using clap.
//!
//! jois has a single flat command: scan a project and list the sprite icons
//! that no `<Icon id=... />` references.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project root path (default: current working directory)
    #[arg(short = 'p', long, env = "JOIS_PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Sprite SVG path, relative to the project root (default: public/sprite.svg)
    #[arg(short = 's', long)]
    pub svg_path: Option<PathBuf>,

    /// Extra glob patterns of files to scan besides *.jsx and *.tsx
    pub patterns: Vec<String>,

    /// Exit with status 1 when unused icons are found
    #[arg(long)]
    pub fail_on_unused: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
