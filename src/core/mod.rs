//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `sprite`: Declared icon identifiers from the SVG sprite
//! - `file_scanner`: Candidate source file discovery
//! - `parsers`: JSX/TSX parsing with swc
//! - `collect`: Icon usage collection over the AST
//! - `unused`: Declared minus used
//! - `context`: Per-run context tying the above together

pub mod collect;
pub mod context;
pub mod file_scanner;
pub mod parsers;
pub mod sprite;
pub mod unused;

pub use context::ScanContext;
pub use unused::find_unused_icons;
