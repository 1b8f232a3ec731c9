//! jois - unused sprite icon finder
//!
//! jois is a CLI tool and library for React projects that keep their icons in
//! a single SVG sprite and render them through an `<Icon id="..." />`
//! component. It reports the sprite symbols that no source file references.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run, report)
//! - `config`: Configuration file loading and parsing
//! - `core`: Sprite parsing, file scanning and icon usage collection

pub mod cli;
pub mod config;
pub mod core;
