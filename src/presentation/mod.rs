//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting (outline/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line definitions
//! - `outline` - Indented text outline of an annotated menu
//! - `output` - Format selection, diagnostics and config warnings

pub mod cli;
pub mod outline;
pub mod output;

pub use outline::render_outline;
pub use output::{render_diagnostics, render_menu, OutputFormat};
