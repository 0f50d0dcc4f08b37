//! Output Rendering
//!
//! Formats annotated menus and diagnostics for the CLI.

use std::path::Path;

use crate::config::ConfigWarning;
use crate::domain::entities::{AnnotatedMenu, BuildDiagnostic};
use crate::error::MenuResult;

use super::outline::render_outline;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable outline
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Render an annotated menu in the requested format.
pub fn render_menu(menu: &AnnotatedMenu, format: OutputFormat) -> MenuResult<String> {
    match format {
        OutputFormat::Text => Ok(render_outline(menu)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(menu)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// One line per diagnostic, prefixed with a warning marker.
pub fn render_diagnostics(diagnostics: &[BuildDiagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("⚠ {}\n", d))
        .collect()
}

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
