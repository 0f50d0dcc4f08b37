//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MenuError, MenuResult};

use super::types::Config;

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "menutree.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Keys each table accepts; the empty name is the document root.
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("", &["urls", "menu"]),
    ("urls", &["category_suffix", "product_suffix"]),
    ("menu", &["identifier", "max_levels"]),
];

/// Load configuration and collect warnings for keys menutree does not know.
pub fn load_with_warnings(path: &Path) -> MenuResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut ignored = Vec::new();
    let config: Config =
        serde_ignored::deserialize(toml::de::Deserializer::new(&content), |key| {
            ignored.push(key.to_string())
        })
        .map_err(|e| MenuError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = ignored
        .iter()
        .map(|dotted| {
            let (table, key) = dotted.rsplit_once('.').unwrap_or(("", dotted.as_str()));
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: key_line(&content, key),
                suggestion: suggest_key(table, key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    // Try project config first
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            if let Ok(config) = Config::load(&project_config) {
                debug!(path = %project_config.display(), "loaded project config");
                return with_env_overrides(config);
            }
        }
    }

    // Try user config
    if let Some(user_config_dir) = user_config_dir() {
        let user_config = user_config_dir.join("menutree/config.toml");
        if user_config.exists() {
            if let Ok(config) = Config::load(&user_config) {
                debug!(path = %user_config.display(), "loaded user config");
                return with_env_overrides(config);
            }
        }
    }

    // Return defaults with env overrides
    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (MENUTREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable lookup.
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // MENUTREE_CATEGORY_URL_SUFFIX
    if let Some(suffix) = lookup("MENUTREE_CATEGORY_URL_SUFFIX") {
        config.urls.category_suffix = suffix;
    }

    // MENUTREE_PRODUCT_URL_SUFFIX
    if let Some(suffix) = lookup("MENUTREE_PRODUCT_URL_SUFFIX") {
        config.urls.product_suffix = suffix;
    }

    // MENUTREE_MENU_IDENTIFIER (empty clears it)
    if let Some(identifier) = lookup("MENUTREE_MENU_IDENTIFIER") {
        let identifier = identifier.trim().to_string();
        config.menu.identifier = (!identifier.is_empty()).then_some(identifier);
    }

    // MENUTREE_MAX_LEVELS ("0", "none" or "unlimited" clear the cap)
    if let Some(levels) = lookup("MENUTREE_MAX_LEVELS") {
        match levels.trim().to_lowercase().as_str() {
            "" | "0" | "none" | "unlimited" => config.menu.max_levels = None,
            other => {
                if let Ok(n) = other.parse::<usize>() {
                    config.menu.max_levels = Some(n);
                }
            }
        }
    }

    config
}

/// XDG config directory, falling back to the platform default
fn user_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// 1-based line where `key` is assigned or opened as a table.
fn key_line(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim_start().trim_start_matches('[');
            line.strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with(['=', ']']))
        })
        .map(|index| index + 1)
}

/// Closest known key of the same table, within two edits.
fn suggest_key(table: &str, key: &str) -> Option<String> {
    let (_, candidates) = KNOWN_KEYS.iter().find(|(name, _)| *name == table)?;
    candidates
        .iter()
        .map(|candidate| (edit_distance(key, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 2)
        .min()
        .map(|(_, candidate)| candidate.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ca != cb));
            diagonal = above;
        }
    }

    row[b.len()]
}
