//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MenuResult;

use super::loader::{self, ConfigWarning};

// URL suffixes live in the domain layer; the `[urls]` table maps onto them directly
pub use crate::domain::value_objects::UrlSuffixes;

/// Menu selection and shaping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MenuConfig {
    /// Which menu to pick from a multi-menu payload (first menu when unset)
    #[serde(default)]
    pub identifier: Option<String>,

    /// Maximum number of levels to render (unlimited when unset)
    #[serde(default)]
    pub max_levels: Option<usize>,
}

/// Main configuration structure
///
/// ```toml
/// [urls]
/// category_suffix = ".html"
/// product_suffix = ".html"
///
/// [menu]
/// identifier = "main"
/// max_levels = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub urls: UrlSuffixes,

    #[serde(default)]
    pub menu: MenuConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (MENUTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
