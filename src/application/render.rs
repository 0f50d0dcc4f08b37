//! Render Use Case
//!
//! Orchestrates the render flow:
//! 1. Load flat entries from a menu source
//! 2. Build the forest
//! 3. Annotate it for the current location

use tracing::info;

use crate::config::Config;
use crate::domain::entities::{AnnotatedMenu, BuildDiagnostic};
use crate::domain::ports::MenuSource;
use crate::domain::services::{PathAnnotator, TreeBuilder};
use crate::domain::value_objects::UrlSuffixes;
use crate::error::MenuResult;

/// Options for the render operation
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Current page path
    pub location: String,
    /// Menu to pick from the source (default menu when `None`)
    pub identifier: Option<String>,
    pub suffixes: UrlSuffixes,
    pub max_levels: Option<usize>,
}

impl RenderOptions {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    /// Take suffixes, menu identifier and depth cap from configuration.
    pub fn from_config(config: &Config, location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            identifier: config.menu.identifier.clone(),
            suffixes: config.urls.clone(),
            max_levels: config.menu.max_levels.filter(|&levels| levels > 0),
        }
    }

    pub fn with_identifier(mut self, identifier: Option<String>) -> Self {
        if identifier.is_some() {
            self.identifier = identifier;
        }
        self
    }

    pub fn with_suffixes(mut self, suffixes: UrlSuffixes) -> Self {
        self.suffixes = suffixes;
        self
    }

    /// Override the level cap when given; `0` removes it.
    pub fn with_max_levels(mut self, max_levels: Option<usize>) -> Self {
        if let Some(levels) = max_levels {
            self.max_levels = (levels > 0).then_some(levels);
        }
        self
    }
}

/// Result of the render operation
#[derive(Debug, Clone, Default)]
pub struct RenderResult {
    pub menu: AnnotatedMenu,
    pub diagnostics: Vec<BuildDiagnostic>,
    /// Entries received from the source
    pub entry_count: usize,
}

/// Render use case
pub struct RenderUseCase<S: MenuSource> {
    source: S,
}

impl<S: MenuSource> RenderUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn execute(&self, options: &RenderOptions) -> MenuResult<RenderResult> {
        let entries = self.source.load_entries(options.identifier.as_deref())?;
        let forest = TreeBuilder::new().build(&entries);
        let menu = PathAnnotator::new(&options.location, &options.suffixes)
            .with_max_levels(options.max_levels)
            .annotate(&forest);

        info!(
            entries = entries.len(),
            nodes = menu.node_count(),
            location = %options.location,
            "rendered menu"
        );

        Ok(RenderResult {
            menu,
            diagnostics: forest.diagnostics().to_vec(),
            entry_count: entries.len(),
        })
    }

    /// Build only, returning the wiring diagnostics.
    pub fn check(&self, identifier: Option<&str>) -> MenuResult<Vec<BuildDiagnostic>> {
        let entries = self.source.load_entries(identifier)?;
        Ok(TreeBuilder::new().build(&entries).diagnostics().to_vec())
    }
}
