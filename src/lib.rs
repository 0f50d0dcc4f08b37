//! menutree - storefront navigation menu engine
//!
//! Turns the flat, parent-referencing node list a storefront backend serves
//! into a navigation forest, then annotates every node with its URL, its
//! ancestor path and whether it is the current page. The top-level item
//! containing the current page is reported for highlighting.
//!
//! ```
//! use menutree::{annotate, build, MenuEntry, NodeKind, UrlSuffixes};
//!
//! let entries = vec![
//!     MenuEntry::new("1", "Women", NodeKind::Category).with_slug("women"),
//!     MenuEntry::new("2", "Shoes", NodeKind::Category)
//!         .with_parent("1")
//!         .with_depth(1)
//!         .with_slug("shoes"),
//! ];
//!
//! let forest = build(&entries);
//! let menu = annotate(&forest, "/shoes.html", &UrlSuffixes::new(".html", ".html"));
//!
//! assert_eq!(menu.active_top_level_id.as_ref().map(|id| id.as_str()), Some("1"));
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{AnnotatedMenu, BuildDiagnostic, MenuEntry, MenuForest, TreeNode};
pub use domain::services::{annotate, build, node_url, PathAnnotator, TreeBuilder};
pub use domain::value_objects::{NodeId, NodeKind, UrlSuffixes};
pub use error::{MenuError, MenuResult};
pub use infrastructure::{JsonFileMenuSource, MenuPayload};
