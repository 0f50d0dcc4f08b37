//! Domain Services
//!
//! Pure transformations over menu data. No I/O, no shared state.

mod path_annotator;
mod tree_builder;
mod url_resolver;

pub use path_annotator::{annotate, PathAnnotator, MAX_DEPTH};
pub use tree_builder::{build, TreeBuilder};
pub use url_resolver::node_url;
