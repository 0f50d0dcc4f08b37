//! Domain Entities
//!
//! The flat backend record, the wired forest, and the annotated tree.

mod menu_entry;
mod menu_forest;
mod tree_node;

pub use menu_entry::MenuEntry;
pub(crate) use menu_forest::Slot;
pub use menu_forest::{BuildDiagnostic, ForestNode, MenuForest};
pub use tree_node::{AnnotatedMenu, Preorder, TreeNode};
