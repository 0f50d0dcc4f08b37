//! Domain Layer
//!
//! The menu engine - pure transformations without I/O.
//!
//! ## Structure
//!
//! - `entities/` - MenuEntry, MenuForest, TreeNode, AnnotatedMenu
//! - `value_objects/` - NodeId, NodeKind, UrlSuffixes
//! - `services/` - TreeBuilder, PathAnnotator, URL derivation
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Every call builds fresh output and never mutates its input
//! 3. **Ports & Adapters** - Loading menus goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
