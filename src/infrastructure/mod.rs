//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Menu payload loading (JSON snapshots)

pub mod repositories;

// Re-export for convenience
pub use repositories::{JsonFileMenuSource, MenuDocument, MenuPayload};
