//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod json_menu;

pub use json_menu::{JsonFileMenuSource, MenuDocument, MenuPayload};
