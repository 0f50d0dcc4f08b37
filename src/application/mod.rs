//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RenderUseCase` - Load entries, build the forest, annotate for a location

pub mod render;

pub use render::{RenderOptions, RenderResult, RenderUseCase};
