//! Common test utilities for menutree integration tests.
//!
//! - `TestEnv`: isolated working directory and config home for CLI runs
//! - Fixtures: reusable menu payloads

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
