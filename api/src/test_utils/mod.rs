//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Mocks are hand-written in-memory types rather than mockall so each test
//! controls exactly what a repository returns.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
