//! Test utilities
//!
//! Shared fixtures for unit and router-level tests.

pub mod fixtures;

pub use fixtures::*;
