//! Common test utilities for atlantis-yaml integration tests.
//!
//! This module provides:
//! - `TestRepo`: Isolated repo checkout in a temp directory
//! - Fixtures: Reusable atlantis.yaml content constants

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
