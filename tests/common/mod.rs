//! Common test utilities for tle-build CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run the binary
//! - Fixtures: Reusable template and SQL content

#![allow(dead_code)]


pub use env::*;
pub use fixtures::*;
