//! Terminal output for the `tle-build` binary

pub mod error;
