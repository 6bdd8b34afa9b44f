//! tle-builder - pg_tle installer generator
//!
//! Embeds the extension's SQL and version into `install-tle.sql.template`
//! and writes `install-tle.sql`, ready for `psql -f`.

pub mod composer;
pub mod config;
pub mod error;
pub mod loader;
pub mod markers;
pub mod pipeline;
pub mod verifier;
pub mod writer;

// Re-exports for convenience
pub use config::{BuildConfig, TLE_VERSION};
pub use error::{TleError, TleResult};
pub use pipeline::{build, BuildReport, Pipeline, Stage};
