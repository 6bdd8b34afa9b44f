//! Build configuration
//!
//! The installer is always built from the same three files and the same
//! embedded version. They are collected here instead of being scattered
//! through the pipeline so tests can point a build at a temp directory
//! and inject a version.

use std::path::{Path, PathBuf};

/// Version stamped into the generated installer.
pub const TLE_VERSION: &str = "2.0.0";

/// Extension SQL, relative to the project root.
pub const DEFAULT_SOURCE_PATH: &str = "sql/metagration.sql";

/// Installer template, relative to the project root.
pub const DEFAULT_TEMPLATE_PATH: &str = "install-tle.sql.template";

/// Generated installer, relative to the project root.
pub const DEFAULT_OUTPUT_PATH: &str = "install-tle.sql";

/// Paths and version for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub source_path: PathBuf,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub version: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            version: TLE_VERSION.to_string(),
        }
    }
}

impl BuildConfig {
    /// Default layout resolved against `root`.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let defaults = Self::default();
        Self {
            source_path: root.join(defaults.source_path),
            template_path: root.join(defaults.template_path),
            output_path: root.join(defaults.output_path),
            version: defaults.version,
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}
