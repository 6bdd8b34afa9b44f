//! Literal markers shared by the template and the composer

/// Replaced with the installer version.
pub const VERSION_PLACEHOLDER: &str = "{{VERSION}}";

/// Replaced with the extension's SQL source.
pub const SOURCE_PLACEHOLDER: &str = "{{SOURCE}}";

/// Dollar-quote tag the template wraps the source in.
///
/// A payload containing it would close the quoted region early.
pub const PGTLE_DELIMITER: &str = "$_pgtle_$";

/// Every placeholder the composer resolves.
pub const PLACEHOLDERS: [&str; 2] = [VERSION_PLACEHOLDER, SOURCE_PLACEHOLDER];
