//! Delimiter check and placeholder substitution
//!
//! The template embeds the extension source inside a `$_pgtle_$` dollar
//! quote, so the only escaping rule is that the source must never contain
//! that tag. Substitution is plain literal replacement.

use std::path::Path;

use crate::error::{TleError, TleResult};
use crate::markers::{PGTLE_DELIMITER, PLACEHOLDERS, SOURCE_PLACEHOLDER, VERSION_PLACEHOLDER};

/// Reject a payload that would terminate the template's dollar quote.
///
/// `source_path` only feeds the diagnostic.
pub fn check_delimiter(payload: &str, source_path: &Path) -> TleResult<()> {
    if let Some(offset) = payload.find(PGTLE_DELIMITER) {
        log::debug!(
            "delimiter {} found at byte {} of {}",
            PGTLE_DELIMITER,
            offset,
            source_path.display()
        );
        return Err(TleError::DelimiterCollision {
            path: source_path.to_path_buf(),
            marker: PGTLE_DELIMITER,
        });
    }
    Ok(())
}

/// Reject a version that contains a placeholder or the delimiter.
///
/// `{{VERSION}}` is replaced first, so a `{{SOURCE}}` inside the version
/// would be expanded to the payload.
pub fn check_version(version: &str) -> TleResult<()> {
    let marker = PLACEHOLDERS
        .into_iter()
        .chain([PGTLE_DELIMITER])
        .find(|marker| version.contains(marker));
    match marker {
        Some(marker) => Err(TleError::InvalidVersion {
            version: version.to_string(),
            marker,
        }),
        None => Ok(()),
    }
}

/// Replace every `{{VERSION}}` and `{{SOURCE}}` in `template`.
///
/// Tokens that do not occur are left for [`crate::verifier::verify`] to
/// report.
pub fn compose(template: &str, payload: &str, version: &str) -> String {
    template
        .replace(VERSION_PLACEHOLDER, version)
        .replace(SOURCE_PLACEHOLDER, payload)
}
