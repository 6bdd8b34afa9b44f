//! Post-substitution completeness check
//!
//! Literal replacement cannot tell a template that lacks `{{SOURCE}}` from
//! one that used it, so verification looks at both the template and the
//! composed output.

use std::path::Path;

use crate::error::{TleError, TleResult};
use crate::markers::PLACEHOLDERS;

/// Placeholder tokens present in `text`, in declaration order.
pub fn placeholders_in(text: &str) -> Vec<&'static str> {
    PLACEHOLDERS
        .iter()
        .copied()
        .filter(|token| text.contains(token))
        .collect()
}

/// Placeholder tokens absent from `template`, in declaration order.
pub fn missing_placeholders(template: &str) -> Vec<&'static str> {
    PLACEHOLDERS
        .iter()
        .copied()
        .filter(|token| !template.contains(token))
        .collect()
}

/// Fail unless every placeholder was present in `template` and none
/// survived into `composed`.
///
/// Either failure is a template defect, so `template_path` is what the
/// diagnostic points at.
pub fn verify(template: &str, composed: &str, template_path: &Path) -> TleResult<()> {
    let missing = missing_placeholders(template);
    if !missing.is_empty() {
        return Err(TleError::MissingPlaceholders {
            template: template_path.to_path_buf(),
            tokens: missing,
        });
    }

    let remaining = placeholders_in(composed);
    if !remaining.is_empty() {
        return Err(TleError::UnresolvedPlaceholders {
            template: template_path.to_path_buf(),
            tokens: remaining,
        });
    }
    Ok(())
}
