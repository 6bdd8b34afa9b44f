//! Input loading

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{TleError, TleResult};

/// Read a required input file as UTF-8, unchanged.
///
/// A missing file maps to [`TleError::NotFound`]; every other failure,
/// including invalid UTF-8, to [`TleError::Read`].
pub fn read_input(path: &Path) -> TleResult<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("read {} ({} bytes)", path.display(), content.len());
            Ok(content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(TleError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(TleError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
