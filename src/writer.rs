//! Installer writer
//!
//! Writes go through a temp file in the destination directory followed by a
//! rename, so a failed write never leaves a half-written installer behind.
//! The installer keeps the mode of the file it replaces; a new one gets the
//! umask default rather than tempfile's owner-only mode.

use std::io::Write;
use std::path::Path;

use sha2::{Digest, Sha256};
use tempfile::{Builder, NamedTempFile};

use crate::error::{TleError, TleResult};

/// Write `content` to `path` atomically, replacing any existing file.
///
/// Missing parent directories are created.
pub fn write_output(path: &Path, content: &str) -> TleResult<()> {
    let write_err = |source: std::io::Error| TleError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = temp_file_in(dir).map_err(write_err)?;
    if let Ok(existing) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_err)?;
    }
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    log::debug!("wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}

/// Temp file created with the mode a plain `File::create` would get.
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // The mode is passed to open(2), so the umask still applies.
    Builder::new()
        .prefix(".install-tle")
        .permissions(std::fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().prefix(".install-tle").tempfile_in(dir)
}

/// SHA-256 of the installer content, as `sha256:<hex>`.
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}
