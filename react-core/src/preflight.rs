//! Pre-flight write checks for output paths.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Checks that a file can be written at `path` before an analysis starts.
///
/// An existing regular file passes only when it is writable and `force` is
/// set; a missing file passes when its parent directory exists and is
/// writable. The parent is resolved from the absolute form of `path`, so
/// relative paths are checked against the current working directory.
///
/// The probe reads filesystem metadata only. It is a user-facing
/// diagnostic subject to the usual race between check and write: a
/// successful check does not reserve the path.
///
/// # Errors
///
/// - [`Error::AlreadyExists`] if the file exists, is writable, and `force`
///   is not set.
/// - [`Error::PermissionDenied`] if the file, or the parent directory of a
///   missing file, is not writable.
/// - [`Error::NotFound`] if neither the file nor its parent directory
///   exists.
/// - [`Error::Io`] if a metadata probe fails for any other reason.
pub fn check_can_write_file(path: &Path, force: bool) -> Result<()> {
    debug!("preflight write check: {}", path.display());

    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => {
            if meta.permissions().readonly() {
                return Err(Error::PermissionDenied {
                    path: path.to_path_buf(),
                });
            }
            if force {
                Ok(())
            } else {
                Err(Error::AlreadyExists {
                    path: path.to_path_buf(),
                })
            }
        }
        // Anything that is not a regular file (missing, directory, socket)
        // is judged by whether its enclosing directory accepts new files.
        Ok(_) => check_parent_dir(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => check_parent_dir(path),
        Err(e) => Err(e.into()),
    }
}

fn check_parent_dir(path: &Path) -> Result<()> {
    let dir = parent_dir(path)?;
    match fs::metadata(&dir) {
        Ok(meta) if meta.permissions().readonly() => Err(Error::PermissionDenied { path: dir }),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::NotFound { path: dir }),
        Err(e) => Err(e.into()),
    }
}

/// Parent directory of the absolute form of `path`. A path without a
/// parent (the filesystem root) is its own directory.
fn parent_dir(path: &Path) -> Result<PathBuf> {
    let abs = std::path::absolute(path)?;
    match abs.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(parent.to_path_buf()),
        _ => Ok(abs),
    }
}
