//! Filesystem access layer.
//!
//! Every operation is a direct proxy to one OS call executed in the
//! privileged process: no retries, no batching, no caching. Entries are
//! surfaced in directory-read order; sorting is the presentation layer's
//! concern.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{Error, Result};
use crate::models::FileEntry;

/// Lists the immediate entries of a directory as a flat sequence.
///
/// # Arguments
/// * `dir` - Absolute path of the directory to list
///
/// # Returns
/// * `Ok(Vec<FileEntry>)` - Entries in directory-read order, no children
/// * `Err(Error)` - If the directory cannot be read
pub fn list(dir: &Path) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        entries.push(FileEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path().to_string_lossy().into_owned(),
            is_directory: file_type.is_dir(),
            is_file: file_type.is_file(),
            children: None,
        });
    }
    Ok(entries)
}

/// Lists a directory recursively as a depth-first tree.
///
/// A read failure on the requested root propagates, matching [`list`].
/// A read failure anywhere below it is non-fatal: the failing directory
/// node is kept with an empty children list, a warning is logged, and the
/// walk continues with its siblings.
///
/// # Arguments
/// * `dir` - Absolute path of the directory to walk
pub fn list_tree(dir: &Path) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let path = entry.path();
        let children = if file_type.is_dir() {
            Some(match list_tree(&path) {
                Ok(children) => children,
                Err(err) => {
                    warn!("skipping unreadable directory {}: {}", path.display(), err);
                    Vec::new()
                }
            })
        } else {
            None
        };
        entries.push(FileEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: path.to_string_lossy().into_owned(),
            is_directory: file_type.is_dir(),
            is_file: file_type.is_file(),
            children,
        });
    }
    Ok(entries)
}

/// Reads the full contents of a file as UTF-8 text.
///
/// Non-UTF-8 content surfaces as an I/O error, as does a missing or
/// unreadable file.
pub fn read_text(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Writes the full contents of a file as UTF-8 text.
///
/// Partial writes are not rolled back.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    Ok(fs::write(path, content)?)
}

/// Creates a file with the given initial content.
///
/// Fails if the parent directory is missing; an existing file at the path
/// is truncated and rewritten.
pub fn create_file(path: &Path, content: &str) -> Result<()> {
    Ok(fs::write(path, content)?)
}

/// Returns whether a path exists. Never fails; I/O errors read as false.
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Deletes a file.
pub fn delete_file(path: &Path) -> Result<()> {
    Ok(fs::remove_file(path)?)
}

/// Creates a single directory (non-recursive).
///
/// Fails if the directory already exists or the parent is missing.
pub fn create_directory(path: &Path) -> Result<()> {
    Ok(fs::create_dir(path)?)
}

/// Deletes a directory and everything below it, with force semantics:
/// a path that does not exist is treated as success.
pub fn delete_directory_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

/// Returns whether a path exists and is a directory. Never fails.
pub fn directory_exists(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Renames a file or directory.
pub fn rename(old_path: &Path, new_path: &Path) -> Result<()> {
    Ok(fs::rename(old_path, new_path)?)
}

/// Returns the user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(Error::UserDirUnavailable)
}
