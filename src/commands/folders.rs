use std::path::Path;

use crate::error::Result;
use crate::filesystem;
use crate::models::{FileEntry, OpResult};

/// Lists the immediate entries of a directory as a flat sequence.
///
/// # Arguments
/// * `dir_path` - Absolute path of the directory
pub async fn read_directory(dir_path: String) -> Result<Vec<FileEntry>> {
    filesystem::list(Path::new(&dir_path))
}

/// Lists a directory recursively as a depth-first tree.
///
/// Unreadable subdirectories come back with empty children; see
/// [`filesystem::list_tree`] for the partial-failure policy.
pub async fn read_directory_tree(dir_path: String) -> Result<Vec<FileEntry>> {
    filesystem::list_tree(Path::new(&dir_path))
}

/// Creates a single directory (non-recursive).
pub async fn create_directory(dir_path: String) -> Result<OpResult> {
    filesystem::create_directory(Path::new(&dir_path))?;
    Ok(OpResult::with_path(dir_path))
}

/// Deletes a directory recursively; a missing directory is a success.
pub async fn delete_directory(dir_path: String) -> Result<OpResult> {
    filesystem::delete_directory_all(Path::new(&dir_path))?;
    Ok(OpResult::success())
}

/// Checks whether a path exists and is a directory. Never fails.
pub async fn directory_exists(dir_path: String) -> bool {
    filesystem::directory_exists(Path::new(&dir_path))
}
