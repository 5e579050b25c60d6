use std::path::Path;

use crate::error::Result;
use crate::filesystem;
use crate::models::OpResult;

/// Reads the full contents of a file as UTF-8 text.
///
/// # Arguments
/// * `path` - Absolute path to the file
pub async fn read_file(path: String) -> Result<String> {
    filesystem::read_text(Path::new(&path))
}

/// Writes content to a file, replacing whatever was there.
///
/// # Arguments
/// * `path` - Absolute path to the file
/// * `content` - The content to write
pub async fn write_file(path: String, content: String) -> Result<OpResult> {
    filesystem::write_text(Path::new(&path), &content)?;
    Ok(OpResult::success())
}

/// Creates a file with optional initial content.
///
/// # Arguments
/// * `path` - Absolute path for the new file
/// * `content` - Initial content; defaults to empty
pub async fn create_file(path: String, content: Option<String>) -> Result<OpResult> {
    filesystem::create_file(Path::new(&path), content.as_deref().unwrap_or(""))?;
    Ok(OpResult::with_path(path))
}

/// Checks whether a file or directory exists. Never fails.
pub async fn file_exists(path: String) -> bool {
    filesystem::exists(Path::new(&path))
}

/// Deletes a file.
pub async fn delete_file(path: String) -> Result<OpResult> {
    filesystem::delete_file(Path::new(&path))?;
    Ok(OpResult::success())
}

/// Renames a file or directory.
///
/// # Arguments
/// * `old_path` - Current absolute path
/// * `new_path` - Target absolute path
pub async fn rename_item(old_path: String, new_path: String) -> Result<OpResult> {
    filesystem::rename(Path::new(&old_path), Path::new(&new_path))?;
    Ok(OpResult::with_new_path(new_path))
}
