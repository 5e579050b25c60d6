use std::path::Path;

use crate::error::Result;
use crate::filesystem;
use crate::launcher;
use crate::models::{OpResult, TerminalApp};

/// Opens the native directory picker.
///
/// # Returns
/// The selected absolute path, or None when the user cancels.
pub async fn select_directory() -> Result<Option<String>> {
    let folder = rfd::AsyncFileDialog::new().pick_folder().await;
    Ok(folder.map(|handle| handle.path().to_string_lossy().into_owned()))
}

/// Returns the user's home directory as a string.
pub async fn get_home_path() -> Result<String> {
    Ok(filesystem::home_dir()?.to_string_lossy().into_owned())
}

/// Opens an external terminal in `cwd` and hands it to the workspace CLI.
///
/// # Arguments
/// * `path` - Optional file to open in the tool
/// * `cwd` - Working directory for the terminal session
/// * `terminal` - Terminal emulator preference (macOS only)
pub async fn launch_external_tool(
    path: Option<String>,
    cwd: String,
    terminal: TerminalApp,
) -> Result<OpResult> {
    launcher::launch(path.as_deref().map(Path::new), Path::new(&cwd), terminal)?;
    Ok(OpResult::success())
}
