use std::path::{Path, PathBuf};

use crate::models::FileEntry;

/// Presentation-side workspace state: the open directory, its cached
/// entry listing, the selected file, and the editor's content pair.
///
/// Dirty tracking is computed, never stored: the editor is dirty exactly
/// when the current content differs from the last-loaded-or-saved
/// snapshot. Entry caches are replaced wholesale on refresh; selection
/// resets the content pair.
#[derive(Debug, Default)]
pub struct WorkspaceState {
    current_directory: Option<PathBuf>,
    entries: Vec<FileEntry>,
    selected_file: Option<FileEntry>,
    file_content: String,
    original_file_content: String,
}

impl WorkspaceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_directory(&self) -> Option<&Path> {
        self.current_directory.as_deref()
    }

    pub fn set_current_directory(&mut self, dir: impl Into<PathBuf>) {
        self.current_directory = Some(dir.into());
    }

    /// Replaces the cached directory listing.
    pub fn set_entries(&mut self, entries: Vec<FileEntry>) {
        self.entries = entries;
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Cached entries that the editor can open (.md and .txt files).
    pub fn markdown_files(&self) -> Vec<&FileEntry> {
        self.entries
            .iter()
            .filter(|e| e.is_file && (e.name.ends_with(".md") || e.name.ends_with(".txt")))
            .collect()
    }

    /// Cached entries that are directories.
    pub fn directories(&self) -> Vec<&FileEntry> {
        self.entries.iter().filter(|e| e.is_directory).collect()
    }

    pub fn selected_file(&self) -> Option<&FileEntry> {
        self.selected_file.as_ref()
    }

    pub fn current_file_name(&self) -> Option<&str> {
        self.selected_file.as_ref().map(|f| f.name.as_str())
    }

    pub fn current_file_path(&self) -> Option<&str> {
        self.selected_file.as_ref().map(|f| f.path.as_str())
    }

    pub fn file_content(&self) -> &str {
        &self.file_content
    }

    /// Whether the editor content differs from the last-saved snapshot.
    pub fn has_unsaved_changes(&self) -> bool {
        self.file_content != self.original_file_content
    }

    /// Selects a file, resetting the editor content pair.
    ///
    /// Refuses (returning false, selection unchanged) when there are
    /// unsaved changes and the caller did not ask to discard them; the
    /// confirmation prompt itself is the presentation layer's job.
    pub fn select_file(&mut self, file: FileEntry, discard_unsaved: bool) -> bool {
        if self.has_unsaved_changes() && !discard_unsaved {
            return false;
        }
        self.selected_file = Some(file);
        self.file_content.clear();
        self.original_file_content.clear();
        true
    }

    /// Loads content into the editor, establishing the saved snapshot.
    pub fn set_file_content(&mut self, content: impl Into<String>) {
        self.file_content = content.into();
        self.original_file_content = self.file_content.clone();
    }

    /// Applies a user edit to the editor content.
    pub fn update_file_content(&mut self, content: impl Into<String>) {
        self.file_content = content.into();
    }

    /// Marks the current content as saved, resetting the snapshot.
    pub fn mark_as_saved(&mut self) {
        self.original_file_content = self.file_content.clone();
    }

    /// Clears the selection and both content fields.
    pub fn clear_selection(&mut self) {
        self.selected_file = None;
        self.file_content.clear();
        self.original_file_content.clear();
    }
}
