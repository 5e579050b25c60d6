use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use log::debug;

use crate::error::{Error, Result};
use crate::models::{ColorScheme, FontSize, Settings, TerminalApp, ThemeMode};

/// SettingsManager handles loading, updating, and persisting user
/// preferences.
///
/// Features:
/// - Thread-safe access via RwLock
/// - Read-through initialization: a missing file yields defaults, a
///   partial file is merged field-by-field over defaults
/// - Every update performs the state mutation and the persistence write
///   in one call, under one lock
pub struct SettingsManager {
    /// The current settings
    settings: RwLock<Settings>,
    /// Path to the settings file
    path: PathBuf,
}

impl SettingsManager {
    /// Creates a SettingsManager backed by the platform config directory.
    ///
    /// The settings file lives at `{config_dir}/markdesk/settings.json`.
    pub fn new() -> Result<Self> {
        let path = dirs::config_dir()
            .ok_or(Error::UserDirUnavailable)?
            .join("markdesk")
            .join("settings.json");
        Ok(Self::with_path(path))
    }

    /// Creates a SettingsManager backed by a specific file path.
    /// Useful for testing.
    pub fn with_path(path: PathBuf) -> Self {
        let settings = Self::load_from_file(&path);
        Self {
            settings: RwLock::new(settings),
            path,
        }
    }

    /// Loads settings from a file, merging with defaults.
    ///
    /// A missing or unparseable file yields defaults; a parseable file
    /// with missing or invalid fields keeps defaults for those fields.
    fn load_from_file(path: &Path) -> Settings {
        match fs::read_to_string(path) {
            Ok(content) => merge_settings_with_defaults(&content),
            Err(_) => Settings::default(),
        }
    }

    /// Gets a clone of the current settings.
    pub fn get(&self) -> Settings {
        self.settings.read().unwrap().clone()
    }

    /// Updates the settings using a closure and persists the result.
    ///
    /// The mutation and the disk write happen under one write lock, so a
    /// concurrent in-flight action cannot observe or tear a half-applied
    /// preference change.
    ///
    /// # Arguments
    /// * `f` - A closure that modifies the settings
    pub fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.settings.write().unwrap();
        f(&mut settings);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&*settings)
            .map_err(|e| Error::Io(std::io::Error::other(e)))?;
        fs::write(&self.path, content)?;
        debug!("settings saved to {}", self.path.display());
        Ok(())
    }

    pub fn last_directory(&self) -> Option<String> {
        self.settings.read().unwrap().last_directory.clone()
    }

    pub fn set_last_directory(&self, dir: impl Into<String>) -> Result<()> {
        let dir = dir.into();
        self.update(|s| s.last_directory = Some(dir))
    }

    pub fn clear_last_directory(&self) -> Result<()> {
        self.update(|s| s.last_directory = None)
    }

    pub fn font_size(&self) -> FontSize {
        self.settings.read().unwrap().font_size
    }

    pub fn set_font_size(&self, size: FontSize) -> Result<()> {
        self.update(|s| s.font_size = size)
    }

    pub fn color_scheme_light(&self) -> ColorScheme {
        self.settings.read().unwrap().color_scheme_light
    }

    pub fn set_color_scheme_light(&self, scheme: ColorScheme) -> Result<()> {
        self.update(|s| s.color_scheme_light = scheme)
    }

    pub fn color_scheme_dark(&self) -> ColorScheme {
        self.settings.read().unwrap().color_scheme_dark
    }

    pub fn set_color_scheme_dark(&self, scheme: ColorScheme) -> Result<()> {
        self.update(|s| s.color_scheme_dark = scheme)
    }

    pub fn theme(&self) -> ThemeMode {
        self.settings.read().unwrap().theme
    }

    pub fn set_theme(&self, theme: ThemeMode) -> Result<()> {
        self.update(|s| s.theme = theme)
    }

    /// Toggles between light and dark mode and returns the new mode.
    pub fn toggle_theme(&self) -> Result<ThemeMode> {
        let mut toggled = ThemeMode::Dark;
        self.update(|s| {
            s.theme = match s.theme {
                ThemeMode::Light => ThemeMode::Dark,
                ThemeMode::Dark => ThemeMode::Light,
            };
            toggled = s.theme;
        })?;
        Ok(toggled)
    }

    pub fn preferred_terminal(&self) -> TerminalApp {
        self.settings.read().unwrap().preferred_terminal
    }

    pub fn set_preferred_terminal(&self, terminal: TerminalApp) -> Result<()> {
        self.update(|s| s.preferred_terminal = terminal)
    }

    /// Returns the settings file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Merges a partial settings JSON document with defaults.
///
/// Each key is taken independently; an absent or invalid value for any
/// key leaves that key's default in place.
pub fn merge_settings_with_defaults(content: &str) -> Settings {
    let mut settings = Settings::default();

    let json_value: serde_json::Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => return settings,
    };

    if let Some(obj) = json_value.as_object() {
        if let Some(v) = obj.get("lastDirectory").and_then(|v| v.as_str()) {
            settings.last_directory = Some(v.to_string());
        }
        if let Some(v) = obj.get("fontSize") {
            if let Ok(size) = serde_json::from_value(v.clone()) {
                settings.font_size = size;
            }
        }
        if let Some(v) = obj.get("colorSchemeLight") {
            if let Ok(scheme) = serde_json::from_value(v.clone()) {
                settings.color_scheme_light = scheme;
            }
        }
        if let Some(v) = obj.get("colorSchemeDark") {
            if let Ok(scheme) = serde_json::from_value(v.clone()) {
                settings.color_scheme_dark = scheme;
            }
        }
        if let Some(v) = obj.get("theme") {
            if let Ok(theme) = serde_json::from_value(v.clone()) {
                settings.theme = theme;
            }
        }
        if let Some(v) = obj.get("preferredTerminal") {
            if let Ok(terminal) = serde_json::from_value(v.clone()) {
                settings.preferred_terminal = terminal;
            }
        }
    }

    settings
}
