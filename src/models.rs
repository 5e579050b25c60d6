use serde::{Deserialize, Serialize};

/// A single filesystem node as seen by the presentation layer.
///
/// `children` is populated (possibly empty) only on directory nodes of a
/// tree listing; flat listings and file nodes omit the field entirely.
/// Entries are built fresh on every listing request and never persisted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub name: String,
    /// Absolute path, stringified for the wire.
    pub path: String,
    pub is_directory: bool,
    pub is_file: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FileEntry>>,
}

/// Success marker returned by mutating bridge operations.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_path: Option<String>,
}

impl OpResult {
    /// Create a bare success result
    pub fn success() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    /// Create a success result carrying the affected path
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            success: true,
            path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Create a success result carrying the post-rename path
    pub fn with_new_path(new_path: impl Into<String>) -> Self {
        Self {
            success: true,
            new_path: Some(new_path.into()),
            ..Default::default()
        }
    }
}

/// Editor font size preference.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl FontSize {
    /// CSS root font size the presentation layer applies for this setting.
    pub fn rem_value(self) -> &'static str {
        match self {
            Self::Small => "0.875rem",
            Self::Medium => "1rem",
            Self::Large => "1.125rem",
            Self::ExtraLarge => "1.25rem",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::ExtraLarge => "Extra Large",
        }
    }
}

/// Editor color scheme, selected independently for light and dark mode.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Default,
    Ayu,
    Bearded,
    Cyberpunk,
    Eva,
    Gruvbox,
}

impl ColorScheme {
    pub fn dark_label(self) -> &'static str {
        match self {
            Self::Default => "Default Gray",
            Self::Ayu => "Ayu Dark",
            Self::Bearded => "Bearded Black & Gold",
            Self::Cyberpunk => "Cyberpunk Scarlet",
            Self::Eva => "Eva Dark",
            Self::Gruvbox => "Gruvbox Dark Hard",
        }
    }

    pub fn light_label(self) -> &'static str {
        match self {
            Self::Default => "Default Gray",
            Self::Ayu => "Ayu Light",
            Self::Bearded => "Bearded Black & Gold",
            Self::Cyberpunk => "Cyberpunk Scarlet",
            Self::Eva => "Eva Light",
            Self::Gruvbox => "Gruvbox Light",
        }
    }
}

/// Overall light/dark mode.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

/// Terminal emulator preference for the external tool launcher.
///
/// Only meaningful on macOS, where two emulators are scriptable by name;
/// other platforms ignore it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TerminalApp {
    #[default]
    Terminal,
    Iterm,
}

impl TerminalApp {
    pub fn label(self) -> &'static str {
        match self {
            Self::Terminal => "Terminal.app",
            Self::Iterm => "iTerm2",
        }
    }
}

/// User preferences, one durable key per field.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_directory: Option<String>,
    pub font_size: FontSize,
    pub color_scheme_light: ColorScheme,
    pub color_scheme_dark: ColorScheme,
    pub theme: ThemeMode,
    pub preferred_terminal: TerminalApp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn op_result_success() {
        let result = OpResult::success();
        assert!(result.success);
        assert!(result.path.is_none());
        assert!(result.new_path.is_none());
    }

    #[test]
    fn op_result_serializes_camel_case() {
        let json = serde_json::to_value(OpResult::with_new_path("/tmp/b.md")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["newPath"], "/tmp/b.md");
        assert!(json.get("path").is_none());
    }

    #[test]
    fn file_entry_for_a_file_has_no_children_key() {
        let entry = FileEntry {
            name: "a.md".to_string(),
            path: "/tmp/x/a.md".to_string(),
            is_directory: false,
            is_file: true,
            children: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["isFile"], true);
        assert_eq!(json["isDirectory"], false);
        assert!(json.get("children").is_none());
    }

    #[test]
    fn file_entry_for_a_directory_keeps_empty_children() {
        let entry = FileEntry {
            name: "sub".to_string(),
            path: "/tmp/x/sub".to_string(),
            is_directory: true,
            is_file: false,
            children: Some(vec![]),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["children"], serde_json::json!([]));
    }

    #[test]
    fn settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.font_size, FontSize::Medium);
        assert_eq!(settings.color_scheme_light, ColorScheme::Default);
        assert_eq!(settings.color_scheme_dark, ColorScheme::Default);
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert_eq!(settings.preferred_terminal, TerminalApp::Terminal);
        assert!(settings.last_directory.is_none());
    }

    #[test]
    fn font_size_wire_names_are_kebab_case() {
        assert_eq!(
            serde_json::to_value(FontSize::ExtraLarge).unwrap(),
            serde_json::json!("extra-large")
        );
        assert_eq!(FontSize::ExtraLarge.rem_value(), "1.25rem");
    }

    fn file_entry_strategy() -> impl Strategy<Value = FileEntry> {
        ("[a-zA-Z0-9._-]{1,12}", any::<bool>()).prop_map(|(name, is_dir)| FileEntry {
            path: format!("/tmp/{}", name),
            name,
            is_directory: is_dir,
            is_file: !is_dir,
            children: if is_dir { Some(vec![]) } else { None },
        })
    }

    fn op_result_strategy() -> impl Strategy<Value = OpResult> {
        (
            any::<bool>(),
            proptest::option::of("[a-z/]{1,16}"),
            proptest::option::of("[a-z/]{1,16}"),
        )
            .prop_map(|(success, path, new_path)| OpResult {
                success,
                path,
                new_path,
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_op_result_serialization_round_trip(result in op_result_strategy()) {
            let serialized = serde_json::to_string(&result).expect("serialize OpResult");
            let deserialized: OpResult = serde_json::from_str(&serialized).expect("deserialize OpResult");
            prop_assert_eq!(result, deserialized);
        }

        #[test]
        fn prop_file_entry_serialization_round_trip(entry in file_entry_strategy()) {
            let serialized = serde_json::to_string(&entry).expect("serialize FileEntry");
            let deserialized: FileEntry = serde_json::from_str(&serialized).expect("deserialize FileEntry");
            prop_assert_eq!(entry, deserialized);
        }

        #[test]
        fn prop_settings_round_trip(
            font in prop_oneof![
                Just(FontSize::Small), Just(FontSize::Medium),
                Just(FontSize::Large), Just(FontSize::ExtraLarge)
            ],
            last_dir in proptest::option::of("[a-z/]{1,20}"),
        ) {
            let settings = Settings {
                last_directory: last_dir,
                font_size: font,
                ..Default::default()
            };
            let serialized = serde_json::to_string(&settings).expect("serialize Settings");
            let deserialized: Settings = serde_json::from_str(&serialized).expect("deserialize Settings");
            prop_assert_eq!(settings, deserialized);
        }
    }
}
