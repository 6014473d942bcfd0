use std::path::PathBuf;
use std::sync::Arc;

use arc_swap::ArcSwap;
use figment::{
    Figment,
    providers::{Format, Json, Serialized},
};
use gpui::App;
use gpui_component::{Theme, ThemeMode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use snafu::{ResultExt, Snafu};

pub const SETTINGS_DIRECTORY_NAME: &str = "folio";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Persisted display preferences. The theme mode is the only setting the
/// page carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(
        default = "default_theme_mode",
        serialize_with = "serialize_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

impl ThemeSettings {
    pub fn for_dark_mode(dark: bool) -> Self {
        Self {
            theme_mode: if dark {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            },
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self.theme_mode, ThemeMode::Dark)
    }

    /// Applies the stored mode to the global theme.
    pub fn apply(&self, cx: &mut App) {
        Theme::change(self.theme_mode, None, cx);
    }
}

/// Loads and persists [`ThemeSettings`] as JSON.
///
/// Reads merge file contents over serialized defaults, so a missing or
/// partial file still yields a usable value; writes go through a temp file
/// and rename so a crash never leaves a torn settings file behind.
pub struct ThemeSettingsStore {
    settings: Arc<ArcSwap<ThemeSettings>>,
    config_path: PathBuf,
}

impl ThemeSettingsStore {
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|path| path.join(SETTINGS_DIRECTORY_NAME))
            .unwrap_or_else(|| PathBuf::from(".folio"))
    }

    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join(SETTINGS_FILE_NAME)
    }

    pub fn new(config_path: PathBuf) -> Self {
        let settings = Self::load_from_disk(&config_path);
        Self {
            settings: Arc::new(ArcSwap::from_pointee(settings)),
            config_path,
        }
    }

    pub fn load() -> Self {
        Self::new(Self::default_config_path())
    }

    pub fn settings(&self) -> Arc<ThemeSettings> {
        self.settings.load_full()
    }

    pub fn update(&self, settings: ThemeSettings) -> Result<(), SettingsError> {
        self.persist(&settings)?;
        self.settings.store(Arc::new(settings));
        Ok(())
    }

    fn load_from_disk(path: &PathBuf) -> ThemeSettings {
        if !path.exists() {
            tracing::info!("settings file not found at {:?}, using defaults", path);
            return ThemeSettings::default();
        }

        let figment =
            Figment::from(Serialized::defaults(ThemeSettings::default())).merge(Json::file(path));

        match figment.extract::<ThemeSettings>() {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!(
                    "failed to parse settings from {:?}: {}. using defaults",
                    path,
                    error
                );
                ThemeSettings::default()
            }
        }
    }

    fn persist(&self, settings: &ThemeSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).context(CreateDirSnafu {
                stage: "create-settings-directory",
                path: parent.to_path_buf(),
            })?;
        }

        let content = serde_json::to_string_pretty(settings).context(SerializeConfigSnafu {
            stage: "serialize-settings-json",
        })?;

        let temp_path = self.config_path.with_extension("json.tmp");
        std::fs::write(&temp_path, content).context(WriteFileSnafu {
            stage: "write-temporary-settings-file",
            path: temp_path.clone(),
        })?;

        std::fs::rename(&temp_path, &self.config_path).context(RenameTempFileSnafu {
            stage: "rename-temporary-settings-file",
            from: temp_path,
            to: self.config_path.clone(),
        })?;

        tracing::info!("saved settings to {:?}", self.config_path);
        Ok(())
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SettingsError {
    #[snafu(display("failed to create settings directory at {path:?} on `{stage}`: {source}"))]
    CreateDir {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("failed to serialize settings on `{stage}`: {source}"))]
    SerializeConfig {
        stage: &'static str,
        source: serde_json::Error,
    },
    #[snafu(display("failed to write settings file at {path:?} on `{stage}`: {source}"))]
    WriteFile {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display(
        "failed to replace settings file from {from:?} to {to:?} on `{stage}`: {source}"
    ))]
    RenameTempFile {
        stage: &'static str,
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Dark
}

fn serialize_theme_mode<S: Serializer>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error> {
    let value = match mode {
        ThemeMode::Light => "light",
        _ => "dark",
    };
    serializer.serialize_str(value)
}

fn deserialize_theme_mode<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<ThemeMode, D::Error> {
    let value = String::deserialize(deserializer)?;
    match value.as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        other => Err(serde::de::Error::unknown_variant(other, &["light", "dark"])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_round_trips_the_theme_mode() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE_NAME);

        let store = ThemeSettingsStore::new(path.clone());
        assert!(store.settings().is_dark());

        store
            .update(ThemeSettings::for_dark_mode(false))
            .expect("persist");

        let reloaded = ThemeSettingsStore::new(path);
        assert!(!reloaded.settings().is_dark());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, "{not valid json").expect("write");

        let store = ThemeSettingsStore::new(path);
        assert_eq!(*store.settings(), ThemeSettings::default());
    }

    #[test]
    fn unknown_mode_value_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, r#"{"theme_mode":"sepia"}"#).expect("write");

        let store = ThemeSettingsStore::new(path);
        assert!(store.settings().is_dark());
    }
}
