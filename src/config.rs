use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::emulator::DEFAULT_ANDROID_URL;
use crate::error::{AppError, AppResult};

const CONFIG_DIR_ENV: &str = "DEVTOOL_CONFIG_DIR";
const CONFIG_FILE_NAME: &str = "config.json";
const DEFAULT_TRACKER_BASE_URL: &str = "https://headversity.atlassian.net";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredConfig {
    #[serde(default)]
    pub username: String,
    #[serde(default = "default_tracker_base_url")]
    pub tracker_base_url: String,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub features: Features,
    #[serde(default)]
    pub backend_commands: Vec<BackendCommand>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub android_emulator_name: String,
    #[serde(default)]
    pub date_separator: String,
    #[serde(default = "default_android_url")]
    pub default_android_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    #[serde(default)]
    pub enable_reminder_popup: bool,
    #[serde(default = "default_include_checklist")]
    pub include_checklist: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendCommand {
    pub label: String,
    pub command: String,
}

/// The subset of configuration the text generator reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub tracker_base_url: String,
    pub date_separator: String,
    pub enable_reminders: bool,
    pub include_checklist: bool,
}

impl Default for StoredConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            tracker_base_url: default_tracker_base_url(),
            settings: Settings::default(),
            features: Features::default(),
            backend_commands: Vec::new(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            android_emulator_name: String::new(),
            date_separator: String::new(),
            default_android_url: default_android_url(),
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self {
            enable_reminder_popup: false,
            include_checklist: default_include_checklist(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        StoredConfig::default().generator()
    }
}

fn default_tracker_base_url() -> String {
    DEFAULT_TRACKER_BASE_URL.to_string()
}

fn default_android_url() -> String {
    DEFAULT_ANDROID_URL.to_string()
}

fn default_include_checklist() -> bool {
    true
}

impl StoredConfig {
    pub fn load() -> AppResult<Self> {
        Self::load_from(&config_file_path()?)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                debug!(path = %path.display(), "loading configuration");
                serde_json::from_str(&contents).map_err(|err| {
                    AppError::Configuration(format!(
                        "invalid config file {}: {err}",
                        path.display()
                    ))
                })
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no configuration file, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(AppError::Io(err)),
        }
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            tracker_base_url: self.tracker_base_url.trim_end_matches('/').to_string(),
            date_separator: self.settings.date_separator.clone(),
            enable_reminders: self.features.enable_reminder_popup,
            include_checklist: self.features.include_checklist,
        }
    }

    pub fn backend_command_pairs(&self) -> Vec<(String, String)> {
        self.backend_commands
            .iter()
            .map(|entry| (entry.label.clone(), entry.command.clone()))
            .collect()
    }
}

pub fn config_directory() -> AppResult<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    dirs::config_dir()
        .map(|dir| dir.join("devtool"))
        .ok_or_else(|| {
            AppError::Configuration("unable to determine configuration directory".to_string())
        })
}

pub fn config_file_path() -> AppResult<PathBuf> {
    Ok(config_directory()?.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = StoredConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(cfg.tracker_base_url, "https://headversity.atlassian.net");
        assert_eq!(cfg.settings.default_android_url, "http://localhost:3004");
        assert!(!cfg.features.enable_reminder_popup);
        assert!(cfg.features.include_checklist);
    }

    #[test]
    fn reads_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "username": "jdoe",
                "trackerBaseUrl": "https://tracker.example/",
                "settings": { "androidEmulatorName": "Pixel_7", "dateSeparator": "-" },
                "features": { "enableReminderPopup": true },
                "backendCommands": [ { "label": "Run API", "command": "dotnet run" } ]
            }"#,
        )
        .unwrap();

        let cfg = StoredConfig::load_from(&path).unwrap();
        assert_eq!(cfg.username, "jdoe");
        assert_eq!(cfg.settings.android_emulator_name, "Pixel_7");
        assert_eq!(
            cfg.backend_command_pairs(),
            vec![("Run API".to_string(), "dotnet run".to_string())]
        );

        let generator = cfg.generator();
        assert_eq!(generator.tracker_base_url, "https://tracker.example");
        assert_eq!(generator.date_separator, "-");
        assert!(generator.enable_reminders);
        assert!(generator.include_checklist);
    }

    #[test]
    fn rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = StoredConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut cfg = StoredConfig::default();
        cfg.username = "jdoe".to_string();
        cfg.features.include_checklist = false;
        cfg.save_to(&path).unwrap();

        let loaded = StoredConfig::load_from(&path).unwrap();
        assert_eq!(loaded.username, "jdoe");
        assert!(!loaded.features.include_checklist);
    }
}
