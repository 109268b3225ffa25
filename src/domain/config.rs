//! Application configuration model.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::theme::ThemeId;

/// Theme selection defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme key selected when a session starts.
    #[serde(default = "default_theme")]
    pub default: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: default_theme(),
        }
    }
}

fn default_theme() -> String {
    ThemeId::DEFAULT.key().to_string()
}

/// Export artifact settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory artifacts are written to (current directory if unset).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default = "default_json_file_name")]
    pub json_file_name: String,

    #[serde(default = "default_png_file_name")]
    pub png_file_name: String,

    /// Device pixel ratio. Unset means unavailable.
    #[serde(default)]
    pub pixel_ratio: Option<f32>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            json_file_name: default_json_file_name(),
            png_file_name: default_png_file_name(),
            pixel_ratio: None,
        }
    }
}

fn default_json_file_name() -> String {
    "profile-card.json".to_string()
}

fn default_png_file_name() -> String {
    "profile-card.png".to_string()
}

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".profile-card")
    }

    /// Get the default config file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        Self::default_data_dir().join("config.toml")
    }

    /// Directory export artifacts are written to.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.export
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
