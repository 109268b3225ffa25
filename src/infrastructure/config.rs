//! Configuration file management.
//!
//! Handles loading the TOML configuration file.

use std::fs;
use std::path::Path;

use crate::domain::{AppConfig, AppError, Result};

/// Default configuration file content.
pub const DEFAULT_CONFIG: &str = r#"# Profile Card Configuration
# Edit as needed

[theme]
# Theme selected at startup: SoftMono, WarmMono or DeepMono
default = "SoftMono"

[export]
# Directory exports are written to (optional, defaults to the current directory)
# output_dir = "/custom/path"

json_file_name = "profile-card.json"
png_file_name = "profile-card.png"

# Device pixel ratio for PNG export (optional, defaults to 2)
# pixel_ratio = 2.0
"#;

/// Load configuration from the default location, or defaults if absent.
///
/// # Errors
/// Returns error if file exists but cannot be read or parsed.
pub fn load_config() -> Result<AppConfig> {
    let config_path = AppConfig::default_config_path();

    if config_path.exists() {
        load_config_from_file(&config_path)
    } else {
        tracing::debug!(path = %config_path.display(), "No config file, using defaults");
        Ok(AppConfig::default())
    }
}

/// Load configuration from a specific file.
///
/// # Errors
/// Returns error if file cannot be read or parsed.
pub fn load_config_from_file(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read config file: {}", path.display()), e))?;

    toml::from_str(&content).map_err(|e| AppError::Config {
        message: format!("Failed to parse config file: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_parses() {
        let config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.theme.default, "SoftMono");
        assert_eq!(config.export.png_file_name, "profile-card.png");
        assert_eq!(config.export.pixel_ratio, None);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str("[export]\npixel_ratio = 3.0\n").unwrap();
        assert_eq!(config.export.pixel_ratio, Some(3.0));
        assert_eq!(config.export.json_file_name, "profile-card.json");
        assert_eq!(config.theme.default, "SoftMono");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[theme]\ndefault = \"DeepMono\"\n").unwrap();

        let loaded = load_config_from_file(&config_path).unwrap();
        assert_eq!(loaded.theme.default, "DeepMono");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[export\n").unwrap();

        assert!(matches!(
            load_config_from_file(&config_path),
            Err(AppError::Config { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            load_config_from_file(&dir.path().join("absent.toml")),
            Err(AppError::Io { .. })
        ));
    }
}
