pub mod types;

pub use types::*;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// External tool names
    pub tools: ToolsConfig,
    /// Command output settings
    pub output: OutputConfig,
    /// File grid settings
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from TOML file, or create default if not found
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if config_path.exists() {
            match Self::load_from_file(&config_path) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config: {}. Using defaults.", e);
                }
            }
        }

        let config = Self::default();
        // Save default config for future editing
        if let Err(e) = config.save() {
            warn!("Failed to save default config: {}", e);
        }
        config
    }

    /// Save configuration to TOML file
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, toml_string)
            .map_err(|e| AppError::Config(format!("Failed to write config file: {}", e)))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Load configuration from a specific file
    fn load_from_file(path: &PathBuf) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config file: {}", e)))?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mkvdefaults")
            .join("config.toml")
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.tools.inspector.trim().is_empty() {
            return Err(AppError::Config(
                "tools.inspector must not be empty".to_string(),
            ));
        }
        if self.tools.editor.trim().is_empty() {
            return Err(AppError::Config(
                "tools.editor must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::TitleAction;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.tools.inspector, "mkvmerge");
        assert_eq!(parsed.tools.editor, "mkvpropedit");
        assert_eq!(parsed.output.title_action, TitleAction::Clear);
        assert!(parsed.display.multi_line);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed: AppConfig = toml::from_str("[tools]\ninspector = \"mkvmerge-9\"\n").unwrap();
        assert_eq!(parsed.tools.inspector, "mkvmerge-9");
        assert_eq!(parsed.tools.editor, "mkvpropedit");
        assert_eq!(parsed.output.title_action, TitleAction::Clear);
    }

    #[test]
    fn blank_tool_name_fails_validation() {
        let config: AppConfig = toml::from_str("[tools]\neditor = \" \"\n").unwrap();
        assert!(config.validate().is_err());
    }
}
