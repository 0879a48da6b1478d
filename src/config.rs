use std::path::Path;

use crate::error::ConfigError;

/// Board dimensions for a game. Defaults to the standard 7x6 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: 7,
            height: 6,
        }
    }
}

impl BoardConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::Validation(
                "board.width must be > 0".into(),
            ));
        }
        if self.height == 0 {
            return Err(ConfigError::Validation(
                "board.height must be > 0".into(),
            ));
        }
        Ok(())
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_is_seven_by_six() {
        let config = BoardConfig::default();
        assert_eq!(config.width, 7);
        assert_eq!(config.height, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml_with_partial_board() {
        let config: AppConfig = toml::from_str("[board]\nwidth = 9\n").unwrap();
        assert_eq!(config.board.width, 9);
        assert_eq!(config.board.height, 6);
    }

    #[test]
    fn test_parse_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board, BoardConfig::default());
    }

    #[test]
    fn test_zero_width_rejected() {
        let config = BoardConfig {
            width: 0,
            height: 6,
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be > 0"
        );
    }

    #[test]
    fn test_zero_height_rejected() {
        let config = BoardConfig {
            width: 7,
            height: 0,
        };
        assert!(config.validate().is_err());
    }
}
