//! Engine configuration, loadable from TOML.

use crate::engine::validate_setup;
use crate::error::{ConfigError, SetupError};
use crate::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Default side length of the board.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Largest side length an engine accepts.
pub const MAX_BOARD_SIZE: usize = 64;

/// Board size and player sequence for a new engine.
///
/// ```toml
/// board_size = 3
///
/// [[players]]
/// label = "X"
/// color = "blue"
///
/// [[players]]
/// label = "O"
/// color = "green"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length of the square board.
    board_size: usize,
    /// Players in turn order.
    players: Vec<Player>,
}

/// X in blue and O in green.
pub fn default_players() -> Vec<Player> {
    vec![Player::new("X", "blue"), Player::new("O", "green")]
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            players: default_players(),
        }
    }
}

impl EngineConfig {
    /// Creates a configuration.
    pub fn new(players: Vec<Player>, board_size: usize) -> Self {
        Self {
            board_size,
            players,
        }
    }

    /// Returns a copy with a different board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Parses and validates a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            board_size = config.board_size,
            players = config.players.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads configuration from a file, falling back to defaults if it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            warn!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that the configuration can build an engine.
    pub fn validate(&self) -> Result<(), SetupError> {
        validate_setup(&self.players, self.board_size)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(*config.board_size(), 3);
        assert_eq!(config.players()[1], Player::new("O", "green"));
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_toml_str("board_size = 4").unwrap();
        assert_eq!(*config.board_size(), 4);
        assert_eq!(config.players(), &default_players());
    }

    #[test]
    fn test_custom_players() {
        let config = EngineConfig::from_toml_str(
            r#"
[[players]]
label = "A"
color = "red"

[[players]]
label = "B"
color = "yellow"

[[players]]
label = "C"
color = "cyan"
"#,
        )
        .unwrap();
        assert_eq!(config.players().len(), 3);
        assert_eq!(config.players()[2].label(), "C");
    }

    #[test]
    fn test_validation_rejects_zero_board() {
        let err = EngineConfig::from_toml_str("board_size = 0").unwrap_err();
        assert!(err.message.contains("Board size must be at least 1"));
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let err = EngineConfig::from_toml_str("board_size = 100000").unwrap_err();
        assert!(err.message.contains("exceeds the maximum of 64"));
        assert_eq!(
            EngineConfig::default().with_board_size(MAX_BOARD_SIZE).validate(),
            Ok(())
        );
    }

    #[test]
    fn test_validation_rejects_duplicate_labels() {
        let config = EngineConfig::new(
            vec![Player::new("X", "blue"), Player::new("X", "green")],
            3,
        );
        assert_eq!(
            config.validate(),
            Err(SetupError::DuplicateLabel("X".to_string()))
        );
    }

    #[test]
    fn test_malformed_toml() {
        let err = EngineConfig::from_toml_str("board_size = \"big\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = EngineConfig::load_or_default("nonexistent_tictactoe.toml").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tictactoe.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "board_size = 5").unwrap();

        let config = EngineConfig::from_file(&path).unwrap();
        assert_eq!(*config.board_size(), 5);
        assert_eq!(config.players(), &default_players());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = EngineConfig::default().to_toml().unwrap();
        let config = EngineConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
