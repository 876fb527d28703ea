//! Command-line interface for the tic-tac-toe front-end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::{ConfigError, EngineConfig};
use tracing::instrument;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with score tracking", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the TOML config file; defaults are used if it does not exist
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Override the board size from the config file
    #[arg(long, global = true)]
    pub board_size: Option<usize>,

    /// Do not color labels and messages
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Play an interactive game
    #[default]
    Play,

    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// Loads the config file (or defaults) and applies command-line overrides.
    #[instrument(skip(self), fields(path = %self.config.display()))]
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let mut config = EngineConfig::load_or_default(&self.config)?;
        if let Some(size) = self.board_size {
            config = config.with_board_size(size);
            config.validate()?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.command.unwrap_or_default(), Command::Play);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_board_size_override() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--config",
            "does_not_exist.toml",
            "--board-size",
            "5",
            "config",
        ]);
        assert_eq!(cli.command, Some(Command::Config));
        let config = cli.engine_config().unwrap();
        assert_eq!(*config.board_size(), 5);
    }

    #[test]
    fn test_zero_board_size_rejected() {
        let cli = Cli::parse_from(["tictactoe", "-c", "does_not_exist.toml", "--board-size", "0"]);
        let err = cli.engine_config().unwrap_err();
        assert!(err.message.contains("Board size must be at least 1"));
    }

    #[test]
    fn test_oversized_board_rejected() {
        let cli = Cli::parse_from(["tictactoe", "-c", "does_not_exist.toml", "--board-size", "100000"]);
        let err = cli.engine_config().unwrap_err();
        assert!(err.message.contains("exceeds the maximum of 64"));
    }

    #[test]
    fn test_config_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"board_size = 4

[[players]]
label = "A"
color = "red"

[[players]]
label = "B"
color = "yellow""#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let config = Cli::parse_from(["tictactoe", "--config", path]).engine_config().unwrap();
        assert_eq!(*config.board_size(), 4);
        assert_eq!(config.players()[1].label(), "B");

        let config = Cli::parse_from(["tictactoe", "--config", path, "--board-size", "6"])
            .engine_config()
            .unwrap();
        assert_eq!(*config.board_size(), 6);
        assert_eq!(config.players()[0].color(), "red");
    }

    #[test]
    fn test_invalid_config_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = \"big\"").unwrap();
        let cli = Cli::parse_from(["tictactoe", "--config", file.path().to_str().unwrap()]);
        let err = cli.engine_config().unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
