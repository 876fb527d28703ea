//! Tic-tac-toe game-state engine.
//!
//! Pure game logic with no rendering: board representation, move
//! validation, win-combination detection, turn rotation and score
//! accumulation. Any front-end (terminal, GUI) drives a [`GameEngine`]
//! through its in-process API.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new(
//!     vec![Player::new("X", "blue"), Player::new("O", "green")],
//!     3,
//! )?;
//!
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     let label = engine.current_player().label().clone();
//!     if engine.apply_move(row, col, &label)? == GameStatus::InProgress {
//!         engine.advance_turn();
//!     }
//! }
//!
//! assert_eq!(engine.status(), GameStatus::Won);
//! assert_eq!(engine.scores().get("X"), Some(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod engine;
mod error;
pub mod invariants;
pub mod rules;
mod scores;
mod types;

pub use config::{DEFAULT_BOARD_SIZE, EngineConfig, MAX_BOARD_SIZE, default_players};
pub use engine::GameEngine;
pub use error::{ConfigError, IllegalMoveReason, MoveError, SetupError, SnapshotError};
pub use scores::Scoreboard;
pub use types::{Board, GameStatus, Move, Player, Position};
