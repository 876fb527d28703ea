//! Error types for the engine.

use crate::invariants::InvariantViolation;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a move on a valid coordinate was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum IllegalMoveReason {
    /// The cell already carries a label.
    #[display("cell already claimed by {}", _0)]
    CellOccupied(String),

    /// The game has been won or tied.
    #[display("game is already over")]
    GameOver,

    /// No configured player carries this label.
    #[display("no player is labelled {:?}", _0)]
    UnknownPlayer(String),
}

/// Error returned by move validation and application.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Coordinate outside the board. The caller generated a bad position.
    #[display("Cell ({}, {}) is outside the {}x{} board", row, col, size, size)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the board.
        size: usize,
    },

    /// Move refused by the game rules. Expected during normal play.
    #[display("Illegal move at ({}, {}): {}", row, col, reason)]
    IllegalMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Rule that refused the move.
        reason: IllegalMoveReason,
    },
}

impl MoveError {
    /// True for rule rejections, which front-ends silently ignore.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, MoveError::IllegalMove { .. })
    }

    /// True for coordinate errors, which indicate a caller bug.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, MoveError::OutOfRange { .. })
    }
}

impl std::error::Error for MoveError {}

/// Error returned when constructing an engine from an invalid setup.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SetupError {
    /// The player sequence is empty.
    #[display("At least one player is required")]
    NoPlayers,

    /// A player has an empty label, which would be indistinguishable from an empty cell.
    #[display("Player {} has an empty label", index)]
    EmptyLabel {
        /// Position of the offending player in the sequence.
        index: usize,
    },

    /// Two players share a label.
    #[display("Player label {:?} is used more than once", _0)]
    DuplicateLabel(String),

    /// The board has no cells.
    #[display("Board size must be at least 1")]
    ZeroBoardSize,

    /// The board is larger than the engine will allocate.
    #[display("Board size {} exceeds the maximum of {}", size, max)]
    BoardTooLarge {
        /// Requested side length.
        size: usize,
        /// Largest accepted side length.
        max: usize,
    },
}

impl std::error::Error for SetupError {}

/// Error returned when a serialized engine or board describes a state the
/// engine could never reach.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SnapshotError {
    /// Player sequence or board size is not a playable setup.
    #[display("Invalid setup: {}", _0)]
    Setup(SetupError),

    /// The cell list does not cover a `size × size` board.
    #[display("Board of size {} cannot hold {} cells", size, found)]
    CellCount {
        /// Side length of the board.
        size: usize,
        /// Number of cells in the snapshot.
        found: usize,
    },

    /// A cell sits at a coordinate other than its row-major slot.
    #[display("Cell {} is not at its row-major position", index)]
    MisplacedCell {
        /// Index of the offending cell.
        index: usize,
    },

    /// The turn pointer names a player that does not exist.
    #[display("Turn index {} is past the {} configured players", current, players)]
    TurnOutOfRange {
        /// Stored turn index.
        current: usize,
        /// Number of configured players.
        players: usize,
    },

    /// The stored win table is not the table for this board size.
    #[display("Winning combinations do not match a {}x{} board", _0, _0)]
    WinTable(usize),

    /// The state breaks one or more engine invariants.
    #[display("Engine invariants violated: {}", join_violations(_0))]
    Invariants(Vec<InvariantViolation>),
}

impl std::error::Error for SnapshotError {}

fn join_violations(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<SetupError> for ConfigError {
    #[track_caller]
    fn from(err: SetupError) -> Self {
        Self::new(format!("Invalid setup: {}", err))
    }
}
