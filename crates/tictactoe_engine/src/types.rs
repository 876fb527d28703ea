//! Core domain types for tic-tac-toe.

use crate::error::{SetupError, SnapshotError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A participant in the game.
///
/// Identity is by label: two players with the same label are the same
/// player as far as the engine is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Mark written into claimed cells (e.g. "X").
    label: String,
    /// Display color used when announcing this player.
    color: String,
}

impl Player {
    /// Creates a new player.
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// A cell coordinate on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({}, {})", row, col)]
pub struct Position {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// The content of one cell: its coordinates and, once claimed, a label.
///
/// A cell only ever moves from empty to claimed. Going back requires a
/// board reset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    position: Position,
    label: Option<String>,
}

impl Move {
    /// Creates an unclaimed cell at the given position.
    pub fn empty(position: Position) -> Self {
        Self {
            position,
            label: None,
        }
    }

    /// Returns the coordinates of this cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the row of this cell.
    pub fn row(&self) -> usize {
        self.position.row
    }

    /// Returns the column of this cell.
    pub fn col(&self) -> usize {
        self.position.col
    }

    /// Returns the claiming label, or `None` for an empty cell.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Checks whether a player has claimed this cell.
    pub fn is_claimed(&self) -> bool {
        self.label.is_some()
    }
}

/// Square board of `size × size` cells stored in row-major order.
///
/// A board is at least 1×1. Deserialized boards are checked for that and
/// for one correctly placed cell per coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardCells")]
pub struct Board {
    size: usize,
    cells: Vec<Move>,
}

/// Unchecked serialized form of [`Board`].
#[derive(Deserialize)]
struct BoardCells {
    size: usize,
    cells: Vec<Move>,
}

impl TryFrom<BoardCells> for Board {
    type Error = SnapshotError;

    fn try_from(BoardCells { size, cells }: BoardCells) -> Result<Self, Self::Error> {
        if size == 0 {
            return Err(SnapshotError::Setup(SetupError::ZeroBoardSize));
        }
        if size.checked_mul(size) != Some(cells.len()) {
            return Err(SnapshotError::CellCount {
                size,
                found: cells.len(),
            });
        }
        if let Some(index) = cells
            .iter()
            .enumerate()
            .position(|(i, cell)| cell.position != Position::new(i / size, i % size))
        {
            return Err(SnapshotError::MisplacedCell { index });
        }
        Ok(Self { size, cells })
    }
}

impl Board {
    /// Creates an empty board with coordinates pre-filled.
    ///
    /// `size` has already passed setup validation.
    #[instrument]
    pub(crate) fn new(size: usize) -> Self {
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Move::empty(Position::new(row, col))))
            .collect();
        Self { size, cells }
    }

    /// Returns the side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks whether the position lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Option<&Move> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Checks if a cell is on the board and unclaimed.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|cell| !cell.is_claimed())
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Move] {
        &self.cells
    }

    /// Iterates over the board one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Move]> {
        self.cells.chunks(self.size)
    }

    /// Writes a label into an unclaimed cell.
    ///
    /// Callers validate the move first; claiming an occupied or
    /// off-board cell is a no-op.
    pub(crate) fn claim(&mut self, pos: Position, label: &str) {
        if let Some(i) = self.index(pos)
            && self.cells[i].label.is_none()
        {
            self.cells[i].label = Some(label.to_owned());
        }
    }

    /// Clears every cell while keeping its coordinates.
    pub(crate) fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.label = None;
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.size + pos.col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Current status of the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
)]
pub enum GameStatus {
    /// Moves are still being accepted.
    #[default]
    #[strum(to_string = "in progress")]
    InProgress,
    /// A winning combination was completed.
    #[strum(to_string = "won")]
    Won,
    /// The board filled up with no winning combination.
    #[strum(to_string = "tied")]
    Tied,
}
