//! The game-state engine.
//!
//! [`GameEngine`] owns the board, the player rotation, the table of winning
//! combinations and the scoreboard. It is the single authority on the game
//! rules; front-ends only read its state and forward cell selections.
//!
//! # State machine
//!
//! ```text
//! InProgress --apply_move--> InProgress | Won | Tied
//! Won | Tied --reset--> InProgress
//! ```
//!
//! `apply_move` never advances the turn. The caller decides when to call
//! [`GameEngine::advance_turn`], which lets it announce the winner (the
//! current player) before anything rotates.

use crate::config::MAX_BOARD_SIZE;
use crate::error::{IllegalMoveReason, MoveError, SetupError, SnapshotError};
use crate::{Board, EngineConfig, GameStatus, Move, Player, Position, Scoreboard, invariants, rules};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine for any square board size and any number of players.
///
/// Deserializing a snapshot re-validates it; a state the engine could not
/// have reached is rejected with a [`SnapshotError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EngineSnapshot")]
pub struct GameEngine {
    players: Vec<Player>,
    current: usize,
    board: Board,
    combinations: Vec<Vec<Position>>,
    status: GameStatus,
    winning_combination: Vec<Position>,
    scores: Scoreboard,
}

/// Checks that a player sequence and board size describe a playable game.
pub(crate) fn validate_setup(players: &[Player], board_size: usize) -> Result<(), SetupError> {
    if players.is_empty() {
        return Err(SetupError::NoPlayers);
    }
    let mut seen = HashSet::new();
    for (index, player) in players.iter().enumerate() {
        if player.label().is_empty() {
            return Err(SetupError::EmptyLabel { index });
        }
        if !seen.insert(player.label().as_str()) {
            return Err(SetupError::DuplicateLabel(player.label().clone()));
        }
    }
    if board_size == 0 {
        return Err(SetupError::ZeroBoardSize);
    }
    if board_size > MAX_BOARD_SIZE {
        return Err(SetupError::BoardTooLarge {
            size: board_size,
            max: MAX_BOARD_SIZE,
        });
    }
    Ok(())
}

/// Unchecked serialized form of [`GameEngine`].
#[derive(Deserialize)]
struct EngineSnapshot {
    players: Vec<Player>,
    current: usize,
    board: Board,
    combinations: Vec<Vec<Position>>,
    status: GameStatus,
    winning_combination: Vec<Position>,
    scores: Scoreboard,
}

impl TryFrom<EngineSnapshot> for GameEngine {
    type Error = SnapshotError;

    #[instrument(skip(snapshot), fields(players = snapshot.players.len(), size = snapshot.board.size()))]
    fn try_from(snapshot: EngineSnapshot) -> Result<Self, Self::Error> {
        let size = snapshot.board.size();
        validate_setup(&snapshot.players, size).map_err(SnapshotError::Setup)?;
        if snapshot.current >= snapshot.players.len() {
            return Err(SnapshotError::TurnOutOfRange {
                current: snapshot.current,
                players: snapshot.players.len(),
            });
        }
        if snapshot.combinations != rules::winning_combinations(size) {
            return Err(SnapshotError::WinTable(size));
        }

        let engine = Self {
            players: snapshot.players,
            current: snapshot.current,
            board: snapshot.board,
            combinations: snapshot.combinations,
            status: snapshot.status,
            winning_combination: snapshot.winning_combination,
            scores: snapshot.scores,
        };
        invariants::check_all(&engine).map_err(SnapshotError::Invariants)?;
        debug!(status = %engine.status, "Snapshot restored");
        Ok(engine)
    }
}

impl GameEngine {
    /// Creates an engine with an empty board, the first player to move and
    /// every score at zero.
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] for an empty player sequence, an empty or
    /// duplicated label, or a zero board size.
    #[instrument(skip(players), fields(players = players.len()))]
    pub fn new(players: Vec<Player>, board_size: usize) -> Result<Self, SetupError> {
        validate_setup(&players, board_size)?;

        let engine = Self {
            scores: Scoreboard::from_players(&players),
            players,
            current: 0,
            board: Board::new(board_size),
            combinations: rules::winning_combinations(board_size),
            status: GameStatus::InProgress,
            winning_combination: Vec::new(),
        };
        info!(
            first = %engine.current_player(),
            combinations = engine.combinations.len(),
            "Engine created"
        );
        Ok(engine)
    }

    /// Creates an engine from a loaded configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &EngineConfig) -> Result<Self, SetupError> {
        Self::new(config.players().clone(), *config.board_size())
    }

    /// Checks whether `label` may claim the cell at `(row, col)`.
    ///
    /// The move is valid when the game is in progress, the cell is empty and
    /// the label belongs to a configured player.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if the coordinate is off the board.
    #[instrument(skip(self))]
    pub fn is_valid_move(&self, row: usize, col: usize, label: &str) -> Result<bool, MoveError> {
        let pos = self.check_bounds(row, col)?;
        Ok(self.rejection(pos, label).is_none())
    }

    /// Claims the cell at `(row, col)` for `label` and updates the status.
    ///
    /// After writing the label the win table is scanned in order. The first
    /// completed combination is recorded, the status becomes
    /// [`GameStatus::Won`] and the label's score goes up by one. Otherwise a
    /// full board becomes [`GameStatus::Tied`]. The turn is not advanced.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for an off-board coordinate and
    /// [`MoveError::IllegalMove`] whenever [`Self::is_valid_move`] would be
    /// false. Nothing changes on error.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn apply_move(&mut self, row: usize, col: usize, label: &str) -> Result<GameStatus, MoveError> {
        let pos = self.check_bounds(row, col)?;
        if let Some(reason) = self.rejection(pos, label) {
            debug!(%reason, "Move rejected");
            return Err(MoveError::IllegalMove { row, col, reason });
        }

        self.board.claim(pos, label);

        if let Some(combo) = rules::first_complete(&self.board, &self.combinations) {
            self.winning_combination = combo.to_vec();
            self.status = GameStatus::Won;
            let total = self.scores.increment(label);
            info!(winner = label, ?total, "Game won");
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Tied;
            info!("Game tied");
        } else {
            debug!(%pos, label, "Cell claimed");
        }

        self.assert_invariants();
        Ok(self.status)
    }

    /// Rotates to the next player in the configured sequence.
    #[instrument(skip(self))]
    pub fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        debug!(next = %self.current_player(), "Turn advanced");
    }

    /// Starts a new game on the same engine.
    ///
    /// Clears the board, the winning combination and the status. Scores and
    /// the current player carry over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.winning_combination.clear();
        self.status = GameStatus::InProgress;
        info!(next = %self.current_player(), scores = %self.scores, "Board reset");
        self.assert_invariants();
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Returns the configured player sequence.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once a winning combination has been completed.
    pub fn has_winner(&self) -> bool {
        self.status.is_won()
    }

    /// True once the board filled up with no winner.
    pub fn is_tied(&self) -> bool {
        self.status.is_tied()
    }

    /// Label that completed the winning combination, if any.
    pub fn winner(&self) -> Option<&str> {
        self.winning_combination
            .first()
            .and_then(|pos| self.board.get(*pos))
            .and_then(Move::label)
    }

    /// The completed combination, empty unless the game is won.
    pub fn winning_combination(&self) -> &[Position] {
        &self.winning_combination
    }

    /// Every winning combination in scan order.
    pub fn winning_combinations(&self) -> &[Vec<Position>] {
        &self.combinations
    }

    /// Cumulative scores.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the board.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Reads a single cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if the coordinate is off the board.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Move, MoveError> {
        let pos = self.check_bounds(row, col)?;
        self.board.get(pos).ok_or(MoveError::OutOfRange {
            row,
            col,
            size: self.board.size(),
        })
    }

    pub(crate) fn current_index(&self) -> usize {
        self.current
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<Position, MoveError> {
        let pos = Position::new(row, col);
        if self.board.contains(pos) {
            Ok(pos)
        } else {
            Err(MoveError::OutOfRange {
                row,
                col,
                size: self.board.size(),
            })
        }
    }

    fn rejection(&self, pos: Position, label: &str) -> Option<IllegalMoveReason> {
        if !self.status.is_in_progress() {
            return Some(IllegalMoveReason::GameOver);
        }
        if let Some(owner) = self.board.get(pos).and_then(Move::label) {
            return Some(IllegalMoveReason::CellOccupied(owner.to_owned()));
        }
        if !self.players.iter().any(|p| p.label() == label) {
            return Some(IllegalMoveReason::UnknownPlayer(label.to_owned()));
        }
        None
    }

    fn assert_invariants(&self) {
        debug_assert_eq!(invariants::check_all(self), Ok(()), "engine invariants violated");
    }
}
