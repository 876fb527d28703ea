//! Table controller: turns cell selections into engine calls and feedback.

use tictactoe_engine::{GameEngine, GameStatus, MoveError, Player, Position};
use tracing::{debug, info, instrument};

/// Message shown above the board, with the color it should be drawn in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Text to display.
    pub text: String,
    /// Color name, e.g. "blue".
    pub color: String,
}

impl Banner {
    /// Creates a banner.
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: color.into(),
        }
    }

    /// Banner shown before the first move of every game.
    pub fn welcome() -> Self {
        Self::new("Let's Play!", "black")
    }
}

/// What happened after an accepted selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The move completed a line.
    Won {
        /// The player who moved last.
        winner: Player,
        /// Cells to highlight.
        cells: Vec<Position>,
    },
    /// The board is full with no winner.
    Tied,
    /// The game continues with this player.
    NextTurn(Player),
}

/// A game in front of the user: the engine plus what the view shows.
#[derive(Debug, Clone)]
pub struct Table {
    engine: GameEngine,
    banner: Banner,
    highlighted: Vec<Position>,
}

impl Table {
    /// Seats an engine at a fresh table.
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            banner: Banner::welcome(),
            highlighted: Vec::new(),
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the current banner.
    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    /// Cells currently highlighted as the winning line.
    pub fn highlighted(&self) -> &[Position] {
        &self.highlighted
    }

    /// Handles a click on `(row, col)` for the current player.
    ///
    /// Selections the rules refuse (occupied cell, finished game) are
    /// ignored and return `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if the coordinate is not on the
    /// board, which means the caller built a bad position.
    #[instrument(skip(self))]
    pub fn select(&mut self, row: usize, col: usize) -> Result<Option<Outcome>, MoveError> {
        let player = self.engine.current_player().clone();
        if !self.engine.is_valid_move(row, col, player.label())? {
            debug!("Ignoring selection");
            return Ok(None);
        }

        let outcome = match self.engine.apply_move(row, col, player.label())? {
            GameStatus::Won => {
                let cells = self.engine.winning_combination().to_vec();
                self.highlighted = cells.clone();
                self.banner = Banner::new(format!("{} wins!", player.label()), player.color().as_str());
                info!(winner = %player, "Announcing winner");
                Outcome::Won {
                    winner: player,
                    cells,
                }
            }
            GameStatus::Tied => {
                self.banner = Banner::new("It's a tie!", "gray");
                info!("Announcing tie");
                Outcome::Tied
            }
            GameStatus::InProgress => {
                self.engine.advance_turn();
                let next = self.engine.current_player().clone();
                self.banner = Banner::new(format!("{}'s turn", next.label()), "black");
                Outcome::NextTurn(next)
            }
        };
        Ok(Some(outcome))
    }

    /// Starts a new game and clears the view. Scores carry over.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.engine.reset();
        self.banner = Banner::welcome();
        self.highlighted.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::new(
            GameEngine::new(
                vec![Player::new("X", "blue"), Player::new("O", "green")],
                3,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_turn_banner() {
        let mut table = table();
        assert_eq!(table.banner(), &Banner::welcome());
        let outcome = table.select(1, 1).unwrap();
        assert_eq!(outcome, Some(Outcome::NextTurn(Player::new("O", "green"))));
        assert_eq!(table.banner(), &Banner::new("O's turn", "black"));
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut table = table();
        table.select(1, 1).unwrap();
        assert_eq!(table.select(1, 1), Ok(None));
        // Still O's turn; nothing changed.
        assert_eq!(table.engine().current_player().label(), "O");
        assert_eq!(table.banner(), &Banner::new("O's turn", "black"));
    }

    #[test]
    fn test_out_of_range_propagates() {
        let mut table = table();
        assert!(table.select(0, 3).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_win_highlights_and_announces_in_player_color() {
        let mut table = table();
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            table.select(r, c).unwrap();
        }
        let outcome = table.select(0, 2).unwrap();
        let line = vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];
        assert_eq!(
            outcome,
            Some(Outcome::Won {
                winner: Player::new("X", "blue"),
                cells: line.clone(),
            })
        );
        assert_eq!(table.highlighted(), line.as_slice());
        assert_eq!(table.banner(), &Banner::new("X wins!", "blue"));
        assert_eq!(table.engine().scores().to_string(), "X: 1   O: 0");

        // Clicks after the win are ignored.
        assert_eq!(table.select(2, 2), Ok(None));
    }

    #[test]
    fn test_tie_banner() {
        let mut table = table();
        let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];
        let mut last = None;
        for (r, c) in moves {
            last = table.select(r, c).unwrap();
        }
        assert_eq!(last, Some(Outcome::Tied));
        assert_eq!(table.banner(), &Banner::new("It's a tie!", "gray"));
        assert!(table.highlighted().is_empty());
    }

    #[test]
    fn test_new_game_clears_view_keeps_scores() {
        let mut table = table();
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            table.select(r, c).unwrap();
        }
        table.new_game();
        assert_eq!(table.banner(), &Banner::welcome());
        assert!(table.highlighted().is_empty());
        assert_eq!(table.engine().scores().get("X"), Some(1));
        // The winner keeps the move.
        assert_eq!(table.engine().current_player().label(), "X");
    }
}
