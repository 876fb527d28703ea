//! Parsing of typed commands.

use derive_more::Display;
use tracing::instrument;

/// A user request read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Claim the cell at `(row, col)`.
    Select {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// Clear the board and start over.
    NewGame,
    /// Show the command summary.
    Help,
    /// Leave the program.
    Quit,
}

/// Input that could not be turned into an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Not a recognised command.
    #[display("Unknown command {:?}; type 'help' for the list of commands", _0)]
    Unknown(String),

    /// Coordinates past the edge of the board.
    #[display("Row and column must each be between 0 and {}", _0)]
    OffBoard(usize),
}

impl std::error::Error for InputError {}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  <row> <col>   claim a cell (zero-based, e.g. `1 2` or `1,2`)
  new           start a new game (scores are kept)
  help          show this message
  quit          leave";

/// Parses one line of input for a board of the given size.
///
/// Blank lines yield `Ok(None)`. Coordinates are checked against the board
/// here so that only on-board cells reach the engine.
#[instrument]
pub fn parse_action(line: &str, board_size: usize) -> Result<Option<Action>, InputError> {
    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.as_slice() {
        [] => Ok(None),
        [word] => match word.to_lowercase().as_str() {
            "new" | "n" | "reset" => Ok(Some(Action::NewGame)),
            "help" | "h" | "?" => Ok(Some(Action::Help)),
            "quit" | "q" | "exit" => Ok(Some(Action::Quit)),
            _ => Err(InputError::Unknown(line.trim().to_string())),
        },
        [row, col] => {
            let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) else {
                return Err(InputError::Unknown(line.trim().to_string()));
            };
            if row >= board_size || col >= board_size {
                return Err(InputError::OffBoard(board_size.saturating_sub(1)));
            }
            Ok(Some(Action::Select { row, col }))
        }
        _ => Err(InputError::Unknown(line.trim().to_string())),
    }
}
