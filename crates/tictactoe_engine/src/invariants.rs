//! First-class invariants for the engine.
//!
//! Invariants are logical properties that must hold between any two engine
//! operations. The engine asserts them in debug builds after every mutation,
//! and they are testable independently.

use crate::{GameEngine, GameStatus, rules};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariant: the status agrees with what is on the board.
///
/// Won means the recorded combination is the first complete line in the
/// table. Tied means a full board with no complete line. In progress means
/// neither.
pub struct StatusMatchesBoard;

impl Invariant<GameEngine> for StatusMatchesBoard {
    fn holds(engine: &GameEngine) -> bool {
        let first = rules::first_complete(engine.board(), engine.winning_combinations());
        let full = rules::is_full(engine.board());
        match engine.status() {
            GameStatus::Won => first == Some(engine.winning_combination()),
            GameStatus::Tied => full && first.is_none() && engine.winning_combination().is_empty(),
            GameStatus::InProgress => {
                !full && first.is_none() && engine.winning_combination().is_empty()
            }
        }
    }

    fn description() -> &'static str {
        "Status agrees with the board (exactly one of won, tied, in progress)"
    }
}

/// Invariant: the scoreboard tracks exactly the configured players, in order.
pub struct ScoresMatchPlayers;

impl Invariant<GameEngine> for ScoresMatchPlayers {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .scores()
            .labels()
            .eq(engine.players().iter().map(|p| p.label().as_str()))
    }

    fn description() -> &'static str {
        "Scoreboard labels match the player sequence"
    }
}

/// Invariant: the win table has `2n + 2` lines of `n` distinct cells.
pub struct WinTableShape;

impl Invariant<GameEngine> for WinTableShape {
    fn holds(engine: &GameEngine) -> bool {
        let n = engine.board_size();
        let table = engine.winning_combinations();
        table.len() == 2 * n + 2
            && table.iter().all(|combo| {
                let mut cells = combo.clone();
                cells.sort();
                cells.dedup();
                combo.len() == n && cells.len() == n
            })
    }

    fn description() -> &'static str {
        "Win table holds 2n + 2 lines of n distinct cells"
    }
}

/// Invariant: the turn pointer indexes a real player.
pub struct TurnInRange;

impl Invariant<GameEngine> for TurnInRange {
    fn holds(engine: &GameEngine) -> bool {
        engine.current_index() < engine.players().len()
    }

    fn description() -> &'static str {
        "Current player index is within the player sequence"
    }
}

fn check<I: Invariant<GameEngine>>(engine: &GameEngine, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(engine) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

/// Checks every engine invariant.
///
/// Returns `Ok(())` if all hold, or every violation found.
pub fn check_all(engine: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();
    check::<StatusMatchesBoard>(engine, &mut violations);
    check::<ScoresMatchPlayers>(engine, &mut violations);
    check::<WinTableShape>(engine, &mut violations);
    check::<TurnInRange>(engine, &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
