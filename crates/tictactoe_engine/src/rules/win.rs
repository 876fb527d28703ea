//! Win detection logic for tic-tac-toe.

use crate::{Board, Position};
use tracing::instrument;

/// Builds the table of winning combinations for a board of the given size.
///
/// Order is fixed: every row top to bottom, every column left to right,
/// then the top-left→bottom-right diagonal and the top-right→bottom-left
/// diagonal. That gives `2 * size + 2` lines of `size` cells each.
#[instrument]
pub fn winning_combinations(size: usize) -> Vec<Vec<Position>> {
    let rows = (0..size).map(|row| (0..size).map(|col| Position::new(row, col)).collect::<Vec<_>>());
    let cols = (0..size).map(|col| (0..size).map(|row| Position::new(row, col)).collect::<Vec<_>>());
    let diagonal: Vec<_> = (0..size).map(|i| Position::new(i, i)).collect();
    let anti_diagonal: Vec<_> = (0..size).map(|i| Position::new(i, size - 1 - i)).collect();

    rows.chain(cols).chain([diagonal, anti_diagonal]).collect()
}

/// Returns the label shared by every cell of `combo`, if there is one.
///
/// Empty cells never complete a combination, and neither does an empty
/// combination.
pub fn complete_label<'b>(board: &'b Board, combo: &[Position]) -> Option<&'b str> {
    let (first, rest) = combo.split_first()?;
    let label = board.get(*first)?.label()?;
    rest.iter()
        .all(|pos| board.get(*pos).and_then(|cell| cell.label()) == Some(label))
        .then_some(label)
}

/// Scans the table in order and returns the first completed combination.
///
/// When one move completes several lines at once only the earliest in
/// table order is reported.
#[instrument(skip_all, fields(size = board.size()))]
pub fn first_complete<'t>(board: &Board, table: &'t [Vec<Position>]) -> Option<&'t [Position]> {
    table
        .iter()
        .find(|combo| complete_label(board, combo).is_some())
        .map(Vec::as_slice)
}
