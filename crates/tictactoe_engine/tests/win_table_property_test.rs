//! Property tests for the winning-combination table.

use proptest::prelude::*;
use std::collections::HashSet;
use tictactoe_engine::rules::winning_combinations;
use tictactoe_engine::{GameEngine, Player};

proptest! {
    #[test]
    fn table_has_two_n_plus_two_lines_of_distinct_cells(size in 1usize..=12) {
        let table = winning_combinations(size);
        prop_assert_eq!(table.len(), 2 * size + 2);
        for combo in &table {
            prop_assert_eq!(combo.len(), size);
            let distinct: HashSet<_> = combo.iter().collect();
            prop_assert_eq!(distinct.len(), size);
            prop_assert!(combo.iter().all(|p| p.row < size && p.col < size));
        }
    }

    #[test]
    fn filling_one_row_wins_with_that_row(size in 1usize..=8, row_seed in any::<usize>()) {
        let row = row_seed % size;
        let mut engine = GameEngine::new(
            vec![Player::new("X", "blue"), Player::new("O", "green")],
            size,
        ).unwrap();

        for col in 0..size {
            engine.apply_move(row, col, "X").unwrap();
        }
        let table = winning_combinations(size);
        prop_assert!(engine.has_winner());
        prop_assert_eq!(engine.winning_combination(), table[row].as_slice());
    }
}
