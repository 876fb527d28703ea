//! End-to-end tests for the interactive loop.

use std::io::Cursor;
use tictactoe_cli::{HELP, Renderer, Table, run};
use tictactoe_engine::{GameEngine, GameStatus, Player};

fn table() -> Table {
    Table::new(
        GameEngine::new(
            vec![Player::new("X", "blue"), Player::new("O", "green")],
            3,
        )
        .expect("valid setup"),
    )
}

fn session(table: &mut Table, script: &str) -> String {
    let mut out = Vec::new();
    run(table, &Renderer::plain(), Cursor::new(script), &mut out).expect("session runs");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn test_win_then_new_game() {
    let mut table = table();
    let output = session(&mut table, "0 0\n1 0\n0 1\n1 1\n0 2\nnew\nquit\n");

    assert!(output.contains("O's turn"));
    assert!(output.contains("X wins!"));
    assert!(output.contains("0 [X]|[X]|[X]"));
    assert!(output.contains("X: 1   O: 0"));
    assert!(output.ends_with("Final scores: X: 1   O: 0\n"));

    assert_eq!(table.engine().status(), GameStatus::InProgress);
    assert_eq!(table.engine().scores().get("X"), Some(1));
}

#[test]
fn test_occupied_cell_is_silently_ignored() {
    let mut table = table();
    let output = session(&mut table, "1 1\n1 1\n");

    // Initial frame plus one frame for the accepted move.
    assert_eq!(output.matches("Let's Play!").count(), 1);
    assert_eq!(output.matches("O's turn").count(), 1);
    assert!(!output.contains("Illegal"));
    assert_eq!(table.engine().current_player().label(), "O");
}

#[test]
fn test_bad_input_reports_and_continues() {
    let mut table = table();
    let output = session(&mut table, "9 9\nfoo\nhelp\n2 2\n");

    assert!(output.contains("Row and column must each be between 0 and 2"));
    assert!(output.contains("Unknown command \"foo\""));
    assert!(output.contains(HELP));
    assert_eq!(
        table.engine().cell(2, 2).expect("on board").label(),
        Some("X")
    );
}

#[test]
fn test_tie_announced() {
    let mut table = table();
    let output = session(&mut table, "0 0\n0 1\n0 2\n1 1\n1 0\n1 2\n2 1\n2 0\n2 2\n");
    assert!(output.contains("It's a tie!"));
    assert!(output.ends_with("Final scores: X: 0   O: 0\n"));
}
