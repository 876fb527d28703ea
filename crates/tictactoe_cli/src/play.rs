//! Interactive read-render loop.

use crate::input::{Action, HELP, parse_action};
use crate::{Renderer, Table};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Plays on `table` reading commands from `input` and drawing to `out`.
///
/// Returns when the user quits or the input ends. Selections the rules
/// refuse are ignored without a message, like clicks on an occupied cell.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    table: &mut Table,
    renderer: &Renderer,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", renderer.frame(table))?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        match parse_action(&line, table.engine().board_size()) {
            Ok(None) => {}
            Ok(Some(Action::Select { row, col })) => {
                if let Some(outcome) = table.select(row, col)? {
                    debug!(?outcome, "Selection accepted");
                    writeln!(out, "{}", renderer.frame(table))?;
                }
            }
            Ok(Some(Action::NewGame)) => {
                table.new_game();
                writeln!(out, "{}", renderer.frame(table))?;
            }
            Ok(Some(Action::Help)) => writeln!(out, "{}", HELP)?,
            Ok(Some(Action::Quit)) => {
                info!("Quit requested");
                break;
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
        prompt(out)?;
    }

    writeln!(out)?;
    writeln!(out, "Final scores: {}", renderer.scores(table.engine().scores()))?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
