//! Text rendering of the table.

use crate::{Banner, Table};
use crossterm::style::{Color, Stylize};
use tictactoe_engine::Scoreboard;

/// Draws the board, banner and scores as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Renderer without terminal colors.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Renderer that paints labels and banners in their player colors.
    pub fn colored() -> Self {
        Self { color: true }
    }

    /// Scores, banner and board, separated by blank lines.
    pub fn frame(&self, table: &Table) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            self.scores(table.engine().scores()),
            self.banner(table.banner()),
            self.board(table)
        )
    }

    /// Score line in player order, e.g. `X: 1   O: 0`.
    pub fn scores(&self, scores: &Scoreboard) -> String {
        scores.to_string()
    }

    /// The banner text, painted in its color.
    pub fn banner(&self, banner: &Banner) -> String {
        self.paint(&banner.text, Some(banner.color.as_str()))
    }

    /// Board grid with row and column indices.
    ///
    /// Winning cells are bracketed: `[X]`.
    pub fn board(&self, table: &Table) -> String {
        let engine = table.engine();
        let size = engine.board_size();
        let width = engine
            .players()
            .iter()
            .map(|p| p.label().chars().count())
            .max()
            .unwrap_or(1);
        let margin = size.saturating_sub(1).to_string().len();
        let indent = " ".repeat(margin + 1);

        let header: Vec<String> = (0..size).map(|col| center(&col.to_string(), width + 2)).collect();
        let separator = vec!["-".repeat(width + 2); size].join("+");

        let mut lines = vec![format!("{}{}", indent, header.join(" "))];
        for (row, cells) in engine.board().rows().enumerate() {
            if row > 0 {
                lines.push(format!("{}{}", indent, separator));
            }
            let rendered: Vec<String> = cells
                .iter()
                .map(|cell| {
                    let color = cell.label().and_then(|label| {
                        engine
                            .players()
                            .iter()
                            .find(|p| p.label() == label)
                            .map(|p| p.color().as_str())
                    });
                    self.cell(
                        cell.label(),
                        color,
                        table.highlighted().contains(&cell.position()),
                        width,
                    )
                })
                .collect();
            lines.push(format!("{:>margin$} {}", row, rendered.join("|")));
        }

        lines
            .iter()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn cell(&self, label: Option<&str>, color: Option<&str>, highlighted: bool, width: usize) -> String {
        let text = label.unwrap_or("");
        let pad = width.saturating_sub(text.chars().count());
        let left = pad / 2;
        let body = format!(
            "{}{}{}",
            " ".repeat(left),
            self.paint(text, color),
            " ".repeat(pad - left)
        );
        if highlighted {
            format!("[{}]", body)
        } else {
            format!(" {} ", body)
        }
    }

    fn paint(&self, text: &str, color: Option<&str>) -> String {
        match color.and_then(terminal_color) {
            Some(color) if self.color => text.with(color).to_string(),
            _ => text.to_string(),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::colored()
    }
}

/// Maps a color name to a terminal color, if the terminal has one like it.
///
/// "black" is the default foreground and is left unpainted.
fn terminal_color(name: &str) -> Option<Color> {
    let normalized = name.trim().to_lowercase().replace(' ', "_").replace("gray", "grey");
    if normalized == "black" {
        return None;
    }
    Color::try_from(normalized.as_str()).ok()
}

fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}
