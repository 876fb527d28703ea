//! Terminal front-end for the tic-tac-toe engine.
//!
//! A thin presentation layer: it reads engine state to draw the board,
//! forwards typed cell coordinates to the engine and redraws from the
//! result. No game rules live here.
//!
//! # Architecture
//!
//! - **Table**: per-selection controller (validate, apply, announce, rotate)
//! - **Renderer**: board, banner and score line as text
//! - **Input**: parsing of typed commands
//! - **Play loop**: reads commands and redraws until the user quits

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod input;
mod play;
mod render;
mod table;

pub use cli::{Cli, Command};
pub use input::{Action, HELP, InputError, parse_action};
pub use play::run;
pub use render::Renderer;
pub use table::{Banner, Outcome, Table};
