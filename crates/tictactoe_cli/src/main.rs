//! Tic-tac-toe terminal front-end.

use anyhow::Result;
use clap::Parser;
use tictactoe_cli::{Cli, Command, Renderer, Table, run};
use tictactoe_engine::GameEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.engine_config()?;

    match cli.command.unwrap_or_default() {
        Command::Play => {
            let engine = GameEngine::from_config(&config)?;
            let renderer = if cli.no_color {
                Renderer::plain()
            } else {
                Renderer::colored()
            };
            info!(board_size = engine.board_size(), "Starting game");

            let mut table = Table::new(engine);
            let stdin = std::io::stdin();
            run(&mut table, &renderer, stdin.lock(), &mut std::io::stdout())?;
        }
        Command::Config => print!("{}", config.to_toml()?),
    }

    Ok(())
}
