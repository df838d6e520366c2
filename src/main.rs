use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use lottery::config::Args;
use lottery::console::Console;
use lottery::{DrawEngine, Game, GameConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = GameConfig::from(Args::parse());

    let engine = match config.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            DrawEngine::seeded(seed)
        }
        None => DrawEngine::new(),
    };
    let console = Console::new(io::stdin().lock(), io::stdout().lock(), config.clear_screen);
    let mut game = Game::new(engine, console);
    game.run().context("Game stopped")?;
    Ok(())
}
