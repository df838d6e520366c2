pub mod config;
pub mod console;
pub mod draw;
pub mod error;
pub mod game;
pub mod picker;
pub mod prize;

pub use config::GameConfig;
pub use draw::DrawEngine;
pub use error::{LotteryError, PickError};
pub use game::{Game, GameState, Step};
