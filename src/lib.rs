pub mod collision;
pub mod constants;
pub mod entities;
pub mod error;
pub mod game;
pub mod input;
pub mod mask;
pub mod shop;
pub mod spawner;
pub mod types;
pub mod upgrades;

pub use error::{GameError, GameResult};
pub use game::{Game, GameState, RotateDirection, Snapshot};
