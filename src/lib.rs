pub mod cell;
pub mod cli;
pub mod config;
pub mod game;
pub mod grid;
pub mod input;
pub mod logger;
pub mod render;
pub mod session;
pub mod snake;
pub mod term;
pub mod widget;

pub use cell::{Cell, Direction};
pub use config::{GameConfig, SettingKind};
pub use grid::Grid;
pub use session::{GameSession, GameState, TickOutcome};
pub use snake::{DeathReason, MoveResult, Snake};
