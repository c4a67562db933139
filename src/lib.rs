//! Snake on a wrap-around grid.
//!
//! - `game`: the simulation (`GameState::tick`), free of any terminal code
//! - `render`, `term`, `input`, `app`: the crossterm front end

pub mod app;
pub mod config;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod snake;
pub mod term;

pub type GridInt = u16;
pub type Coords = (u16, u16);

pub use config::{ApplePlacement, GameConfig};
pub use game::{GameState, TickEvent, TickResult};
pub use grid::Grid;
pub use snake::{Direction, Snake};
