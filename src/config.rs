use crate::grid::Grid;
use crate::GridInt;

/// 640x480 board split into 20 pixel cells.
pub const DEFAULT_GRID_WIDTH: GridInt = 32;
pub const DEFAULT_GRID_HEIGHT: GridInt = 24;
pub const DEFAULT_TICKS_PER_SECOND: u32 = 20;

/// Terminal columns per grid cell, so cells come out roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Where a fresh apple may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplePlacement {
    /// Any free cell. Falls back to any cell once the snake covers the board.
    #[default]
    AvoidSnake,
    /// Any cell, including ones under the snake.
    Anywhere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub grid: Grid,
    pub apple_placement: ApplePlacement,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
    }
}

impl GameConfig {
    pub fn new(width: GridInt, height: GridInt) -> Self {
        Self {
            grid: Grid::new(width, height),
            apple_placement: ApplePlacement::default(),
        }
    }

    pub fn with_apple_placement(mut self, apple_placement: ApplePlacement) -> Self {
        self.apple_placement = apple_placement;
        self
    }
}
