use crate::snake::Direction;
use crate::{Coords, GridInt};

/// Fixed board dimensions, in cells. Movement wraps around every edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: GridInt,
    height: GridInt,
}

impl Grid {
    pub fn new(width: GridInt, height: GridInt) -> Self {
        assert!(width > 0 && height > 0, "grid must have at least one cell");
        Grid { width, height }
    }

    pub fn width(&self) -> GridInt {
        self.width
    }

    pub fn height(&self) -> GridInt {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn center(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }

    pub fn contains(&self, pos: Coords) -> bool {
        pos.0 < self.width && pos.1 < self.height
    }

    /// The neighbouring cell in `direction`, wrapping to the opposite edge.
    pub fn step(&self, pos: Coords, direction: Direction) -> Coords {
        let (dx, dy) = direction.delta();
        let x = (i32::from(pos.0) + dx).rem_euclid(i32::from(self.width));
        let y = (i32::from(pos.1) + dy).rem_euclid(i32::from(self.height));
        (x as GridInt, y as GridInt)
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coords> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}
