use crate::grid::Grid;
use crate::Coords;
use Direction::*;
use MoveResult::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    /// Unit vector, with y growing downward.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Coords, old_head: Coords, vacated: Option<Coords> },
    Crashed { at: Coords }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Head first.
    body: Vec<Coords>,
    direction: Direction,
    pending: Option<Direction>,
    desired_len: usize,
}

impl Snake {
    pub fn new(pos: Coords, direction: Direction) -> Self {
        Snake { body: vec![pos], direction, pending: None, desired_len: 1 }
    }

    /// Builds a snake from head-first segments, already at its desired length.
    pub fn from_segments(body: Vec<Coords>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "a snake needs at least a head");
        let desired_len = body.len();
        Snake { body, direction, pending: None, desired_len }
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn desired_len(&self) -> usize {
        self.desired_len
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn occupies(&self, pos: Coords) -> bool {
        self.body.contains(&pos)
    }

    /// Queues a turn for the next move. Reversals are checked against the
    /// current direction, so two quick turns can't fold the snake onto its neck.
    pub fn queue_direction(&mut self, new_direction: Direction) {
        if !self.direction.is_opposite(new_direction) {
            self.pending = Some(new_direction);
        }
    }

    pub fn apply_pending(&mut self) {
        if let Some(dir) = self.pending.take() {
            self.direction = dir;
        }
    }

    /// Advances one cell. The neck is skipped in the collision check since it
    /// can never be entered without reversing.
    pub fn move_step(&mut self, grid: &Grid) -> MoveResult {
        let old_head = self.head();
        let new_head = grid.step(old_head, self.direction);

        if self.body.len() > 2 && self.body[2..].contains(&new_head) {
            return Crashed { at: new_head };
        }

        self.body.insert(0, new_head);

        let vacated = if self.body.len() > self.desired_len {
            self.body.pop()
        } else {
            None
        };

        Moved { new_head, old_head, vacated }
    }

    pub fn grow(&mut self) {
        self.desired_len += 1;
    }

    pub fn reset(&mut self, pos: Coords, direction: Direction) {
        *self = Snake::new(pos, direction);
    }
}
