//! Draws the board through a [`TermManager`].
//!
//! The renderer never looks into the game state: it is fed cell lists and
//! [`TickResult`] snapshots. Grid cell `(x, y)` occupies `CELL_WIDTH` columns
//! starting at column `1 + x * CELL_WIDTH`, row `1 + y`, inside a border.

use std::io::{self, Stdout, Write};

use crossterm::style::Color;

use crate::config::CELL_WIDTH;
use crate::game::TickResult;
use crate::grid::Grid;
use crate::snake::Direction;
use crate::term::TermManager;
use crate::Coords;

const BOARD_BACKGROUND_COLOR: Color = Color::Rgb { r: 0, g: 0, b: 0 };
const BORDER_COLOR: Color = Color::Rgb { r: 93, g: 216, b: 228 };
const APPLE_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };
const SNAKE_COLOR: Color = Color::Rgb { r: 0, g: 255, b: 0 };

const HELP_TEXT: &str = "Arrows/WASD move, Esc pause, q quit";

/// Terminal area needed for the board, its border and the status line.
pub fn required_size(grid: Grid) -> Coords {
    (grid.width() * CELL_WIDTH + 2, grid.height() + 3)
}

pub struct Renderer<W: Write = Stdout> {
    term: TermManager<W>,
    grid: Grid,
}

impl<W: Write> Renderer<W> {
    pub fn new(term: TermManager<W>, grid: Grid) -> Self {
        Renderer { term, grid }
    }

    pub fn term(&self) -> &TermManager<W> {
        &self.term
    }

    pub fn term_mut(&mut self) -> &mut TermManager<W> {
        &mut self.term
    }

    pub fn draw_board(&mut self, body: &[Coords], apple: Coords, direction: Direction) -> io::Result<()> {
        self.term.clear()?;
        let (width, height) = required_size(self.grid);
        self.term.draw_borders((width, height - 1), BORDER_COLOR)?;

        self.paint_apple(apple)?;
        for pos in body.iter().skip(1) {
            self.paint_body(*pos)?;
        }
        if let Some(head) = body.first() {
            self.paint_head(*head, direction)?;
        }

        self.draw_status(body.len(), false)?;
        self.term.flush()
    }

    /// Repaints only the cells touched by the tick, or the whole board after
    /// a reset.
    pub fn draw_tick(&mut self, res: &TickResult) -> io::Result<()> {
        if res.collided() {
            return self.draw_board(&res.body, res.apple, res.direction);
        }

        if let Some(vacated) = res.vacated {
            self.erase(vacated)?;
        }
        if let Some(old_head) = res.old_head {
            if res.body.len() > 1 {
                self.paint_body(old_head)?;
            }
        }
        // Apple may sit under the snake with unrestricted placement
        if !res.body.contains(&res.apple) {
            self.paint_apple(res.apple)?;
        }
        self.paint_head(res.head, res.direction)?;

        if res.ate_apple() || res.vacated.is_none() {
            self.draw_status(res.body.len(), false)?;
        }
        self.term.flush()
    }

    pub fn draw_status(&mut self, length: usize, paused: bool) -> io::Result<()> {
        let row = self.grid.height() + 2;
        let text = if paused {
            String::from("Paused, Esc to resume")
        } else {
            format!("Length: {}  |  {}", length, HELP_TEXT)
        };

        self.term.print_line(row, &text)?;
        self.term.flush()
    }

    fn paint_head(&mut self, pos: Coords, direction: Direction) -> io::Result<()> {
        let glyph = match direction {
            Direction::Up => "^^",
            Direction::Down => "vv",
            Direction::Left => "<<",
            Direction::Right => ">>",
        };
        self.paint(pos, glyph, BOARD_BACKGROUND_COLOR, SNAKE_COLOR)
    }

    fn paint_body(&mut self, pos: Coords) -> io::Result<()> {
        self.paint(pos, "  ", SNAKE_COLOR, SNAKE_COLOR)
    }

    fn paint_apple(&mut self, pos: Coords) -> io::Result<()> {
        self.paint(pos, "  ", APPLE_COLOR, APPLE_COLOR)
    }

    fn erase(&mut self, pos: Coords) -> io::Result<()> {
        self.paint(pos, "  ", BOARD_BACKGROUND_COLOR, BOARD_BACKGROUND_COLOR)
    }

    fn paint(&mut self, (x, y): Coords, text: &str, fg: Color, bg: Color) -> io::Result<()> {
        self.term.print_at((1 + x * CELL_WIDTH, 1 + y), text, fg, bg)
    }
}
