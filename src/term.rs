use crate::Coords;
use std::io::{self, Stdout, Write, stdout};
use std::time::Instant;

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

/// Thin wrapper over the output stream. Positions are terminal columns and rows.
pub struct TermManager<W: Write = Stdout> {
    out: W,
}

impl TermManager<Stdout> {
    pub fn new() -> Self {
        TermManager { out: stdout() }
    }

    pub fn setup(&mut self) -> io::Result<()> {
        execute!(self.out, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.out, cursor::Hide, cursor::DisableBlinking)
    }

    pub fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.out, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    pub fn terminal_size(&self) -> io::Result<Coords> {
        terminal::size()
    }

    /// Collects key presses until `deadline`. Returns early with nothing if the
    /// deadline already passed.
    pub fn read_key_events_until(&self, deadline: Instant) -> io::Result<Vec<KeyEvent>> {
        let mut events = vec![];

        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }

            if event::poll(deadline - now)? {
                if let Event::Key(ev) = event::read()? {
                    if ev.kind == KeyEventKind::Press {
                        events.push(ev);
                    }
                }
            }
        }

        Ok(events)
    }
}

impl Default for TermManager<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TermManager<W> {
    pub fn with_writer(out: W) -> Self {
        TermManager { out }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn draw_borders(&mut self, (width, height): Coords, color: Color) -> io::Result<()> {
        let end_x = width - 1;
        let end_y = height - 1;

        queue!(self.out, style::SetForegroundColor(color))?;

        for x in 0..width {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            queue!(self.out, cursor::MoveTo(x, 0), style::Print(ch))?;
            queue!(self.out, cursor::MoveTo(x, end_y), style::Print(ch))?;
        }

        for y in 1..end_y {
            queue!(self.out, cursor::MoveTo(0, y), style::Print('|'))?;
            queue!(self.out, cursor::MoveTo(end_x, y), style::Print('|'))?;
        }

        queue!(self.out, style::ResetColor)
    }

    pub fn print_at(&mut self, pos: Coords, text: &str, fg: Color, bg: Color) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(fg),
            style::SetBackgroundColor(bg),
            style::Print(text),
            style::ResetColor
        )
    }

    /// Replaces a whole row with `text`.
    pub fn print_line(&mut self, row: u16, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, row),
            terminal::Clear(ClearType::UntilNewLine),
            style::Print(text)
        )
    }

    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, style::ResetColor, terminal::Clear(ClearType::All))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
