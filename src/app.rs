use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use log::{debug, info};
use rand::Rng;

use crate::game::GameState;
use crate::input::{key_action, KeyAction};
use crate::render::{required_size, Renderer};
use crate::term::TermManager;

/// Drives a [`GameState`] at a fixed tick rate on the terminal.
pub struct SnakeApp<R> {
    game: GameState<R>,
    renderer: Renderer,
    tick_interval: Duration,
    paused: bool,
}

impl<R: Rng> SnakeApp<R> {
    pub fn new(game: GameState<R>, ticks_per_second: u32) -> Self {
        let renderer = Renderer::new(TermManager::new(), game.grid());
        let tick_interval = Duration::from_secs(1) / ticks_per_second.max(1);
        SnakeApp { game, renderer, tick_interval, paused: false }
    }

    /// Plays until the user quits. The terminal is restored on every exit path.
    pub fn run(&mut self) -> Result<()> {
        let (need_w, need_h) = required_size(self.game.grid());
        let (w, h) = self.renderer.term().terminal_size().context("Failed to read terminal size")?;
        if w < need_w || h < need_h {
            bail!("Terminal is {}x{}, the board needs at least {}x{}", w, h, need_w, need_h);
        }

        let result = self.renderer.term_mut().setup()
            .context("Failed to set up terminal")
            .and_then(|()| self.game_loop());

        self.renderer.term_mut().restore().context("Failed to restore terminal")?;
        result
    }

    fn game_loop(&mut self) -> Result<()> {
        self.renderer.draw_board(self.game.body(), self.game.apple(), self.game.direction())?;
        let mut next_tick = Instant::now() + self.tick_interval;

        loop {
            let key_events = self.renderer.term().read_key_events_until(next_tick)?;
            for key_ev in key_events {
                match key_action(&key_ev) {
                    KeyAction::Turn(dir) if !self.paused => self.game.set_desired_direction(dir),
                    KeyAction::TogglePause => self.toggle_pause()?,
                    KeyAction::Quit => {
                        info!("Quit with snake length {}", self.game.body().len());
                        return Ok(());
                    }
                    _ => {}
                }
            }

            next_tick += self.tick_interval;
            if self.paused { continue; }

            let res = self.game.tick();
            self.renderer.draw_tick(&res)?;
        }
    }

    fn toggle_pause(&mut self) -> Result<()> {
        self.paused = !self.paused;
        debug!("Paused: {}", self.paused);
        self.renderer.draw_status(self.game.body().len(), self.paused)?;
        Ok(())
    }
}
