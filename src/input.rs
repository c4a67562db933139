use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    TogglePause,
    Quit,
    Ignore,
}

/// Maps a single key press to what the game should do with it.
pub fn key_action(ev: &KeyEvent) -> KeyAction {
    if is_ctrl_c(ev) {
        return KeyAction::Quit;
    }

    match ev.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Turn(Direction::Up),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Turn(Direction::Left),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Turn(Direction::Down),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Turn(Direction::Right),
        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => KeyAction::TogglePause,
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
