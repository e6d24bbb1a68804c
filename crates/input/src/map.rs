//! Mapping from terminal events to player commands.

use crate::types::{BoardGeometry, Direction, PlayerCommand, BOARD_VARIANTS};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to player commands.
pub fn handle_key_event(key: KeyEvent) -> Option<PlayerCommand> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(PlayerCommand::MoveCursor(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(PlayerCommand::MoveCursor(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(PlayerCommand::MoveCursor(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(PlayerCommand::MoveCursor(Direction::Down))
        }

        // Click
        KeyCode::Char(' ') | KeyCode::Enter => Some(PlayerCommand::ClickCursor),

        // Board size menu: 1..=4
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            (index < BOARD_VARIANTS.len()).then_some(PlayerCommand::StartVariant(index))
        }

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(PlayerCommand::Restart),

        _ => None,
    }
}

/// Map a left mouse press on a tile to a click.
pub fn handle_mouse_event(event: MouseEvent, geometry: &BoardGeometry) -> Option<PlayerCommand> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => geometry
            .hit(event.column, event.row)
            .map(|(x, y)| PlayerCommand::ClickAt { x, y }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
