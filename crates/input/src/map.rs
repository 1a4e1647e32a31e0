//! Key mapping from terminal events to game and menu actions.

use crate::types::{Direction, GameAction, MenuAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::Move(Direction::Right))
        }

        // Actions
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Reveal),
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Char('f') | KeyCode::Char('F') => {
            Some(GameAction::Flag)
        }

        _ => None,
    }
}

/// Map keyboard input to menu navigation.
pub fn handle_menu_key(key: KeyEvent) -> Option<MenuAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(MenuAction::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(MenuAction::Down),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(MenuAction::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(MenuAction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuAction::Select),
        KeyCode::Backspace | KeyCode::Delete => Some(MenuAction::Back),
        _ => None,
    }
}

/// Check if key should end the current round.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Presses and auto-repeats both act; releases never do.
pub fn is_actionable(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}
