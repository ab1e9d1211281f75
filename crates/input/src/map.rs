//! Key mapping from terminal events to game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tetros_types::GameCommand;

/// Map keyboard input to game commands.
///
/// The letters keep the game's classic bindings (a/d shift, q/e rotate,
/// s drop); arrows and space are aliases. Enter starts a game.
pub fn handle_key_event(key: KeyEvent) -> Option<GameCommand> {
    match key.code {
        KeyCode::Enter => Some(GameCommand::Start),

        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameCommand::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameCommand::MoveRight),

        // Rotation
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameCommand::RotateLeft),
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Up => Some(GameCommand::RotateRight),

        // Drop
        KeyCode::Down | KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameCommand::HardDrop)
        }

        _ => None,
    }
}

/// Check if key should quit the program.
///
/// Esc rather than `q`: this game spends `q` on rotation.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameCommand::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameCommand::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(GameCommand::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(GameCommand::MoveRight)
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('q'))),
            Some(GameCommand::RotateLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('e'))),
            Some(GameCommand::RotateRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameCommand::RotateRight)
        );
    }

    #[test]
    fn test_drop_and_start_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(GameCommand::HardDrop)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameCommand::HardDrop)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameCommand::Start)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
    }
}
