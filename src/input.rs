use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Begin the game from the start screen.
    Start,
    /// Steer the snake.
    Turn(Direction),
    /// Throw the session away and return to the start screen.
    Restart,
    Quit,
    /// Key with no binding.
    Ignored,
}

/// Translates raw key events into [`InputCommand`]s. Pure mapping; phase
/// rules (what a command means mid-game vs. on the start screen) live in
/// the app.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> InputCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputCommand::Quit;
        }

        match key.code {
            KeyCode::Char(' ') => InputCommand::Start,

            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                InputCommand::Turn(Direction::Up)
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                InputCommand::Turn(Direction::Down)
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                InputCommand::Turn(Direction::Left)
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                InputCommand::Turn(Direction::Right)
            }

            KeyCode::Char('r') | KeyCode::Char('R') => InputCommand::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputCommand::Quit,

            _ => InputCommand::Ignored,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_starts() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char(' '))),
            InputCommand::Start
        );
    }

    #[test]
    fn test_arrow_keys_turn() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Up)),
            InputCommand::Turn(Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Down)),
            InputCommand::Turn(Direction::Down)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Left)),
            InputCommand::Turn(Direction::Left)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Right)),
            InputCommand::Turn(Direction::Right)
        );
    }

    #[test]
    fn test_wasd_turns() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('w'))),
            InputCommand::Turn(Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('a'))),
            InputCommand::Turn(Direction::Left)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('s'))),
            InputCommand::Turn(Direction::Down)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('d'))),
            InputCommand::Turn(Direction::Right)
        );
        assert_eq!(
            handler.handle_key_event(KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT)),
            InputCommand::Turn(Direction::Up)
        );
    }

    #[test]
    fn test_restart_and_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('r'))),
            InputCommand::Restart
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('q'))),
            InputCommand::Quit
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Esc)),
            InputCommand::Quit
        );
        assert_eq!(
            handler.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputCommand::Quit
        );
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('x'))),
            InputCommand::Ignored
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Tab)),
            InputCommand::Ignored
        );
    }
}
