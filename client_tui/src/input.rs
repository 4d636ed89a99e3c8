//! Keyboard input handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::Direction;

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Move(Direction),
    Restart,
    Quit,
    Ignore,
}

/// Map a terminal key event to a game action
pub fn handle_key(event: &KeyEvent) -> InputAction {
    if event.kind == KeyEventKind::Release {
        return InputAction::Ignore;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return InputAction::Quit;
    }

    match event.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => {
            InputAction::Move(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => {
            InputAction::Move(Direction::Right)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => InputAction::Restart,
        _ => InputAction::Ignore,
    }
}

/// Holds the last direction pressed until the next physics tick consumes it.
///
/// Terminals report presses and repeats, not held keys, so a direction only
/// lasts for the tick that follows it.
#[derive(Debug, Default)]
pub struct InputLatch {
    dir: Direction,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, dir: Direction) {
        self.dir = dir;
    }

    /// Direction for this tick; the latch resets to `Stop`
    pub fn take(&mut self) -> Direction {
        std::mem::take(&mut self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_and_letter_keys_move() {
        assert_eq!(handle_key(&press(KeyCode::Left)), InputAction::Move(Direction::Left));
        assert_eq!(handle_key(&press(KeyCode::Char('a'))), InputAction::Move(Direction::Left));
        assert_eq!(handle_key(&press(KeyCode::Right)), InputAction::Move(Direction::Right));
        assert_eq!(handle_key(&press(KeyCode::Char('l'))), InputAction::Move(Direction::Right));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key(&press(KeyCode::Char('q'))), InputAction::Quit);
        assert_eq!(handle_key(&press(KeyCode::Esc)), InputAction::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&ctrl_c), InputAction::Quit);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(handle_key(&press(KeyCode::Char('x'))), InputAction::Ignore);
        assert_eq!(handle_key(&press(KeyCode::Enter)), InputAction::Ignore);
        assert_eq!(handle_key(&press(KeyCode::Char('r'))), InputAction::Restart);
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key(&release), InputAction::Ignore);
    }

    #[test]
    fn test_latch_lasts_one_tick() {
        let mut latch = InputLatch::new();
        assert_eq!(latch.take(), Direction::Stop);

        latch.press(Direction::Left);
        latch.press(Direction::Right);
        assert_eq!(latch.take(), Direction::Right, "Last press wins");
        assert_eq!(latch.take(), Direction::Stop);
    }
}
