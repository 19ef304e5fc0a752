//! Key event mapping for the interactive console.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use folio_effects::konami::Key;
use folio_terminal::Direction;

/// What a key press asks the console loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Insert a character at the end of the edit line.
    Insert(char),
    /// Delete the last character of the edit line.
    Backspace,
    /// Discard the whole edit line.
    ClearLine,
    Submit,
    Navigate(Direction),
    Complete,
    Quit,
    /// Key with no binding.
    Ignore,
}

/// Map a key event to an action. Key releases and repeats are ignored.
pub fn action_for(key: &KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::Ignore;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => Action::Quit,
        KeyCode::Char('u') if ctrl => Action::ClearLine,
        KeyCode::Char(_) if ctrl => Action::Ignore,
        KeyCode::Char(c) => Action::Insert(c),
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Enter => Action::Submit,
        KeyCode::Up => Action::Navigate(Direction::Older),
        KeyCode::Down => Action::Navigate(Direction::Newer),
        KeyCode::Tab => Action::Complete,
        KeyCode::Esc => Action::Quit,
        _ => Action::Ignore,
    }
}

/// The key as the easter-egg detector sees it.
pub fn konami_key(key: &KeyEvent) -> Key {
    match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn editing_keys() {
        assert_eq!(action_for(&press(KeyCode::Char('h'))), Action::Insert('h'));
        assert_eq!(action_for(&press(KeyCode::Backspace)), Action::Backspace);
        assert_eq!(action_for(&press(KeyCode::Enter)), Action::Submit);
        assert_eq!(action_for(&ctrl('u')), Action::ClearLine);
    }

    #[test]
    fn interpreter_keys() {
        assert_eq!(
            action_for(&press(KeyCode::Up)),
            Action::Navigate(Direction::Older)
        );
        assert_eq!(
            action_for(&press(KeyCode::Down)),
            Action::Navigate(Direction::Newer)
        );
        assert_eq!(action_for(&press(KeyCode::Tab)), Action::Complete);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(action_for(&ctrl('c')), Action::Quit);
        assert_eq!(action_for(&ctrl('d')), Action::Quit);
        assert_eq!(action_for(&press(KeyCode::Esc)), Action::Quit);
    }

    #[test]
    fn other_control_chars_are_ignored() {
        assert_eq!(action_for(&ctrl('x')), Action::Ignore);
        assert_eq!(action_for(&press(KeyCode::F(1))), Action::Ignore);
    }

    #[test]
    fn releases_are_ignored() {
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for(&key), Action::Ignore);
    }

    #[test]
    fn arrows_feed_konami() {
        assert_eq!(konami_key(&press(KeyCode::Left)), Key::Left);
        assert_eq!(konami_key(&press(KeyCode::Char('B'))), Key::Char('B'));
        assert_eq!(konami_key(&press(KeyCode::Home)), Key::Other);
    }
}
