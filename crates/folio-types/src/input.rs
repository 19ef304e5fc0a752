//! Front-end agnostic input events.
//!
//! Every front end maps its native key handling to these events. The
//! interpreter never sees raw key codes.

use serde::{Deserialize, Serialize};

/// A discrete event consumed by the command interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The user pressed the submit key with this line of text.
    Submit(String),
    /// Recall an older or newer history entry into the edit line.
    Navigate(Direction),
    /// Complete a partially typed command name.
    RequestCompletion(String),
}

/// History navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the first submission.
    Older,
    /// Towards the fresh edit line.
    Newer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_carries_text() {
        let e = InputEvent::Submit("help".into());
        assert_eq!(e, InputEvent::Submit("help".into()));
        assert_ne!(e, InputEvent::RequestCompletion("help".into()));
    }

    #[test]
    fn navigate_directions_differ() {
        assert_ne!(
            InputEvent::Navigate(Direction::Older),
            InputEvent::Navigate(Direction::Newer)
        );
    }

    #[test]
    fn direction_serde_lowercase() {
        let json = serde_json::to_string(&Direction::Older).unwrap();
        assert_eq!(json, "\"older\"");
        let back: Direction = serde_json::from_str("\"newer\"").unwrap();
        assert_eq!(back, Direction::Newer);
    }
}
