//! Events consumed by the dialog render loop.

use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::DialogError;
use crate::ui::progress::ProgressMessage;

/// A decoded key press in the dialog input vocabulary.
///
/// Space, `j`, `k`, `q` and friends arrive as [`Key::Char`]; each dialog
/// decides whether a character is navigation or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Esc,
    Backspace,
    Delete,
    CtrlC,
    CtrlA,
    CtrlE,
    Char(char),
    Unknown,
}

impl Key {
    /// Whether this is a character that text input may insert.
    pub fn printable(&self) -> Option<char> {
        match self {
            Key::Char(c) if !c.is_control() => Some(*c),
            _ => None,
        }
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match (event.code, ctrl) {
            (KeyCode::Char('c'), true) => Key::CtrlC,
            (KeyCode::Char('a'), true) => Key::CtrlA,
            (KeyCode::Char('e'), true) => Key::CtrlE,
            (KeyCode::Char(_), true) => Key::Unknown,
            (KeyCode::Char(c), false) => Key::Char(c),
            (KeyCode::Up, _) => Key::Up,
            (KeyCode::Down, _) => Key::Down,
            (KeyCode::Left, _) => Key::Left,
            (KeyCode::Right, _) => Key::Right,
            (KeyCode::Home, _) => Key::Home,
            (KeyCode::End, _) => Key::End,
            (KeyCode::PageUp, _) => Key::PageUp,
            (KeyCode::PageDown, _) => Key::PageDown,
            (KeyCode::Enter, _) => Key::Enter,
            (KeyCode::Esc, _) => Key::Esc,
            (KeyCode::Backspace, _) => Key::Backspace,
            (KeyCode::Delete, _) => Key::Delete,
            _ => Key::Unknown,
        }
    }
}

impl FromStr for Key {
    type Err = DialogError;

    /// Parses key names such as `down`, `pgup`, `ctrl+c`, `space` or a single character.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let key = match name {
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "home" => Key::Home,
            "end" => Key::End,
            "pgup" => Key::PageUp,
            "pgdown" => Key::PageDown,
            "enter" => Key::Enter,
            "esc" => Key::Esc,
            "backspace" => Key::Backspace,
            "delete" => Key::Delete,
            "space" => Key::Char(' '),
            "ctrl+c" => Key::CtrlC,
            "ctrl+a" => Key::CtrlA,
            "ctrl+e" => Key::CtrlE,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return Err(DialogError::UnknownKey(other.to_string())),
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Up => f.write_str("up"),
            Key::Down => f.write_str("down"),
            Key::Left => f.write_str("left"),
            Key::Right => f.write_str("right"),
            Key::Home => f.write_str("home"),
            Key::End => f.write_str("end"),
            Key::PageUp => f.write_str("pgup"),
            Key::PageDown => f.write_str("pgdown"),
            Key::Enter => f.write_str("enter"),
            Key::Esc => f.write_str("esc"),
            Key::Backspace => f.write_str("backspace"),
            Key::Delete => f.write_str("delete"),
            Key::CtrlC => f.write_str("ctrl+c"),
            Key::CtrlA => f.write_str("ctrl+a"),
            Key::CtrlE => f.write_str("ctrl+e"),
            Key::Char(' ') => f.write_str("space"),
            Key::Char(c) => write!(f, "{c}"),
            Key::Unknown => f.write_str("unknown"),
        }
    }
}

/// Everything that can wake a dialog's render loop.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogEvent {
    Key(Key),
    /// Bracketed paste delivered as one chunk.
    Paste(String),
    Resize(u16, u16),
    /// A message from the progress producer.
    Progress(ProgressMessage),
    /// Forced termination requested from another thread.
    Interrupt,
}

impl From<Key> for DialogEvent {
    fn from(key: Key) -> Self {
        DialogEvent::Key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_keys() {
        assert_eq!("down".parse::<Key>().unwrap(), Key::Down);
        assert_eq!("pgdown".parse::<Key>().unwrap(), Key::PageDown);
        assert_eq!("ctrl+e".parse::<Key>().unwrap(), Key::CtrlE);
        assert_eq!("space".parse::<Key>().unwrap(), Key::Char(' '));
        assert_eq!("q".parse::<Key>().unwrap(), Key::Char('q'));
        assert_eq!("é".parse::<Key>().unwrap(), Key::Char('é'));
    }

    #[test]
    fn rejects_multi_character_names() {
        assert!(matches!(
            "ce".parse::<Key>(),
            Err(DialogError::UnknownKey(name)) if name == "ce"
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for key in [Key::PageUp, Key::CtrlC, Key::Char(' '), Key::Char('j')] {
            assert_eq!(key.to_string().parse::<Key>().unwrap(), key);
        }
    }

    #[test]
    fn control_chords_map_to_editing_keys() {
        let event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(Key::from(event), Key::CtrlA);
        let event = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(Key::from(event), Key::Unknown);
        let event = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(Key::from(event), Key::Char('Q'));
    }

    #[test]
    fn printable_excludes_control_characters() {
        assert_eq!(Key::Char('a').printable(), Some('a'));
        assert_eq!(Key::Char('\u{7}').printable(), None);
        assert_eq!(Key::Enter.printable(), None);
    }
}
