//! Keyboard model
//!
//! Keys are accepted both as DOM-style names and as legacy key codes.

use serde::{Deserialize, Serialize};

use crate::error::TabError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Enter,
    Space,
    ArrowLeft,
    ArrowRight,
    /// Any other printable character
    Character(char),
    /// Non-printable key with no meaning to tabs (Tab, Escape, ...)
    Other(String),
}

impl Key {
    /// Map a legacy `which`/`keyCode` value
    pub fn from_code(code: u32) -> Self {
        match code {
            13 => Key::Enter,
            32 => Key::Space,
            37 => Key::ArrowLeft,
            39 => Key::ArrowRight,
            other => Key::Other(other.to_string()),
        }
    }

    /// Enter and Space select a tab
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }

    /// Keys that produce a keypress event. Those toggle the dropdown trigger.
    pub fn produces_keypress(&self) -> bool {
        matches!(self, Key::Enter | Key::Space | Key::Character(_))
    }

    /// Offset of the tab focus moves to, for arrow keys
    pub fn focus_offset(&self) -> Option<isize> {
        match self {
            Key::ArrowLeft => Some(-1),
            Key::ArrowRight => Some(1),
            _ => None,
        }
    }
}

impl std::str::FromStr for Key {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Enter" => return Ok(Key::Enter),
            " " | "Space" | "Spacebar" => return Ok(Key::Space),
            "ArrowLeft" | "Left" => return Ok(Key::ArrowLeft),
            "ArrowRight" | "Right" => return Ok(Key::ArrowRight),
            _ => {}
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Key::Character(c)),
            (None, _) => Err(TabError::UnknownKey(String::new())),
            _ if s.chars().all(|c| c.is_ascii_alphanumeric()) => Ok(Key::Other(s.to_string())),
            _ => Err(TabError::UnknownKey(s.to_string())),
        }
    }
}
