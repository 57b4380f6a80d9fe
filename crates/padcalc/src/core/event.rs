//! Input events
//!
//! The widget's external interface: every button press reaches the core as
//! one of these event kinds. The host translates clicks into events; the
//! active state decides what each one means.

use serde::{Deserialize, Serialize};

use crate::core::operations::Operator;

/// A discrete input event from the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Full reset (`C`)
    Clear,
    /// Discard the entry in progress (`CE`)
    ClearEntry,
    /// Remove the last character of the entry
    Backspace,
    /// Select an operator
    Operator(Operator),
    /// Append a digit (0-9)
    Digit(u8),
    /// Append the decimal point
    Point,
    /// Apply the pending computation
    Equal,
}

impl InputEvent {
    /// Maps a button `data-key` string to an event
    ///
    /// Covers the keys the page markup carries on its buttons: the ten
    /// digits, the four operators, `.` and `=`. Clear, clear-entry and
    /// backspace buttons are identified by element id instead and have no
    /// `data-key`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "0" => Some(Self::Digit(0)),
            "1" => Some(Self::Digit(1)),
            "2" => Some(Self::Digit(2)),
            "3" => Some(Self::Digit(3)),
            "4" => Some(Self::Digit(4)),
            "5" => Some(Self::Digit(5)),
            "6" => Some(Self::Digit(6)),
            "7" => Some(Self::Digit(7)),
            "8" => Some(Self::Digit(8)),
            "9" => Some(Self::Digit(9)),
            "." => Some(Self::Point),
            "=" => Some(Self::Equal),
            "+" => Some(Self::Operator(Operator::Add)),
            "-" => Some(Self::Operator(Operator::Subtract)),
            "*" => Some(Self::Operator(Operator::Multiply)),
            "/" => Some(Self::Operator(Operator::Divide)),
            _ => None,
        }
    }

    /// Returns the character this event appends to the entry, if any
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Point => Some('.'),
            Self::Operator(op) => op.symbol().chars().next(),
            Self::Clear | Self::ClearEntry | Self::Backspace | Self::Equal => None,
        }
    }

    /// Returns the button caption for this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Clear => "C".to_string(),
            Self::ClearEntry => "CE".to_string(),
            Self::Backspace => "DEL".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Digit(d) => d.to_string(),
            Self::Point => ".".to_string(),
            Self::Equal => "=".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== from_key tests =====

    #[test]
    fn test_from_key_digits() {
        for d in 0u8..=9 {
            assert_eq!(InputEvent::from_key(&d.to_string()), Some(InputEvent::Digit(d)));
        }
    }

    #[test]
    fn test_from_key_operators() {
        assert_eq!(
            InputEvent::from_key("+"),
            Some(InputEvent::Operator(Operator::Add))
        );
        assert_eq!(
            InputEvent::from_key("-"),
            Some(InputEvent::Operator(Operator::Subtract))
        );
        assert_eq!(
            InputEvent::from_key("*"),
            Some(InputEvent::Operator(Operator::Multiply))
        );
        assert_eq!(
            InputEvent::from_key("/"),
            Some(InputEvent::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_from_key_point_and_equal() {
        assert_eq!(InputEvent::from_key("."), Some(InputEvent::Point));
        assert_eq!(InputEvent::from_key("="), Some(InputEvent::Equal));
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(InputEvent::from_key(""), None);
        assert_eq!(InputEvent::from_key("10"), None);
        assert_eq!(InputEvent::from_key("x"), None);
        assert_eq!(InputEvent::from_key("Enter"), None);
    }

    // ===== to_char tests =====

    #[test]
    fn test_to_char_digits() {
        for d in 0u8..=9 {
            let ch = InputEvent::Digit(d).to_char();
            assert_eq!(ch.and_then(|c| c.to_digit(10)), Some(u32::from(d)));
        }
    }

    #[test]
    fn test_to_char_point_and_operator() {
        assert_eq!(InputEvent::Point.to_char(), Some('.'));
        assert_eq!(InputEvent::Operator(Operator::Add).to_char(), Some('+'));
    }

    #[test]
    fn test_to_char_none_for_commands() {
        assert_eq!(InputEvent::Clear.to_char(), None);
        assert_eq!(InputEvent::ClearEntry.to_char(), None);
        assert_eq!(InputEvent::Backspace.to_char(), None);
        assert_eq!(InputEvent::Equal.to_char(), None);
    }

    #[test]
    fn test_to_char_out_of_range_digit() {
        assert_eq!(InputEvent::Digit(10).to_char(), None);
    }

    // ===== label tests =====

    #[test]
    fn test_labels_nonempty() {
        let events = [
            InputEvent::Clear,
            InputEvent::ClearEntry,
            InputEvent::Backspace,
            InputEvent::Operator(Operator::Divide),
            InputEvent::Digit(7),
            InputEvent::Point,
            InputEvent::Equal,
        ];
        for event in events {
            assert!(!event.label().is_empty());
        }
    }

    #[test]
    fn test_label_text() {
        assert_eq!(InputEvent::Clear.label(), "C");
        assert_eq!(InputEvent::ClearEntry.label(), "CE");
        assert_eq!(InputEvent::Backspace.label(), "DEL");
        assert_eq!(InputEvent::Digit(7).label(), "7");
        assert_eq!(InputEvent::Operator(Operator::Multiply).label(), "*");
    }

    // ===== serde tests =====

    #[test]
    fn test_event_serde_roundtrip() {
        let events = [
            InputEvent::Clear,
            InputEvent::Operator(Operator::Add),
            InputEvent::Digit(9),
            InputEvent::Equal,
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let back: InputEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(back, event);
        }
    }
}
