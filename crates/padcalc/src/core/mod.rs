//! Core input-interpretation machinery
//!
//! Operands live in two representations with one crossing point each way:
//! display-facing text ([`parse_operand`] reads it into an `f64` when an
//! operand is committed) and arithmetic-facing numbers ([`format_number`]
//! renders them back when a value reaches the screen). Nothing in between
//! is ever ambiguously both.

pub mod context;
pub mod event;
pub mod operations;
pub mod screen;
pub mod state;
pub mod tape;

pub use context::Calculator;
pub use event::InputEvent;
pub use operations::{operate, Operator};
pub use screen::{BufferScreen, Screen};
pub use state::State;
pub use tape::{Tape, TapeEntry};

/// Text shown on the result line when there is nothing to show
pub const DEFAULT_DISPLAY: &str = "0";

/// Canonical string-to-number step for operands
///
/// An empty entry reads as zero, and a trailing decimal point is tolerated
/// (`"5."` is 5). Anything unparseable collapses to the NaN sentinel,
/// which also round-trips a seeded `"NaN"` result back into NaN.
#[must_use]
pub fn parse_operand(operand: &str) -> f64 {
    if operand.is_empty() {
        0.0
    } else {
        operand.parse().unwrap_or(f64::NAN)
    }
}

/// Canonical number-to-string step for operands and results
///
/// Shortest round-trip form: integral values print without a fraction and
/// NaN prints as `NaN`.
#[must_use]
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== parse_operand tests =====

    #[test]
    fn test_parse_empty_is_zero() {
        assert_eq!(parse_operand(""), 0.0);
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_operand("42"), 42.0);
    }

    #[test]
    fn test_parse_leading_zeros() {
        assert_eq!(parse_operand("007"), 7.0);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_operand("0.5"), 0.5);
        assert_eq!(parse_operand("3.25"), 3.25);
    }

    #[test]
    fn test_parse_trailing_point() {
        assert_eq!(parse_operand("5."), 5.0);
        assert_eq!(parse_operand("0."), 0.0);
    }

    #[test]
    fn test_parse_nan_roundtrip() {
        assert!(parse_operand("NaN").is_nan());
    }

    #[test]
    fn test_parse_garbage_is_nan() {
        assert!(parse_operand("1.2.3").is_nan());
        assert!(parse_operand("abc").is_nan());
    }

    // ===== format_number tests =====

    #[test]
    fn test_format_integer_without_fraction() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(2.67), "2.67");
    }

    #[test]
    fn test_format_nan() {
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_parse_roundtrip() {
        for value in [0.0, 7.0, -3.5, 0.1, 1e9] {
            assert_eq!(parse_operand(&format_number(value)), value);
        }
    }
}
