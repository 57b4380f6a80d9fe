//! Padcalc - keypad calculator widget core
//!
//! A browser-style calculator widget driven by discrete input events. A
//! three-state machine interprets each button press according to what the
//! user was just doing (typing a number, having chosen an operator, or
//! looking at a result) and writes a two-line display: the progress line
//! carrying the expression under construction and the result line.
//!
//! The core consumes abstract [`InputEvent`](core::InputEvent)s and writes
//! through the [`Screen`](core::Screen) seam; hosts decide how clicks
//! become events and where the two lines land. Three hosts ship here:
//! [`BufferScreen`](core::BufferScreen) for headless embedding, the mock
//! panel with [`WidgetDriver`](panel::WidgetDriver) for tests, and the
//! `wasm` feature's browser bindings for a live page.
//!
//! Arithmetic never fails: division by zero yields NaN, which absorbs
//! through any further computation until the user clears it.
//!
//! # Example
//!
//! ```rust
//! use padcalc::prelude::*;
//!
//! let mut calc = Calculator::new(BufferScreen::new());
//! for event in [
//!     InputEvent::Digit(5),
//!     InputEvent::Operator(Operator::Add),
//!     InputEvent::Digit(3),
//!     InputEvent::Equal,
//! ] {
//!     calc.press(event);
//! }
//! assert_eq!(calc.screen().result(), "8");
//! assert_eq!(calc.screen().progress(), "5 + 3 =");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod panel;

#[cfg(feature = "wasm")]
pub mod browser;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::context::Calculator;
    pub use crate::core::event::InputEvent;
    pub use crate::core::operations::{operate, Operator};
    pub use crate::core::screen::{BufferScreen, Screen};
    pub use crate::core::state::State;
    pub use crate::core::tape::{Tape, TapeEntry};
    pub use crate::core::{format_number, parse_operand, DEFAULT_DISPLAY};
    pub use crate::panel::dom::{DomElement, DomEvent, MockDom};
    pub use crate::panel::driver::{PanelScreen, WidgetDriver, WidgetError};
    pub use crate::panel::keypad::{Keypad, KeypadButton, MockDomKeypadExt};

    #[cfg(feature = "wasm")]
    pub use crate::browser::BrowserWidget;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = Calculator::new(BufferScreen::new());
        calc.press(InputEvent::Digit(6));
        calc.press(InputEvent::Operator(Operator::Multiply));
        calc.press(InputEvent::Digit(7));
        calc.press(InputEvent::Equal);
        assert_eq!(calc.screen().result(), "42");
    }

    #[test]
    fn test_operate_direct() {
        assert_eq!(operate(Operator::Multiply, 6.0, 7.0), 42.0);
        assert!(operate(Operator::Divide, 1.0, 0.0).is_nan());
    }

    #[test]
    fn test_driver_smoke() {
        let mut driver = WidgetDriver::new();
        driver
            .click_all(["btn-2", "btn-0", "btn-divide", "btn-4", "btn-equals"])
            .unwrap();
        assert_eq!(driver.display_text(), "5");
        assert_eq!(driver.progress_text(), "20 / 4 =");
    }

    #[test]
    fn test_tape_tracking() {
        let mut calc = Calculator::new(BufferScreen::new());
        for event in [
            InputEvent::Digit(1),
            InputEvent::Digit(0),
            InputEvent::Operator(Operator::Divide),
            InputEvent::Digit(2),
            InputEvent::Equal,
        ] {
            calc.press(event);
        }
        assert_eq!(calc.tape().len(), 1);
        assert_eq!(calc.tape().last().map(TapeEntry::display), Some("10 / 2 = 5".into()));
    }

    #[test]
    fn test_default_display_constant() {
        assert_eq!(DEFAULT_DISPLAY, "0");
        assert_eq!(parse_operand(DEFAULT_DISPLAY), 0.0);
        assert_eq!(format_number(0.0), DEFAULT_DISPLAY);
    }
}
