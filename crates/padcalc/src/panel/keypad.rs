//! Keypad catalog
//!
//! Maps panel button elements to input events. The grid puts the clear
//! row on top, digits below, and equals at the bottom right.

use super::dom::{DomElement, MockDom};
use crate::core::event::InputEvent;
use crate::core::operations::Operator;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Event the button produces
    pub event: InputEvent,
    /// DOM element id
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button, deriving its element id from the event
    #[must_use]
    pub fn new(event: InputEvent, row: usize, col: usize) -> Self {
        let id = match event {
            InputEvent::Digit(d) => format!("btn-{d}"),
            InputEvent::Operator(op) => format!("btn-{}", op_name(op)),
            InputEvent::Point => "btn-point".to_string(),
            InputEvent::Equal => "btn-equals".to_string(),
            InputEvent::Clear => "btn-clear".to_string(),
            InputEvent::ClearEntry => "btn-clear-entry".to_string(),
            InputEvent::Backspace => "btn-backspace".to_string(),
        };
        Self {
            event,
            id,
            row,
            col,
        }
    }

    /// Button caption
    #[must_use]
    pub fn label(&self) -> String {
        self.event.label()
    }
}

/// Element-id fragment for an operator
fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
    }
}

/// `data-key` attribute value for events the page markup keys
fn data_key(event: InputEvent) -> Option<String> {
    match event {
        InputEvent::Digit(d) => Some(d.to_string()),
        InputEvent::Operator(op) => Some(op.symbol().to_string()),
        _ => None,
    }
}

/// Keypad layout
///
/// ```text
/// [ CE ] [ C ] [ DEL ] [ / ]
/// [ 7  ] [ 8 ] [ 9   ] [ * ]
/// [ 4  ] [ 5 ] [ 6   ] [ - ]
/// [ 1  ] [ 2 ] [ 3   ] [ + ]
/// [ 0  ] [ . ] [ =   ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard widget keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: CE C DEL /
            KeypadButton::new(InputEvent::ClearEntry, 0, 0),
            KeypadButton::new(InputEvent::Clear, 0, 1),
            KeypadButton::new(InputEvent::Backspace, 0, 2),
            KeypadButton::new(InputEvent::Operator(Operator::Divide), 0, 3),
            // Row 1: 7 8 9 *
            KeypadButton::new(InputEvent::Digit(7), 1, 0),
            KeypadButton::new(InputEvent::Digit(8), 1, 1),
            KeypadButton::new(InputEvent::Digit(9), 1, 2),
            KeypadButton::new(InputEvent::Operator(Operator::Multiply), 1, 3),
            // Row 2: 4 5 6 -
            KeypadButton::new(InputEvent::Digit(4), 2, 0),
            KeypadButton::new(InputEvent::Digit(5), 2, 1),
            KeypadButton::new(InputEvent::Digit(6), 2, 2),
            KeypadButton::new(InputEvent::Operator(Operator::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButton::new(InputEvent::Digit(1), 3, 0),
            KeypadButton::new(InputEvent::Digit(2), 3, 1),
            KeypadButton::new(InputEvent::Digit(3), 3, 2),
            KeypadButton::new(InputEvent::Operator(Operator::Add), 3, 3),
            // Row 4: 0 . =
            KeypadButton::new(InputEvent::Digit(0), 4, 0),
            KeypadButton::new(InputEvent::Point, 4, 1),
            KeypadButton::new(InputEvent::Equal, 4, 2),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions as (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button at a grid position
    ///
    /// The bottom row is three wide; its last cell is empty.
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Resolves a click on an element id to the event it produces
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<InputEvent> {
        self.find_button_by_id(element_id).map(|b| b.event)
    }

    /// Builds DOM elements for every button
    ///
    /// Buttons carry the page markup contract: a `number` or `operator`
    /// class, and a `data-key` attribute on the buttons the page keys.
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                let mut elem = DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.label())
                    .with_class("keypad-btn");
                elem = match btn.event {
                    InputEvent::Digit(_) => elem.with_class("number"),
                    InputEvent::Operator(_) => elem.with_class("operator"),
                    _ => elem,
                };
                if let Some(key) = data_key(btn.event) {
                    elem = elem.with_attr("data-key", &key);
                }
                elem
            })
            .collect()
    }
}

/// Extension for wiring a keypad into a mock DOM
pub trait MockDomKeypadExt {
    /// Registers every keypad button as a panel element
    fn add_keypad(&mut self, keypad: &Keypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &Keypad) {
        for elem in keypad.create_dom_elements() {
            self.register_element(elem);
        }
    }
}
