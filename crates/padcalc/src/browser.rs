//! Browser bindings
//!
//! Real-DOM front end behind the `wasm` feature: the same core, with the
//! two display lines written into the live page by element id. The host
//! page forwards button clicks (or their `data-key` values) and renders
//! nothing itself.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::core::context::Calculator;
use crate::core::event::InputEvent;
use crate::core::screen::Screen;
use crate::panel::dom::{PROGRESS_ID, RESULT_ID};
use crate::panel::keypad::Keypad;

/// Screen writing into the live page by element id
#[derive(Debug)]
pub struct WebScreen {
    document: Option<web_sys::Document>,
}

impl Default for WebScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl WebScreen {
    /// Creates a screen over the current page, if one exists
    #[must_use]
    pub fn new() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
        }
    }

    fn write(&self, id: &str, text: &str) {
        if let Some(elem) = self
            .document
            .as_ref()
            .and_then(|doc| doc.get_element_by_id(id))
        {
            elem.set_text_content(Some(text));
        }
    }
}

impl Screen for WebScreen {
    fn set_result(&mut self, text: &str) {
        self.write(RESULT_ID, text);
    }

    fn set_progress(&mut self, text: &str) {
        self.write(PROGRESS_ID, text);
    }
}

/// Browser widget - the wasm-bindgen entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserWidget {
    calc: Calculator<WebScreen>,
    keypad: Keypad,
}

#[wasm_bindgen]
impl BrowserWidget {
    /// Creates the widget and paints the default display
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            calc: Calculator::new(WebScreen::new()),
            keypad: Keypad::new(),
        }
    }

    /// Handles a keypad button click by element id
    ///
    /// Returns false when the id is not a keypad button.
    pub fn handle_button(&mut self, element_id: &str) -> bool {
        match self.keypad.handle_click(element_id) {
            Some(event) => {
                self.calc.press(event);
                true
            }
            None => false,
        }
    }

    /// Handles a button identified by its `data-key` value
    ///
    /// Returns false when the key maps to no event.
    pub fn handle_data_key(&mut self, key: &str) -> bool {
        match InputEvent::from_key(key) {
            Some(event) => {
                self.calc.press(event);
                true
            }
            None => false,
        }
    }

    /// Number of completed computations on the tape
    #[must_use]
    pub fn tape_len(&self) -> usize {
        self.calc.tape().len()
    }

    /// A tape entry in `"<expression> = <result>"` form
    #[must_use]
    pub fn tape_entry(&self, index: usize) -> Option<String> {
        self.calc.tape().get(index).map(|entry| entry.display())
    }

    /// The tape as a JSON array
    #[must_use]
    pub fn tape_json(&self) -> String {
        self.calc
            .tape()
            .to_json()
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Wipes the tape
    pub fn clear_tape(&mut self) {
        self.calc.clear_tape();
    }
}

impl Default for BrowserWidget {
    fn default() -> Self {
        Self::new()
    }
}

/// Module initialization: install the panic hook and announce startup
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"padcalc wasm initialized".into());
}
