//! Widget driver
//!
//! Pairs the calculator core with the mock panel: clicks resolve through
//! the keypad catalog into input events, the core writes back through a
//! panel-backed screen, and tests read the two lines straight from the
//! DOM.

use thiserror::Error;
use tracing::debug;

use super::dom::{DomEvent, MockDom, PROGRESS_ID, RESULT_ID};
use super::keypad::{Keypad, MockDomKeypadExt};
use crate::core::context::Calculator;
use crate::core::screen::Screen;

/// Errors from driving the panel
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// No element with the given id exists in the panel
    #[error("no element with id `{id}` in the panel")]
    UnknownElement {
        /// The element id that was clicked
        id: String,
    },

    /// The element exists but is not a keypad button
    #[error("element `{id}` is not a keypad button")]
    NotAButton {
        /// The element id that was clicked
        id: String,
    },
}

/// Screen implementation writing into the mock panel's display elements
#[derive(Debug)]
pub struct PanelScreen {
    dom: MockDom,
}

impl Default for PanelScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelScreen {
    /// Creates a screen over the calculator page structure
    #[must_use]
    pub fn new() -> Self {
        Self {
            dom: MockDom::calculator(),
        }
    }

    /// The underlying mock DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Mutable access to the underlying mock DOM
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }
}

impl Screen for PanelScreen {
    fn set_result(&mut self, text: &str) {
        self.dom.set_element_text(RESULT_ID, text);
    }

    fn set_progress(&mut self, text: &str) {
        self.dom.set_element_text(PROGRESS_ID, text);
    }
}

/// Drives the widget the way the host page would
#[derive(Debug)]
pub struct WidgetDriver {
    calc: Calculator<PanelScreen>,
    keypad: Keypad,
}

impl Default for WidgetDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetDriver {
    /// Creates a driver over a fresh panel with the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let mut screen = PanelScreen::new();
        let keypad = Keypad::new();
        screen.dom_mut().add_keypad(&keypad);
        Self {
            calc: Calculator::new(screen),
            keypad,
        }
    }

    /// The calculator core
    #[must_use]
    pub fn calculator(&self) -> &Calculator<PanelScreen> {
        &self.calc
    }

    /// Mutable access to the calculator core
    pub fn calculator_mut(&mut self) -> &mut Calculator<PanelScreen> {
        &mut self.calc
    }

    /// The keypad catalog
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Clicks a panel element by id
    ///
    /// A click on a registered non-button element still lands in the
    /// panel's event history, like a real page; only keypad buttons reach
    /// the core.
    pub fn click(&mut self, element_id: &str) -> Result<(), WidgetError> {
        if !self.calc.screen().dom().contains(element_id) {
            return Err(WidgetError::UnknownElement {
                id: element_id.to_string(),
            });
        }
        self.calc
            .screen_mut()
            .dom_mut()
            .dispatch_event(DomEvent::click(element_id));
        let event = self
            .keypad
            .handle_click(element_id)
            .ok_or_else(|| WidgetError::NotAButton {
                id: element_id.to_string(),
            })?;
        debug!(element_id, ?event, "panel click");
        self.calc.press(event);
        Ok(())
    }

    /// Clicks a sequence of element ids, stopping at the first failure
    pub fn click_all<'a, I>(&mut self, ids: I) -> Result<(), WidgetError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for id in ids {
            self.click(id)?;
        }
        Ok(())
    }

    /// Text of the result line
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.calc
            .screen()
            .dom()
            .get_element_text(RESULT_ID)
            .unwrap_or_default()
    }

    /// Text of the progress line
    #[must_use]
    pub fn progress_text(&self) -> &str {
        self.calc
            .screen()
            .dom()
            .get_element_text(PROGRESS_ID)
            .unwrap_or_default()
    }
}
