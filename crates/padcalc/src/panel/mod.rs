//! Host-UI stand-in
//!
//! The widget core knows nothing about rendering; this module is the
//! reference host. A mock DOM holds the page structure, the keypad catalog
//! maps button elements to input events, and the driver wires clicks
//! through the core the way the real page does. Everything here runs
//! without a browser, which is also what makes the widget testable
//! end to end.

pub mod dom;
pub mod driver;
pub mod keypad;

pub use dom::{DomElement, DomEvent, MockDom, PROGRESS_ID, RESULT_ID};
pub use driver::{PanelScreen, WidgetDriver, WidgetError};
pub use keypad::{Keypad, KeypadButton, MockDomKeypadExt};
