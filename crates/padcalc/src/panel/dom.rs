//! Mock DOM panel
//!
//! Stand-in for the host page: enough of a DOM to hold the widget's two
//! display lines and its buttons, observe what the core writes, and replay
//! click sequences without a browser.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Id of the result line element
pub const RESULT_ID: &str = "result";

/// Id of the progress line element
pub const PROGRESS_ID: &str = "current-progress";

/// A DOM element in the mock panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element id
    pub id: String,
    /// Tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// CSS classes
    pub classes: Vec<String>,
    /// Attributes
    pub attributes: HashMap<String, String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            classes: Vec::new(),
            attributes: HashMap::new(),
        }
    }

    /// Sets the element id
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets the text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content.clear();
        self.text_content.push_str(text);
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Checks whether the element carries a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Events the panel can dispatch to the widget
///
/// The widget is click-driven; there is no keyboard path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// Id of the clicked element
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Id of the element the event targets
    #[must_use]
    pub fn element_id(&self) -> &str {
        match self {
            Self::Click { element_id } => element_id,
        }
    }
}

/// Mock DOM holding the panel's elements by id
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the calculator page structure
    ///
    /// Two display lines under the ids the host page uses: `result` and
    /// `current-progress`.
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();
        dom.register_element(
            DomElement::new("div")
                .with_id(RESULT_ID)
                .with_class("display"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id(PROGRESS_ID)
                .with_class("display-progress"),
        );
        dom
    }

    /// Registers an element for id lookup
    ///
    /// Elements without an id are dropped; the panel addresses everything
    /// by id.
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by id
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by id
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Checks whether an element with the given id exists
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Updates element text by id
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by id
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Dispatches an event, recording it in the history
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Events dispatched so far, oldest first
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears the event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }
}
