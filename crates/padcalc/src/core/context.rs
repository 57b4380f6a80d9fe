//! Calculator context
//!
//! The single mutable widget state: the committed operand, the pending
//! operator, the entry in progress, the active interpretation state, the
//! tape, and the output screen. Every input event funnels through
//! [`Calculator::press`], which delegates to the active state's handler.

use tracing::{debug, trace};

use crate::core::event::InputEvent;
use crate::core::operations::{operate, Operator};
use crate::core::screen::Screen;
use crate::core::state::State;
use crate::core::tape::Tape;
use crate::core::{format_number, parse_operand, DEFAULT_DISPLAY};

/// Calculator widget context
///
/// Generic over the output [`Screen`] so the same core drives the mock
/// panel, a live browser page, or a bare buffer in tests. One instance
/// lives for the widget's life; handlers mutate it in place and every
/// `press` call completes before the next one starts.
#[derive(Debug)]
pub struct Calculator<S: Screen> {
    /// Operand committed before the pending operator; empty means none yet
    pub(crate) current_operand: String,
    /// Pending operator, if any
    pub(crate) current_operator: Option<Operator>,
    /// Operand currently being typed, or a seeded result
    pub(crate) next_operand: String,
    /// Active interpretation state
    pub(crate) state: State,
    /// Completed-computation log
    pub(crate) tape: Tape,
    /// Output surface
    pub(crate) screen: S,
}

impl<S: Screen> Calculator<S> {
    /// Creates a widget over the given screen, showing the default display
    #[must_use]
    pub fn new(screen: S) -> Self {
        let mut calc = Self {
            current_operand: String::new(),
            current_operator: None,
            next_operand: String::new(),
            state: State::InputNumber,
            tape: Tape::new(),
            screen,
        };
        calc.update_display(DEFAULT_DISPLAY);
        calc
    }

    /// Dispatches one input event to the active state's handler
    pub fn press(&mut self, event: InputEvent) {
        let before = self.state;
        trace!(?event, state = ?before, "dispatching input event");
        before.handle(self, event);
        if self.state != before {
            debug!(from = ?before, to = ?self.state, "state transition");
        }
    }

    /// Commits the entry in progress into the committed operand
    ///
    /// With no committed operand yet, the entry is numerically normalized
    /// and moved over unchanged. Otherwise the pending arithmetic is
    /// applied and its full-precision result becomes the committed
    /// operand; rounding happens only at equals. The entry is cleared
    /// either way. Used when an operator is chosen before equals.
    pub fn update_operand(&mut self, operator: Option<Operator>) {
        if self.current_operand.is_empty() {
            self.current_operand = format_number(parse_operand(&self.next_operand));
        } else {
            let a = parse_operand(&self.current_operand);
            let b = parse_operand(&self.next_operand);
            let value = operator.map_or(f64::NAN, |op| operate(op, a, b));
            self.current_operand = format_number(value);
        }
        self.next_operand.clear();
    }

    /// Computes the pending expression and formats it for display
    ///
    /// NaN passes through unformatted, integral results stay unrounded,
    /// and everything else rounds to exactly two decimal places. A missing
    /// operator yields the NaN sentinel.
    #[must_use]
    pub fn calculate_result(&self) -> String {
        let a = parse_operand(&self.current_operand);
        let b = parse_operand(&self.next_operand);
        let value = self
            .current_operator
            .map_or(f64::NAN, |op| operate(op, a, b));
        if value.is_nan() || value.fract() == 0.0 {
            format_number(value)
        } else {
            format!("{value:.2}")
        }
    }

    /// Resets operands, operator, state, and both display lines
    ///
    /// Restores the exact initial condition: display `0`, progress empty,
    /// state [`State::InputNumber`]. The tape survives; see
    /// [`Calculator::clear_tape`].
    pub fn clear_state(&mut self) {
        self.state = State::InputNumber;
        self.current_operand.clear();
        self.current_operator = None;
        self.next_operand.clear();
        self.update_display(DEFAULT_DISPLAY);
        self.update_progress("");
    }

    /// Writes the result line
    pub fn update_display(&mut self, value: &str) {
        self.screen.set_result(value);
    }

    /// Writes the progress line
    pub fn update_progress(&mut self, text: &str) {
        self.screen.set_progress(text);
    }

    /// Active interpretation state
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Operand committed before the pending operator
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// Pending operator, if any
    #[must_use]
    pub fn current_operator(&self) -> Option<Operator> {
        self.current_operator
    }

    /// Operand currently being typed
    #[must_use]
    pub fn next_operand(&self) -> &str {
        &self.next_operand
    }

    /// Completed-computation log
    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Wipes the tape
    pub fn clear_tape(&mut self) {
        self.tape.clear();
    }

    /// The output screen
    #[must_use]
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Mutable access to the output screen
    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    /// Symbol of the pending operator, or the empty string
    pub(crate) fn operator_symbol(&self) -> &'static str {
        self.current_operator.map_or("", |op| op.symbol())
    }

    /// Records a completed computation on the tape
    pub(crate) fn record(&mut self, expression: &str, result: &str) {
        self.tape.record(expression, result);
    }
}
