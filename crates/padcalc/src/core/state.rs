//! Interaction states
//!
//! Three states interpret the same event kinds differently depending on
//! what the user was just doing. Each handler owns one phase's complete
//! response; a transition is a plain assignment of a new variant on the
//! context. The shared fallback resets on `Clear` and ignores everything
//! else, so each state overrides only what differs from "do nothing".

use crate::core::context::Calculator;
use crate::core::event::InputEvent;
use crate::core::screen::Screen;
use crate::core::{format_number, parse_operand, DEFAULT_DISPLAY};

/// Interaction phase of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Typing a number; the initial state
    InputNumber,
    /// An operator was just chosen; the next keystroke starts a fresh entry
    InputOperator,
    /// An equals computation just completed
    Result,
}

impl State {
    /// Runs the active state's handler for one event
    pub(crate) fn handle<S: Screen>(self, calc: &mut Calculator<S>, event: InputEvent) {
        match self {
            Self::InputNumber => input_number(calc, event),
            Self::InputOperator => input_operator(calc, event),
            Self::Result => result(calc, event),
        }
    }
}

/// Shared fallback: `Clear` resets the whole context in every state,
/// anything else not claimed by the active state is ignored.
fn base<S: Screen>(calc: &mut Calculator<S>, event: InputEvent) {
    if event == InputEvent::Clear {
        calc.clear_state();
    }
}

fn input_number<S: Screen>(calc: &mut Calculator<S>, event: InputEvent) {
    match event {
        InputEvent::ClearEntry => {
            calc.next_operand.clear();
            calc.update_display(DEFAULT_DISPLAY);
        }
        InputEvent::Backspace => {
            calc.next_operand.pop();
            let text = if calc.next_operand.is_empty() {
                DEFAULT_DISPLAY.to_string()
            } else {
                calc.next_operand.clone()
            };
            calc.update_display(&text);
        }
        InputEvent::Operator(op) => {
            calc.update_operand(calc.current_operator);
            calc.current_operator = Some(op);
            let progress = format!("{} {}", calc.current_operand, op.symbol());
            calc.update_progress(&progress);
            let display = calc.current_operand.clone();
            calc.update_display(&display);
            calc.state = State::InputOperator;
        }
        InputEvent::Digit(digit) => {
            if let Some(ch) = char::from_digit(u32::from(digit), 10) {
                calc.next_operand.push(ch);
                let text = calc.next_operand.clone();
                calc.update_display(&text);
            }
        }
        InputEvent::Point => {
            if !calc.next_operand.contains('.') {
                if calc.next_operand.is_empty() {
                    calc.next_operand.push_str("0.");
                } else {
                    calc.next_operand.push('.');
                }
                let text = calc.next_operand.clone();
                calc.update_display(&text);
            }
        }
        InputEvent::Equal => {
            if calc.current_operand.is_empty() {
                // nothing pending: echo the entry on the progress line
                let progress = format!("{} =", calc.next_operand);
                calc.update_progress(&progress);
            } else {
                calc.next_operand = format_number(parse_operand(&calc.next_operand));
                let result = calc.calculate_result();
                let expression = format!(
                    "{} {} {}",
                    calc.current_operand,
                    calc.operator_symbol(),
                    calc.next_operand
                );
                calc.update_progress(&format!("{expression} ="));
                calc.record(&expression, &result);
                calc.update_display(&result);
                calc.state = State::Result;
            }
        }
        InputEvent::Clear => base(calc, event),
    }
}

fn input_operator<S: Screen>(calc: &mut Calculator<S>, event: InputEvent) {
    match event {
        InputEvent::ClearEntry => {
            calc.next_operand.clear();
            calc.update_display(DEFAULT_DISPLAY);
            calc.state = State::InputNumber;
        }
        InputEvent::Operator(op) => {
            // replaces the earlier choice; nothing is computed yet
            calc.current_operator = Some(op);
            let progress = format!("{} {}", calc.current_operand, op.symbol());
            calc.update_progress(&progress);
        }
        InputEvent::Digit(digit) => {
            if let Some(ch) = char::from_digit(u32::from(digit), 10) {
                calc.next_operand = ch.to_string();
                let text = calc.next_operand.clone();
                calc.update_display(&text);
                calc.state = State::InputNumber;
            }
        }
        InputEvent::Point => {
            calc.next_operand = "0.".to_string();
            calc.update_display("0.");
            calc.state = State::InputNumber;
        }
        InputEvent::Equal => {
            // `5 + =` collapses into `5 + 5 =`: copy the committed operand
            // into the entry and run the number-entry equals handler; its
            // own transition decides the final state
            calc.next_operand = calc.current_operand.clone();
            let text = calc.next_operand.clone();
            calc.update_display(&text);
            input_number(calc, InputEvent::Equal);
        }
        InputEvent::Clear | InputEvent::Backspace => base(calc, event),
    }
}

fn result<S: Screen>(calc: &mut Calculator<S>, event: InputEvent) {
    match event {
        InputEvent::ClearEntry => calc.clear_state(),
        InputEvent::Operator(_) => {
            // chain onto the finished computation: its formatted result
            // seeds a fresh entry and the operator replays against it
            let seed = calc.calculate_result();
            calc.clear_state();
            calc.next_operand = seed.clone();
            calc.update_display(&seed);
            input_number(calc, event);
        }
        InputEvent::Digit(_) => {
            // a digit after a result starts an entirely new calculation
            calc.clear_state();
            input_number(calc, event);
        }
        InputEvent::Equal => {
            // repeated equals reapplies the pending operator to the result
            calc.current_operand = calc.calculate_result();
            calc.next_operand = format_number(parse_operand(&calc.next_operand));
            let result = calc.calculate_result();
            let expression = format!(
                "{} {} {}",
                calc.current_operand,
                calc.operator_symbol(),
                calc.next_operand
            );
            calc.update_progress(&format!("{expression} ="));
            calc.record(&expression, &result);
            calc.update_display(&result);
        }
        InputEvent::Clear | InputEvent::Backspace | InputEvent::Point => base(calc, event),
    }
}
