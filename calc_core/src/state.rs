//! # Engine State and Transition Rules
//!
//! [`EngineState`] is the whole memory of a calculator. Transitions consume
//! the current state and return the next one, so a state is always replaced
//! wholesale and never observed half-updated.
//!
//! ## Rules
//!
//! | Event        | Effect                                                              |
//! |--------------|---------------------------------------------------------------------|
//! | Digit        | replace the operand when awaiting or at `"0"`, otherwise append      |
//! | Decimal      | start `"0."` when awaiting, append `.` once otherwise                |
//! | Operator     | fold the pending operation when a second operand was typed           |
//! | Equals       | evaluate the pending operation, then stop pending                    |
//! | Clear        | back to the initial state, from anywhere                             |
//! | ToggleSign   | negate the operand text                                             |
//! | Percent      | divide the operand text by 100                                      |
//!
//! While an error is active every event except Clear is a no-op.
//!
//! Equals with nothing pending is inert. That includes a second Equals in a
//! row: it does not repeat the last operation.

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;
use crate::evaluator::evaluate;
use crate::event::{Digit, InputEvent};
use crate::format::{format_number, is_plain_entry, parse_operand};
use crate::operator::Operator;
use crate::settings::SymbolStyle;

/// The left-hand operand together with the operator waiting for its
/// right-hand side. One is never stored without the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingOperation {
    pub first_operand: f64,
    pub operator: Operator,
}

/// Complete calculator memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Operand text being typed, or the formatted last result
    pub current_input: String,

    /// Operation waiting for a second operand
    pub pending: Option<PendingOperation>,

    /// Set after an operator or Equals until the next digit or decimal point
    pub awaiting_second_operand: bool,

    /// Trace of the expression in progress (`"12 +"`, `"1 + 2 ="`)
    pub history: String,

    /// Active arithmetic error; only Clear removes it
    pub error: Option<CalcError>,
}

impl Default for EngineState {
    fn default() -> Self {
        EngineState {
            current_input: "0".to_string(),
            pending: None,
            awaiting_second_operand: false,
            history: String::new(),
            error: None,
        }
    }
}

impl EngineState {
    /// The state of a freshly built or cleared calculator.
    pub fn initial() -> Self {
        Self::default()
    }

    /// True while an arithmetic error is being displayed.
    pub fn is_errored(&self) -> bool {
        self.error.is_some()
    }

    /// Apply one event and return the next state.
    ///
    /// `style` only affects the operator glyphs written into `history`.
    pub fn next(self, event: InputEvent, style: SymbolStyle) -> Self {
        if let InputEvent::Clear = event {
            return Self::initial();
        }
        if self.is_errored() {
            return self;
        }

        match event {
            InputEvent::Digit(digit) => self.push_digit(digit),
            InputEvent::Decimal => self.push_decimal(),
            InputEvent::Operator(op) => self.choose_operator(op, style),
            InputEvent::Equals => self.equals(style),
            InputEvent::ToggleSign => self.map_operand(|value| -value),
            InputEvent::Percent => self.map_operand(|value| value / 100.0),
            InputEvent::Clear => Self::initial(),
        }
    }

    fn push_digit(self, digit: Digit) -> Self {
        let current_input = if self.awaiting_second_operand
            || self.current_input == "0"
            || !is_plain_entry(&self.current_input)
        {
            digit.to_string()
        } else {
            let mut text = self.current_input;
            text.push(digit.as_char());
            text
        };

        EngineState {
            current_input,
            awaiting_second_operand: false,
            ..self
        }
    }

    fn push_decimal(self) -> Self {
        if self.awaiting_second_operand || !is_plain_entry(&self.current_input) {
            return EngineState {
                current_input: "0.".to_string(),
                awaiting_second_operand: false,
                ..self
            };
        }
        if self.current_input.contains('.') {
            return self;
        }

        let mut current_input = self.current_input;
        current_input.push('.');
        EngineState {
            current_input,
            ..self
        }
    }

    fn choose_operator(self, op: Operator, style: SymbolStyle) -> Self {
        let value = parse_operand(&self.current_input);

        match self.pending {
            Some(pending) if !self.awaiting_second_operand => {
                match evaluate(pending.operator, pending.first_operand, value) {
                    Ok(result) => {
                        let text = format_number(result);
                        EngineState {
                            history: format!("{} {}", text, op.symbol(style)),
                            current_input: text,
                            pending: Some(PendingOperation {
                                first_operand: result,
                                operator: op,
                            }),
                            awaiting_second_operand: true,
                            error: None,
                        }
                    }
                    Err(error) => self.fail(error),
                }
            }
            None => EngineState {
                history: format!("{} {}", format_number(value), op.symbol(style)),
                pending: Some(PendingOperation {
                    first_operand: value,
                    operator: op,
                }),
                awaiting_second_operand: true,
                ..self
            },
            // Operator pressed again before any digit: swap the operator only.
            Some(pending) => EngineState {
                pending: Some(PendingOperation {
                    operator: op,
                    ..pending
                }),
                awaiting_second_operand: true,
                ..self
            },
        }
    }

    fn equals(self, style: SymbolStyle) -> Self {
        let pending = match self.pending {
            Some(pending) if !self.awaiting_second_operand => pending,
            _ => return self,
        };

        let value = parse_operand(&self.current_input);
        match evaluate(pending.operator, pending.first_operand, value) {
            Ok(result) => EngineState {
                history: format!(
                    "{} {} {} =",
                    format_number(pending.first_operand),
                    pending.operator.symbol(style),
                    format_number(value)
                ),
                current_input: format_number(result),
                pending: None,
                awaiting_second_operand: true,
                error: None,
            },
            Err(error) => self.fail(error),
        }
    }

    fn map_operand(self, f: impl FnOnce(f64) -> f64) -> Self {
        let value = f(parse_operand(&self.current_input));
        EngineState {
            current_input: format_number(value),
            ..self
        }
    }

    fn fail(self, error: CalcError) -> Self {
        tracing::info!(%error, history = %self.history, "calculation failed");
        EngineState {
            history: String::new(),
            pending: None,
            awaiting_second_operand: false,
            error: Some(error),
            ..self
        }
    }
}
