//! # Calculator Engine
//!
//! [`Calculator`] owns exactly one [`EngineState`] and dispatches each
//! [`InputEvent`] to its transition rule. Events are processed one at a
//! time to completion; `apply` takes `&mut self`, so concurrent delivery to
//! the same instance is ruled out by the borrow checker.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::{Calculator, InputEvent};
//! use calc_core::operator::Operator;
//!
//! let mut calc = Calculator::new();
//! calc.apply(InputEvent::digit(1)?);
//! calc.apply(InputEvent::Operator(Operator::Add));
//! calc.apply(InputEvent::digit(2)?);
//! let snapshot = calc.apply(InputEvent::Equals);
//!
//! assert_eq!(snapshot.display_text, "3");
//! assert_eq!(snapshot.history_text, "1 + 2 =");
//! # Ok::<(), calc_core::CalcError>(())
//! ```

use crate::errors::CalcResult;
use crate::event::{parse_keys, InputEvent};
use crate::settings::CalculatorSettings;
use crate::snapshot::CalculatorSnapshot;
use crate::state::EngineState;

/// An event-driven keypad calculator.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: EngineState,
    settings: CalculatorSettings,
}

impl Calculator {
    /// Create a calculator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with custom settings.
    pub fn with_settings(settings: CalculatorSettings) -> Self {
        Calculator {
            state: EngineState::initial(),
            settings,
        }
    }

    /// Settings in effect.
    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    /// Current internal state.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Snapshot of the current state.
    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot::project(&self.state, &self.settings)
    }

    /// Process one event and return the resulting snapshot.
    pub fn apply(&mut self, event: InputEvent) -> CalculatorSnapshot {
        let state = std::mem::take(&mut self.state);
        self.state = state.next(event, self.settings.symbol_style);

        let snapshot = self.snapshot();
        tracing::debug!(
            ?event,
            display = %snapshot.display_text,
            history = %snapshot.history_text,
            has_error = snapshot.has_error,
            "applied event"
        );
        snapshot
    }

    /// Process a sequence of events, returning the final snapshot.
    pub fn apply_all<I>(&mut self, events: I) -> CalculatorSnapshot
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.apply(event);
        }
        self.snapshot()
    }

    /// Parse a compact key string and apply it.
    ///
    /// Nothing is applied if any key is unknown.
    ///
    /// ```rust
    /// use calc_core::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// assert_eq!(calc.press_keys("5+3*2=")?.display_text, "16");
    /// assert!(calc.press_keys("1?").is_err());
    /// assert_eq!(calc.snapshot().display_text, "16");
    /// # Ok::<(), calc_core::CalcError>(())
    /// ```
    pub fn press_keys(&mut self, keys: &str) -> CalcResult<CalculatorSnapshot> {
        let events = parse_keys(keys)?;
        Ok(self.apply_all(events))
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) -> CalculatorSnapshot {
        self.apply(InputEvent::Clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::Operator;

    fn digit(d: u8) -> InputEvent {
        InputEvent::digit(d).unwrap()
    }

    fn press(keys: &str) -> CalculatorSnapshot {
        Calculator::new().press_keys(keys).unwrap()
    }

    #[test]
    fn test_construction_yields_initial_snapshot() {
        let calc = Calculator::new();
        assert_eq!(calc.snapshot(), CalculatorSnapshot::default());
        assert_eq!(calc.snapshot().display_text, "0");
    }

    #[test]
    fn test_digits_concatenate() {
        let mut calc = Calculator::new();
        calc.apply(digit(1));
        assert_eq!(calc.apply(digit(2)).display_text, "12");
        assert_eq!(press("0009870").display_text, "9870");
    }

    #[test]
    fn test_simple_addition() {
        let mut calc = Calculator::new();
        let snapshot = calc.apply_all([digit(1), InputEvent::Operator(Operator::Add), digit(2), InputEvent::Equals]);
        assert_eq!(snapshot.display_text, "3");
        assert_eq!(snapshot.history_text, "1 + 2 =");
        assert!(!snapshot.has_error);
    }

    #[test]
    fn test_chained_operations_without_precedence() {
        let snapshot = press("5+3*2=");
        assert_eq!(snapshot.display_text, "16");
        assert_eq!(snapshot.history_text, "8 × 2 =");
    }

    #[test]
    fn test_pending_history() {
        assert_eq!(press("12+").history_text, "12 +");
        assert_eq!(press("12+").display_text, "12");
        assert_eq!(press("12-").history_text, "12 −");
    }

    #[test]
    fn test_division_by_zero_and_recovery() {
        let mut calc = Calculator::new();
        let errored = calc.press_keys("5/0=").unwrap();
        assert!(errored.has_error);
        assert_eq!(errored.display_text, "Error: Division by zero");
        assert_eq!(errored.history_text, "");

        assert_eq!(calc.apply(digit(1)), errored);
        assert_eq!(calc.apply(InputEvent::Equals), errored);

        let cleared = calc.clear();
        assert_eq!(cleared.display_text, "0");
        assert!(!cleared.has_error);
        assert_eq!(cleared, CalculatorSnapshot::default());
    }

    #[test]
    fn test_clear_from_any_reachable_state() {
        let sequences = ["", "12", "12+", "12+3", "12+3=", "5/0=", "1.5~%", "9*+", "4+5*"];
        for keys in sequences {
            let mut calc = Calculator::new();
            calc.press_keys(keys).unwrap();
            assert_eq!(calc.clear(), CalculatorSnapshot::default(), "after {keys:?}");
            assert_eq!(calc.state(), &EngineState::initial());
        }
    }

    #[test]
    fn test_percent_twice() {
        assert_eq!(press("50%%").display_text, "0.005");
    }

    #[test]
    fn test_toggle_sign_is_its_own_inverse() {
        for keys in ["7", "42.5", "0.25", "100"] {
            let once = press(keys);
            let twice = press(&format!("{keys}~~"));
            assert_eq!(once.display_text, twice.display_text);
        }
    }

    #[test]
    fn test_equals_from_initial_state() {
        let mut calc = Calculator::new();
        let snapshot = calc.apply(InputEvent::Equals);
        assert_eq!(snapshot, CalculatorSnapshot::default());
    }

    #[test]
    fn test_repeated_equals_does_not_repeat_operation() {
        assert_eq!(press("2+3==").display_text, "5");
        assert_eq!(press("2+3==").history_text, "2 + 3 =");
    }

    #[test]
    fn test_decimal_arithmetic() {
        assert_eq!(press("0.1+0.2=").display_text, "0.30000000000000004");
        assert_eq!(press(".5*4=").display_text, "2");
    }

    #[test]
    fn test_negative_results() {
        assert_eq!(press("3-8=").display_text, "-5");
        assert_eq!(press("3-8=~").display_text, "5");
    }

    #[test]
    fn test_overflow_shows_infinity() {
        let mut calc = Calculator::new();
        calc.press_keys("9".repeat(200).as_str()).unwrap();
        calc.press_keys("*").unwrap();
        calc.press_keys("9".repeat(200).as_str()).unwrap();
        let snapshot = calc.press_keys("=").unwrap();
        assert_eq!(snapshot.display_text, "Infinity");
        assert!(!snapshot.has_error);
    }

    #[test]
    fn test_ascii_settings() {
        let mut calc = Calculator::with_settings(CalculatorSettings::ascii());
        assert_eq!(calc.press_keys("6/3=").unwrap().history_text, "6 / 3 =");
    }

    #[test]
    fn test_custom_error_message() {
        let settings = CalculatorSettings {
            error_message: Some("Cannot divide by zero".to_string()),
            ..Default::default()
        };
        let mut calc = Calculator::with_settings(settings);
        assert_eq!(calc.press_keys("1/0=").unwrap().display_text, "Cannot divide by zero");
    }

    #[test]
    fn test_invalid_keys_apply_nothing() {
        let mut calc = Calculator::new();
        calc.press_keys("12+").unwrap();
        let before = calc.state().clone();
        assert!(calc.press_keys("3 sqrt").is_err());
        assert_eq!(calc.state(), &before);
    }
}
