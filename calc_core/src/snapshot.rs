//! # Calculator Snapshot
//!
//! The read-only view a host renders after every event.

use serde::{Deserialize, Serialize};

use crate::settings::CalculatorSettings;
use crate::state::EngineState;

/// What the display should show right now.
///
/// ## JSON Example
///
/// ```json
/// {
///   "display_text": "3",
///   "history_text": "1 + 2 =",
///   "has_error": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorSnapshot {
    /// Operand being typed, the last result, or the error message
    pub display_text: String,

    /// Expression in progress; empty when nothing is pending
    pub history_text: String,

    /// True while an arithmetic error is shown; hosts should style it distinctly
    pub has_error: bool,
}

impl CalculatorSnapshot {
    /// Project an engine state into a snapshot.
    pub fn project(state: &EngineState, settings: &CalculatorSettings) -> Self {
        let display_text = match &state.error {
            Some(error) => settings.error_text(error),
            None => state.current_input.clone(),
        };

        CalculatorSnapshot {
            display_text,
            history_text: state.history.clone(),
            has_error: state.error.is_some(),
        }
    }

    /// Snapshot of a fresh calculator.
    pub fn initial(settings: &CalculatorSettings) -> Self {
        Self::project(&EngineState::initial(), settings)
    }
}

impl Default for CalculatorSnapshot {
    fn default() -> Self {
        Self::initial(&CalculatorSettings::default())
    }
}
