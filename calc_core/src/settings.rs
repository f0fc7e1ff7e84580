//! # Calculator Settings
//!
//! Presentation knobs for the engine's text output. Settings never change
//! arithmetic; they only affect how history and errors are rendered.
//!
//! Settings files are plain JSON. Every field is optional and falls back to
//! its default:
//!
//! ```json
//! {
//!   "symbol_style": "ascii",
//!   "error_message": "Cannot divide by zero"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Which glyphs to use for operators in history text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolStyle {
    /// `+ − × ÷`
    #[default]
    Unicode,
    /// `+ - * /`
    Ascii,
}

/// Settings for a [`Calculator`](crate::engine::Calculator).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Operator glyphs used in history text
    pub symbol_style: SymbolStyle,

    /// Replacement for the built-in division-by-zero display text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl CalculatorSettings {
    /// Settings that render history with ASCII operators.
    pub fn ascii() -> Self {
        CalculatorSettings {
            symbol_style: SymbolStyle::Ascii,
            ..Default::default()
        }
    }

    /// Text shown in place of the operand while `error` is active.
    pub fn error_text(&self, error: &CalcError) -> String {
        match (&self.error_message, error) {
            (Some(message), CalcError::DivisionByZero) => message.clone(),
            _ => error.to_string(),
        }
    }

    /// Load settings from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use calc_core::settings::CalculatorSettings;
    /// use std::path::Path;
    ///
    /// let settings = CalculatorSettings::load(Path::new("keypad.json"))?;
    /// # Ok::<(), calc_core::errors::CalcError>(())
    /// ```
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read", path.display().to_string(), e.to_string())
        })?;

        let settings: CalculatorSettings = serde_json::from_str(&contents).map_err(|e| {
            CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), ?settings, "loaded calculator settings");
        Ok(settings)
    }
}
