//! # Input Events
//!
//! The closed vocabulary of keypad presses the engine understands: ten
//! digits, the decimal point, four operators, equals, clear, sign toggle
//! and percent. Hosts map their own gestures (buttons, keyboard) to these
//! events.
//!
//! For terminals and tests there is also a compact key syntax, one
//! character per press:
//!
//! | Key              | Event                     |
//! |------------------|---------------------------|
//! | `0`-`9`          | `Digit`                   |
//! | `.`              | `Decimal`                 |
//! | `+ - * /`        | `Operator` (also `− x × ÷`) |
//! | `=`              | `Equals`                  |
//! | `c` / `C`        | `Clear`                   |
//! | `~` / `±`        | `ToggleSign`              |
//! | `%`              | `Percent`                 |
//!
//! ## Example
//!
//! ```rust
//! use calc_core::event::{parse_keys, InputEvent};
//! use calc_core::operator::Operator;
//!
//! let events = parse_keys("12 + 3=").unwrap();
//! assert_eq!(events.len(), 5);
//! assert_eq!(events[2], InputEvent::Operator(Operator::Add));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::operator::Operator;
use crate::settings::SymbolStyle;

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Numeric value of the digit.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The digit as a character.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> CalcResult<Self> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(CalcError::invalid_input(
                "digit",
                value.to_string(),
                "Digit must be between 0 and 9",
            ))
        }
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> CalcResult<Self> {
        match c.to_digit(10) {
            Some(d) => Ok(Digit(d as u8)),
            None => Err(CalcError::invalid_input(
                "digit",
                c.to_string(),
                "Not a decimal digit",
            )),
        }
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One keypad press.
///
/// ## JSON Example
///
/// ```json
/// { "type": "Digit", "value": 7 }
/// { "type": "Operator", "value": "Divide" }
/// { "type": "Equals" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum InputEvent {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    ToggleSign,
    Percent,
}

impl InputEvent {
    /// Build a `Digit` event, rejecting values above 9.
    pub fn digit(value: u8) -> CalcResult<Self> {
        Digit::try_from(value).map(InputEvent::Digit)
    }

    /// Every event in the vocabulary, in keypad order.
    pub fn all() -> Vec<InputEvent> {
        let digits = (0..=9u8).map(|d| InputEvent::Digit(Digit(d)));
        let operators = Operator::ALL.into_iter().map(InputEvent::Operator);
        digits
            .chain([InputEvent::Decimal])
            .chain(operators)
            .chain([
                InputEvent::Equals,
                InputEvent::Clear,
                InputEvent::ToggleSign,
                InputEvent::Percent,
            ])
            .collect()
    }

    /// Button caption for this event.
    pub fn label(self) -> String {
        match self {
            InputEvent::Digit(d) => d.to_string(),
            InputEvent::Decimal => ".".to_string(),
            InputEvent::Operator(op) => op.symbol(SymbolStyle::Unicode).to_string(),
            InputEvent::Equals => "=".to_string(),
            InputEvent::Clear => "AC".to_string(),
            InputEvent::ToggleSign => "±".to_string(),
            InputEvent::Percent => "%".to_string(),
        }
    }
}

impl FromStr for InputEvent {
    type Err = CalcError;

    /// Parse a single key token (`"7"`, `"÷"`, `"AC"`, `"+/-"`, ...).
    fn from_str(s: &str) -> CalcResult<Self> {
        let token = s.trim();
        if let Some(op) = Operator::from_symbol(token) {
            return Ok(InputEvent::Operator(op));
        }

        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Ok(digit) = Digit::try_from(c) {
                return Ok(InputEvent::Digit(digit));
            }
        }

        match token {
            "." | "," => Ok(InputEvent::Decimal),
            "=" => Ok(InputEvent::Equals),
            "c" | "C" | "AC" | "ac" | "clear" => Ok(InputEvent::Clear),
            "~" | "±" | "+/-" | "neg" => Ok(InputEvent::ToggleSign),
            "%" => Ok(InputEvent::Percent),
            _ => Err(CalcError::invalid_input("key", token, "Not a calculator key")),
        }
    }
}

/// Parse a compact key string, one character per press.
///
/// Whitespace is ignored. Parsing is all-or-nothing: the first unknown
/// character fails the whole string.
pub fn parse_keys(keys: &str) -> CalcResult<Vec<InputEvent>> {
    keys.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, c)| {
            let mut buf = [0u8; 4];
            c.encode_utf8(&mut buf).parse::<InputEvent>().map_err(|_| {
                CalcError::invalid_input(
                    "keys",
                    c.to_string(),
                    format!("Not a calculator key (position {})", position),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_bounds() {
        assert_eq!(Digit::try_from(9u8).unwrap().value(), 9);
        assert!(Digit::try_from(10u8).is_err());
        assert!(InputEvent::digit(12).is_err());
        assert_eq!(Digit::try_from('4').unwrap().as_char(), '4');
        assert!(Digit::try_from('a').is_err());
    }

    #[test]
    fn test_parse_single_tokens() {
        assert_eq!("7".parse::<InputEvent>().unwrap(), InputEvent::digit(7).unwrap());
        assert_eq!("÷".parse::<InputEvent>().unwrap(), InputEvent::Operator(Operator::Divide));
        assert_eq!(" AC ".parse::<InputEvent>().unwrap(), InputEvent::Clear);
        assert_eq!("+/-".parse::<InputEvent>().unwrap(), InputEvent::ToggleSign);
        assert_eq!("%".parse::<InputEvent>().unwrap(), InputEvent::Percent);
        assert!("12".parse::<InputEvent>().is_err());
        assert!("sqrt".parse::<InputEvent>().is_err());
    }

    #[test]
    fn test_labels_parse_back() {
        for event in InputEvent::all() {
            assert_eq!(event.label().parse::<InputEvent>().unwrap(), event);
        }
    }

    #[test]
    fn test_vocabulary_size() {
        // ten digits, decimal, four operators, equals, clear, sign, percent
        assert_eq!(InputEvent::all().len(), 19);
    }

    #[test]
    fn test_parse_keys_chain() {
        let events = parse_keys("5+3*2=").unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::digit(5).unwrap(),
                InputEvent::Operator(Operator::Add),
                InputEvent::digit(3).unwrap(),
                InputEvent::Operator(Operator::Multiply),
                InputEvent::digit(2).unwrap(),
                InputEvent::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_keys_rejects_unknown() {
        let err = parse_keys("1+q").unwrap_err();
        match err {
            CalcError::InvalidInput { value, reason, .. } => {
                assert_eq!(value, "q");
                assert!(reason.contains("position 2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_string(&InputEvent::digit(7).unwrap()).unwrap();
        assert_eq!(json, r#"{"type":"Digit","value":7}"#);

        let op: InputEvent = serde_json::from_str(r#"{"type":"Operator","value":"Divide"}"#).unwrap();
        assert_eq!(op, InputEvent::Operator(Operator::Divide));

        let equals: InputEvent = serde_json::from_str(r#"{"type":"Equals"}"#).unwrap();
        assert_eq!(equals, InputEvent::Equals);

        assert!(serde_json::from_str::<InputEvent>(r#"{"type":"Digit","value":11}"#).is_err());
    }
}
