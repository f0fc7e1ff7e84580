//! # Binary Operators
//!
//! The closed set of operators a calculator keypad offers. Being an enum,
//! every transition and evaluation over it is checked for exhaustiveness.

use serde::{Deserialize, Serialize};

use crate::settings::SymbolStyle;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol used for this operator in history text.
    ///
    /// ```rust
    /// use calc_core::operator::Operator;
    /// use calc_core::settings::SymbolStyle;
    ///
    /// assert_eq!(Operator::Multiply.symbol(SymbolStyle::Unicode), "×");
    /// assert_eq!(Operator::Multiply.symbol(SymbolStyle::Ascii), "*");
    /// ```
    pub fn symbol(self, style: SymbolStyle) -> &'static str {
        match (self, style) {
            (Operator::Add, _) => "+",
            (Operator::Subtract, SymbolStyle::Unicode) => "−",
            (Operator::Subtract, SymbolStyle::Ascii) => "-",
            (Operator::Multiply, SymbolStyle::Unicode) => "×",
            (Operator::Multiply, SymbolStyle::Ascii) => "*",
            (Operator::Divide, SymbolStyle::Unicode) => "÷",
            (Operator::Divide, SymbolStyle::Ascii) => "/",
        }
    }

    /// Look up an operator from a key symbol in either style.
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" | "−" => Some(Operator::Subtract),
            "*" | "x" | "X" | "×" => Some(Operator::Multiply),
            "/" | "÷" => Some(Operator::Divide),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_resolve_back_to_operator() {
        for op in Operator::ALL {
            for style in [SymbolStyle::Unicode, SymbolStyle::Ascii] {
                assert_eq!(Operator::from_symbol(op.symbol(style)), Some(op));
            }
        }
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(Operator::from_symbol("^"), None);
        assert_eq!(Operator::from_symbol(""), None);
    }
}
