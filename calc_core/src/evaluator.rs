//! # Evaluator
//!
//! Pure binary arithmetic over `f64`. Addition, subtraction and
//! multiplication follow IEEE-754 with no overflow detection, so results may
//! be infinite. Division by zero (positive or negative) is the one failure.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::evaluator::evaluate;
//! use calc_core::operator::Operator;
//! use calc_core::CalcError;
//!
//! assert_eq!(evaluate(Operator::Multiply, 8.0, 2.0), Ok(16.0));
//! assert_eq!(evaluate(Operator::Divide, 5.0, 0.0), Err(CalcError::DivisionByZero));
//! ```

use crate::errors::{CalcError, CalcResult};
use crate::operator::Operator;

/// Apply `operator` to `first` and `second` (`first op second`).
pub fn evaluate(operator: Operator, first: f64, second: f64) -> CalcResult<f64> {
    match operator {
        Operator::Add => Ok(first + second),
        Operator::Subtract => Ok(first - second),
        Operator::Multiply => Ok(first * second),
        // -0.0 == 0.0 under IEEE comparison
        Operator::Divide if second == 0.0 => Err(CalcError::DivisionByZero),
        Operator::Divide => Ok(first / second),
    }
}
