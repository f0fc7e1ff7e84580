//! # Number Formatting
//!
//! One formatter is used for every value the engine writes back into its
//! operand text, so a computed result redisplays and reparses to the same
//! `f64`.
//!
//! - Finite values use the shortest decimal text that round-trips, without
//!   exponent notation or trailing zeros (`0.1 + 0.2` shows as
//!   `0.30000000000000004`, `2.50` as `2.5`).
//! - Negative zero renders as `0`.
//! - Non-finite values render as `Infinity`, `-Infinity` and `NaN`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::format::{format_number, parse_operand};
//!
//! assert_eq!(format_number(16.0), "16");
//! assert_eq!(format_number(-0.0), "0");
//! assert_eq!(parse_operand(&format_number(0.005)), 0.005);
//! ```

/// Render a value as operand text.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Parse operand text back into a value.
///
/// Accepts everything the keypad can build (`"12"`, `"0."`, `"3.25"`) and
/// everything [`format_number`] emits. Text that fails to parse is logged
/// and read as zero.
pub fn parse_operand(text: &str) -> f64 {
    match text.parse::<f64>() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(text, error = %e, "operand text is not a number, reading as 0");
            0.0
        }
    }
}

/// True when `text` is a plain decimal entry that digits may be appended to.
///
/// Computed values such as `Infinity` or `NaN` are displayable but are not
/// entries: typing over them starts a new operand.
pub fn is_plain_entry(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.chars().filter(|&c| c == '.').count() <= 1
}
