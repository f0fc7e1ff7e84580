//! # calc_core - Keypad Calculator Engine
//!
//! `calc_core` is the arithmetic heart of a keypad calculator widget. It
//! consumes discrete key events (digits, decimal point, operators, equals,
//! clear, sign toggle, percent) and after every event hands back a
//! snapshot the host can render: the display text, the expression in
//! progress and an error flag.
//!
//! ## Design Philosophy
//!
//! - **One owned state**: the whole calculator memory is a single value,
//!   replaced wholesale on every event
//! - **Left to right**: chained operators fold immediately, no precedence
//! - **Errors are state**: division by zero becomes an error display that
//!   only Clear dismisses, never a panic or an `Err` at the host boundary
//! - **JSON-First**: events, snapshots and settings implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::Calculator;
//!
//! let mut calc = Calculator::new();
//! let snapshot = calc.press_keys("5+3*2=").unwrap();
//!
//! // (5 + 3) × 2, evaluated left to right
//! assert_eq!(snapshot.display_text, "16");
//! assert_eq!(snapshot.history_text, "8 × 2 =");
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The calculator and its event dispatch
//! - [`state`] - Engine state and transition rules
//! - [`evaluator`] - Pure binary arithmetic
//! - [`event`] - Input event vocabulary and key parsing
//! - [`operator`] - Operator enum and display symbols
//! - [`snapshot`] - Renderable view of the engine
//! - [`format`] - Number-to-text formatting policy
//! - [`settings`] - Display settings and settings files
//! - [`errors`] - Structured error types

pub mod engine;
pub mod errors;
pub mod evaluator;
pub mod event;
pub mod format;
pub mod operator;
pub mod settings;
pub mod snapshot;
pub mod state;

// Re-export commonly used types at crate root for convenience
pub use engine::Calculator;
pub use errors::{CalcError, CalcResult};
pub use event::{Digit, InputEvent};
pub use operator::Operator;
pub use settings::{CalculatorSettings, SymbolStyle};
pub use snapshot::CalculatorSnapshot;
