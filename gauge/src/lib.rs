//! # Gauge Engine
//!
//! Gauge is a single-line expression language for dimensioned
//! calculations: arithmetic, lengths in millimetres, rounding-to-multiple
//! operators, comparisons, string slicing, boolean logic, and
//! conditionals.
//!
//! ## Quick Start
//!
//! ```rust
//! use gauge::{evaluate, Value};
//!
//! assert_eq!(evaluate("1 + 2 * 3").unwrap(), Some(Value::Number(7.0)));
//! assert_eq!(evaluate("5mm + 2mm").unwrap(), Some(Value::Number(7.0)));
//! assert_eq!(
//!     evaluate(r#"if 3 > 2 then "yes" else "no""#).unwrap(),
//!     Some(Value::Text("yes".to_string()))
//! );
//! ```
//!
//! ## Pipeline
//!
//! Evaluation is a pure function of the input text, in two strictly
//! pipelined components:
//!
//! - the [`scanner`] turns raw text into a token stream, one token per
//!   pull, terminated by an end-of-input marker or an error token;
//! - the [`evaluator`] consumes that stream with one token of lookahead
//!   under an operator-precedence grammar and produces a [`Value`]
//!   directly. No syntax tree is built or retained.
//!
//! A false condition with no `else`/`:` branch legally produces no value,
//! so [`evaluate`] returns `Option<Value>`. Every failure — malformed
//! number, token-expectation mismatch, dynamic type violation — aborts
//! the whole evaluation with a single [`GaugeError`].

pub mod error;
pub mod evaluator;
pub mod scanner;
pub mod value;

pub use error::GaugeError;
pub use evaluator::evaluate;
pub use scanner::{Scanner, Token, TokenKind};
pub use value::Value;

/// Result type for Gauge operations
pub type GaugeResult<T> = Result<T, GaugeError>;

#[cfg(test)]
mod tests;
