//! The evaluation result model
//!
//! Every grammar rule produces a [`Value`]: a tagged union of number,
//! boolean, or text. Types are checked dynamically at each rule boundary;
//! the `as_*` downcasts turn a mismatch into a [`GaugeError::Type`]
//! instead of an unchecked cast.

use crate::{GaugeError, GaugeResult};
use serde::Serialize;
use std::fmt;

/// A scalar result of evaluating an expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    Text(String),
}

impl Value {
    /// Human-readable type name, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Text(_) => "text",
        }
    }

    /// Downcast to a boolean, or fail with a type diagnostic
    pub fn as_boolean(&self) -> GaugeResult<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(GaugeError::Type(format!(
                "expected a boolean, found {} `{}`",
                other.type_name(),
                other
            ))),
        }
    }

    /// Downcast to a number, or fail with a type diagnostic
    pub fn as_number(&self) -> GaugeResult<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(GaugeError::Type(format!(
                "expected a number, found {} `{}`",
                other.type_name(),
                other
            ))),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}
