//! Shared numeric and string helpers
//!
//! Rounding-to-multiple semantics, `left`/`right` slicing, and literal
//! coercion, kept separate from the grammar so they can be tested in
//! isolation.

use crate::{GaugeError, GaugeResult};

/// Round `value` to the nearest multiple of `divisor`, half up: a
/// remainder of at least half the divisor snaps to the next multiple.
pub fn round_nearest(value: f64, divisor: f64) -> f64 {
    if value % divisor >= divisor / 2.0 {
        round_up(value, divisor)
    } else {
        round_down(value, divisor)
    }
}

/// Round `value` down to a multiple of `divisor`
pub fn round_down(value: f64, divisor: f64) -> f64 {
    (value / divisor).floor() * divisor
}

/// Round `value` up to a multiple of `divisor`
pub fn round_up(value: f64, divisor: f64) -> f64 {
    (value / divisor).ceil() * divisor
}

/// First `n` characters of `s`; the whole string when `n` exceeds its
/// length (clamped, never an error)
pub fn take_left(s: &str, n: i64) -> String {
    if n >= s.chars().count() as i64 {
        s.to_string()
    } else {
        s.chars().take(n.max(0) as usize).collect()
    }
}

/// Last `n` characters of `s`; the whole string when `n` exceeds its
/// length (clamped, never an error)
pub fn take_right(s: &str, n: i64) -> String {
    let len = s.chars().count() as i64;
    if n >= len {
        s.to_string()
    } else {
        s.chars().skip((len - n.max(0)) as usize).collect()
    }
}

/// Parse a numeric literal lexeme
pub fn parse_number(text: &str) -> GaugeResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|err| GaugeError::Syntax(format!("invalid number {:?}: {}", text, err)))
}

/// Parse a character-count argument; must be a whole number
pub fn parse_count(text: &str) -> GaugeResult<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|err| GaugeError::Syntax(format!("invalid character count {:?}: {}", text, err)))
}
