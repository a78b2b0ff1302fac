//! Numeric grammar levels
//!
//! Expression, term, power, rounding, and factor, from lowest to highest
//! precedence. All operands here are numbers; booleans appear only as
//! their numeric spellings (`Y`/`y` is 1, `N`/`n` is 0) so they can
//! participate in arithmetic.

use super::{operations, Evaluator};
use crate::scanner::TokenKind;
use crate::{GaugeError, GaugeResult, Value};

impl Evaluator<'_> {
    /// Level 5: addition and subtraction, left-associative, with an
    /// optional unary leading sign
    pub(super) fn expression(&mut self) -> GaugeResult<f64> {
        let mut value = if self.accept(TokenKind::Plus)? {
            self.term()?
        } else if self.accept(TokenKind::Minus)? {
            -self.term()?
        } else {
            self.term()?
        };
        loop {
            if self.accept(TokenKind::Plus)? {
                value += self.term()?;
            } else if self.accept(TokenKind::Minus)? {
                value -= self.term()?;
            } else {
                return Ok(value);
            }
        }
    }

    /// Level 6: multiplication and division, left-associative, over the
    /// power level
    fn term(&mut self) -> GaugeResult<f64> {
        let mut value = self.power()?;
        loop {
            if self.accept(TokenKind::Times)? {
                value *= self.power()?;
            } else if self.accept(TokenKind::Divide)? {
                value /= self.power()?;
            } else {
                return Ok(value);
            }
        }
    }

    /// Level 7: `^` by repeated left-associative application; each
    /// application re-evaluates the rounding level for the right side
    fn power(&mut self) -> GaugeResult<f64> {
        let mut value = self.rounding()?;
        while self.accept(TokenKind::Power)? {
            value = value.powf(self.rounding()?);
        }
        Ok(value)
    }

    /// Level 8: round-to-multiple operators, left-associative, with the
    /// divisor parsed as a factor
    fn rounding(&mut self) -> GaugeResult<f64> {
        let mut value = self.factor()?;
        loop {
            if self.accept(TokenKind::Round)? {
                value = operations::round_nearest(value, self.factor()?);
            } else if self.accept(TokenKind::RoundDown)? {
                value = operations::round_down(value, self.factor()?);
            } else if self.accept(TokenKind::RoundUp)? {
                value = operations::round_up(value, self.factor()?);
            } else {
                return Ok(value);
            }
        }
    }

    /// Level 9: numeric literals, dimensional lengths (unit stripped),
    /// boolean constants as numbers, and parenthesized statements
    fn factor(&mut self) -> GaugeResult<f64> {
        if self.accept(TokenKind::Number)? {
            return operations::parse_number(&self.prev.text);
        }
        if self.accept(TokenKind::Length)? {
            // Strip the `mm` unit suffix; arithmetic is unit-less.
            let digits = &self.prev.text[..self.prev.text.len() - 2];
            return operations::parse_number(digits);
        }
        if self.accept(TokenKind::BoolConst)? {
            return match self.prev.text.as_str() {
                "N" | "n" => Ok(0.0),
                "Y" | "y" => Ok(1.0),
                other => Err(GaugeError::Syntax(format!(
                    "not a boolean constant: {:?}",
                    other
                ))),
            };
        }
        if self.accept(TokenKind::LeftBracket)? {
            let number = match self.statement()? {
                Some(Value::Number(n)) => n,
                Some(other) => {
                    return Err(GaugeError::Type(format!(
                        "expected a number inside brackets, found {} `{}`",
                        other.type_name(),
                        other
                    )))
                }
                None => {
                    return Err(GaugeError::Type(
                        "expected a number inside brackets, found no value".to_string(),
                    ))
                }
            };
            self.expect(TokenKind::RightBracket)?;
            return Ok(number);
        }
        Err(GaugeError::Syntax(format!(
            "expected a number, found {}",
            self.next
        )))
    }
}
