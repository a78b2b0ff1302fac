//! The parser-evaluator
//!
//! Pulls tokens from the scanner one at a time and evaluates the input
//! under an operator-precedence grammar, producing a [`Value`] directly
//! as the rules unwind; no syntax tree is built or retained. Each grammar
//! level is one method that evaluates its own operators and delegates
//! operands to the next-higher level. Any token-expectation mismatch,
//! dynamic type violation, or scanner error aborts the whole evaluation
//! with a single diagnostic.

pub mod operations;

mod expression;

use crate::scanner::{Scanner, Token, TokenKind};
use crate::{GaugeError, GaugeResult, Value};

/// Evaluate a single-line expression.
///
/// Returns `Ok(None)` when the input legally produces no value: a false
/// condition whose `else`/`:` branch is absent. Each call owns its own
/// scanner and cursor, so no state carries over between calls.
pub fn evaluate(input: &str) -> GaugeResult<Option<Value>> {
    let mut evaluator = Evaluator::new(input)?;
    let value = evaluator.statement()?;
    evaluator.expect(TokenKind::EndOfInput)?;
    Ok(value)
}

/// Parser cursor over the token stream: exactly one token of lookahead
/// (`next`) plus the most recently consumed token (`prev`, needed for
/// literal lexemes).
pub struct Evaluator<'a> {
    scanner: Scanner<'a>,
    next: Token,
    prev: Token,
}

impl<'a> Evaluator<'a> {
    fn new(input: &'a str) -> GaugeResult<Self> {
        let mut scanner = Scanner::new(input);
        let next = Self::pull(&mut scanner)?;
        Ok(Self {
            scanner,
            next,
            prev: Token::end_of_input(),
        })
    }

    /// Ask the scanner for one token, surfacing its error token as a
    /// scan diagnostic
    fn pull(scanner: &mut Scanner<'a>) -> GaugeResult<Token> {
        let token = scanner.next_token();
        if token.kind == TokenKind::Error {
            return Err(GaugeError::Scan(token.text));
        }
        Ok(token)
    }

    /// Consume the lookahead if it has the given kind
    fn accept(&mut self, kind: TokenKind) -> GaugeResult<bool> {
        if self.next.kind == kind {
            let next = Self::pull(&mut self.scanner)?;
            self.prev = std::mem::replace(&mut self.next, next);
            return Ok(true);
        }
        Ok(false)
    }

    /// Require and consume a token of the given kind
    fn expect(&mut self, kind: TokenKind) -> GaugeResult<()> {
        if self.accept(kind)? {
            return Ok(());
        }
        Err(GaugeError::Syntax(format!(
            "expected {:?}, found {}",
            kind, self.next
        )))
    }

    /// Grammar level 1: a `hyp(a, b)` call, an `if <condition> then
    /// <statement> [else <statement>]` form, or a bare condition with an
    /// optional `? :` short conditional. Both branches are parsed for
    /// validity but only the taken branch's value is kept; a false
    /// condition with no else branch yields no value.
    fn statement(&mut self) -> GaugeResult<Option<Value>> {
        if self.accept(TokenKind::FuncHyp)? {
            self.expect(TokenKind::LeftBracket)?;
            let a = self.expression()?;
            self.expect(TokenKind::ArgSeparator)?;
            let b = self.expression()?;
            self.expect(TokenKind::RightBracket)?;
            return Ok(Some(Value::Number(a.hypot(b))));
        }
        if self.accept(TokenKind::If)? {
            let condition = self.condition()?;
            self.expect(TokenKind::Then)?;
            let consequent = self.statement()?;
            let alternative = if self.accept(TokenKind::Else)? {
                self.statement()?
            } else {
                None
            };
            return Ok(if condition.as_boolean()? {
                consequent
            } else {
                alternative
            });
        }
        let value = self.condition()?;
        if self.accept(TokenKind::ShortIf)? {
            let consequent = self.statement()?;
            let alternative = if self.accept(TokenKind::ShortElse)? {
                self.statement()?
            } else {
                None
            };
            return Ok(if value.as_boolean()? {
                consequent
            } else {
                alternative
            });
        }
        Ok(Some(value))
    }

    /// Grammar level 2: comparisons joined by `or`/`and`, strictly left
    /// to right with no precedence between the two and no short-circuit.
    /// Both operands must already be boolean.
    fn condition(&mut self) -> GaugeResult<Value> {
        let mut value = self.comparison()?;
        while matches!(self.next.kind, TokenKind::Or | TokenKind::And) {
            if self.accept(TokenKind::Or)? {
                // A stray `if` after the joiner is tolerated: `a or if b`
                self.accept(TokenKind::If)?;
                let rhs = self.comparison()?.as_boolean()?;
                let lhs = value.as_boolean()?;
                value = Value::Boolean(lhs || rhs);
            } else if self.accept(TokenKind::And)? {
                self.accept(TokenKind::If)?;
                let rhs = self.comparison()?.as_boolean()?;
                let lhs = value.as_boolean()?;
                value = Value::Boolean(lhs && rhs);
            }
        }
        Ok(value)
    }

    /// Grammar level 3: when the left operand is string-shaped, only
    /// `=`/`<>` against another string are legal and any other trailing
    /// operator is left unconsumed (a bare string flows through as a
    /// value). Otherwise the left operand is numeric and all six
    /// comparators are legal; absent any, the bare number passes through.
    fn comparison(&mut self) -> GaugeResult<Value> {
        if let Some(s) = self.string_part()? {
            if self.accept(TokenKind::Equal)? {
                let rhs = self.string_only()?;
                return Ok(Value::Boolean(s == rhs));
            }
            if self.accept(TokenKind::NotEqual)? {
                let rhs = self.string_only()?;
                return Ok(Value::Boolean(s != rhs));
            }
            return Ok(Value::Text(s));
        }
        let lhs = self.expression()?;
        let value = if self.accept(TokenKind::LessEqual)? {
            Value::Boolean(lhs <= self.expression()?)
        } else if self.accept(TokenKind::GreaterEqual)? {
            Value::Boolean(lhs >= self.expression()?)
        } else if self.accept(TokenKind::Equal)? {
            Value::Boolean(lhs == self.expression()?)
        } else if self.accept(TokenKind::NotEqual)? {
            Value::Boolean(lhs != self.expression()?)
        } else if self.accept(TokenKind::Less)? {
            Value::Boolean(lhs < self.expression()?)
        } else if self.accept(TokenKind::Greater)? {
            Value::Boolean(lhs > self.expression()?)
        } else {
            Value::Number(lhs)
        };
        Ok(value)
    }

    /// Grammar level 4: `left`/`right` slicing calls and bare string
    /// literals. Returns `None` when the lookahead is not string-shaped,
    /// so level 3 can fall back to a numeric expression.
    fn string_part(&mut self) -> GaugeResult<Option<String>> {
        if self.accept(TokenKind::FuncLeft)? {
            let (s, n) = self.slice_arguments()?;
            return Ok(Some(operations::take_left(&s, n)));
        }
        if self.accept(TokenKind::FuncRight)? {
            let (s, n) = self.slice_arguments()?;
            return Ok(Some(operations::take_right(&s, n)));
        }
        if self.accept(TokenKind::StringLiteral)? {
            return Ok(Some(self.prev.text.clone()));
        }
        Ok(None)
    }

    /// Shared argument parsing for `left(s, n)` / `right(s, n)`
    fn slice_arguments(&mut self) -> GaugeResult<(String, i64)> {
        self.expect(TokenKind::LeftBracket)?;
        self.expect(TokenKind::StringLiteral)?;
        let s = self.prev.text.clone();
        self.expect(TokenKind::ArgSeparator)?;
        self.expect(TokenKind::Number)?;
        let n = operations::parse_count(&self.prev.text)?;
        self.expect(TokenKind::RightBracket)?;
        Ok((s, n))
    }

    /// A string-producing operand is required here
    fn string_only(&mut self) -> GaugeResult<String> {
        match self.string_part()? {
            Some(s) => Ok(s),
            None => Err(GaugeError::Type(format!(
                "expected a string, found {}",
                self.next
            ))),
        }
    }
}
