//! Tokens produced by the scanner
//!
//! A token is an immutable pair of kind and lexeme text, emitted in source
//! order and never mutated afterwards.

use std::fmt;

/// Lexical category of a [`Token`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Scan failure; the lexeme carries the diagnostic message
    Error,
    /// Terminates every token stream
    EndOfInput,

    // Arithmetic operators
    Plus,
    Minus,
    Times,
    Divide,
    Power,

    // Rounding operators: `~` (nearest), `@` (down), `#` (up)
    Round,
    RoundDown,
    RoundUp,

    // Conditionals
    If,
    Then,
    Else,
    ShortIf,
    ShortElse,

    // Comparison operators
    Equal,
    NotEqual,
    LessEqual,
    GreaterEqual,
    Less,
    Greater,

    // Logical operators (`or`/`||`, `and`/`&&`)
    Or,
    And,

    LeftBracket,
    RightBracket,
    ArgSeparator,

    /// Contents of a `"..."` literal, delimiters stripped
    StringLiteral,
    /// Numeric literal
    Number,
    /// Numeric literal with the `mm` unit suffix still attached
    Length,
    /// One of the boolean spellings `Y`, `y`, `N`, `n`
    BoolConst,

    // String slicing and hyperbolic distance functions
    FuncLeft,
    FuncRight,
    FuncHyp,
}

/// An atomic lexical unit: kind plus the literal text it spans
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "end of input"),
            TokenKind::Error => write!(f, "{}", self.text),
            _ => {
                if self.text.chars().count() > 20 {
                    let short: String = self.text.chars().take(20).collect();
                    write!(f, "{:?} {:?}...", self.kind, short)
                } else {
                    write!(f, "{:?} {:?}", self.kind, self.text)
                }
            }
        }
    }
}
