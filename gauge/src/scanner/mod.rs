//! The lexical scanner
//!
//! Consumes the raw input string once, left to right, and produces tokens
//! on demand. The scanner is a state machine: an enumerated [`State`]
//! names the lexical category being recognized, and a dispatch step runs
//! one state and returns the next. Each recognized unit is emitted as
//! exactly one token spanning from the last emission boundary to the
//! current scan position; insignificant whitespace is dropped by moving
//! the boundary without emitting.
//!
//! Delivery is pull-based: [`Scanner::next_token`] advances the machine
//! just far enough to produce one token, then suspends until asked again.
//! Scanning stops at end of line, after which the end-of-input marker is
//! returned indefinitely. The only scan-time error is a malformed numeric
//! literal, which yields a single error token and halts the machine.

mod token;

pub use token::{Token, TokenKind};

use std::collections::VecDeque;

const DIGITS: &str = "0123456789";

/// Fixed-spelling tokens, checked in this order before single-character
/// dispatch. Order encodes longest-prefix priority: `<>` and `<=` before
/// `<`, `hypot` before `hyp`. Word spellings match case-insensitively.
const SPELLED: &[(&str, TokenKind)] = &[
    // Conditionals
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
    // Comparators
    ("=", TokenKind::Equal),
    ("<>", TokenKind::NotEqual),
    ("<=", TokenKind::LessEqual),
    (">=", TokenKind::GreaterEqual),
    ("<", TokenKind::Less),
    (">", TokenKind::Greater),
    // Logic
    ("or", TokenKind::Or),
    ("and", TokenKind::And),
    ("||", TokenKind::Or),
    ("&&", TokenKind::And),
    // Functions
    ("right", TokenKind::FuncRight),
    ("left", TokenKind::FuncLeft),
    ("hypot", TokenKind::FuncHyp),
    ("hyp", TokenKind::FuncHyp),
];

/// One lexical category being recognized; every state transitions back to
/// the common `Expression` dispatch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Common dispatch state
    Expression,
    /// Inside a string literal, opening quote already discarded
    Quote,
    /// Numeric literal body
    Number,
    /// Emit a fixed-spelling token after advancing `advance` bytes
    Symbol { kind: TokenKind, advance: usize },
}

/// Converts raw text into a token sequence.
///
/// The cursor tracks the emission start offset, the current scan offset,
/// and the width of the last decoded character (for a one-character step
/// back during lookahead). Invariant: `start <= pos <= input.len()`.
pub struct Scanner<'a> {
    input: &'a str,
    start: usize,
    pos: usize,
    width: usize,
    state: Option<State>,
    pending: VecDeque<Token>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            width: 0,
            state: Some(State::Expression),
            pending: VecDeque::new(),
        }
    }

    /// Pull the next token, advancing the state machine only far enough
    /// to produce it. Once the machine has halted, every further call
    /// returns the end-of-input marker again.
    pub fn next_token(&mut self) -> Token {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return token;
            }
            match self.state {
                Some(state) => self.state = self.step(state),
                None => return Token::end_of_input(),
            }
        }
    }

    /// Run one state and return the next, or `None` once the machine
    /// halts (after the end-of-input marker or an error token).
    fn step(&mut self, state: State) -> Option<State> {
        match state {
            State::Expression => self.scan_expression(),
            State::Quote => self.scan_quote(),
            State::Number => self.scan_number(),
            State::Symbol { kind, advance } => {
                self.pos += advance;
                self.emit(kind);
                Some(State::Expression)
            }
        }
    }

    fn scan_expression(&mut self) -> Option<State> {
        loop {
            if let Some((kind, advance)) = self.match_spelled() {
                if self.pos > self.start {
                    self.ignore();
                }
                return Some(State::Symbol { kind, advance });
            }
            match self.next_char() {
                None | Some('\n') => break,
                Some(' ') | Some('\t') => self.ignore(),
                Some('"') => {
                    self.ignore();
                    return Some(State::Quote);
                }
                Some('(') => return self.symbol(TokenKind::LeftBracket),
                Some(')') => return self.symbol(TokenKind::RightBracket),
                Some('?') => return self.symbol(TokenKind::ShortIf),
                Some(':') => return self.symbol(TokenKind::ShortElse),
                Some('~') => return self.symbol(TokenKind::Round),
                Some('@') => return self.symbol(TokenKind::RoundDown),
                Some('#') => return self.symbol(TokenKind::RoundUp),
                Some('+') => return self.symbol(TokenKind::Plus),
                Some('-') => return self.symbol(TokenKind::Minus),
                Some('*') => return self.symbol(TokenKind::Times),
                Some('/') => return self.symbol(TokenKind::Divide),
                Some('^') => return self.symbol(TokenKind::Power),
                Some(',') => return self.symbol(TokenKind::ArgSeparator),
                Some(c) if c.is_ascii_digit() => {
                    self.step_back();
                    return Some(State::Number);
                }
                Some('Y') | Some('y') | Some('N') | Some('n') => {
                    return self.symbol(TokenKind::BoolConst)
                }
                // Anything else is insignificant and dropped with the
                // surrounding span.
                Some(_) => {}
            }
        }
        if self.pos > self.start {
            self.ignore();
        }
        self.emit(TokenKind::EndOfInput);
        None
    }

    /// String literal mode: everything up to the next `"` is the token.
    /// An unterminated literal at end of line closes silently without
    /// emitting anything.
    fn scan_quote(&mut self) -> Option<State> {
        loop {
            if self.rest().starts_with('"') {
                self.emit(TokenKind::StringLiteral);
                self.pos += 1;
                self.ignore();
                return Some(State::Expression);
            }
            match self.next_char() {
                None | Some('\n') => break,
                Some(_) => {}
            }
        }
        Some(State::Expression)
    }

    fn scan_number(&mut self) -> Option<State> {
        // Optional leading sign.
        self.accept("+-");
        self.accept_run(DIGITS);
        if self.accept(".") {
            self.accept_run(DIGITS);
        }
        // Exponent suffix: consumed only when at least one digit follows,
        // and at most two digits are taken.
        let mark = self.pos;
        if self.accept("eE") {
            self.accept("+-");
            if self.accept(DIGITS) {
                self.accept(DIGITS);
            } else {
                self.pos = mark;
            }
        }
        // A trailing `mm` reclassifies the literal as a dimensional
        // length; the suffix stays in the lexeme and is stripped by the
        // consumer.
        if self.accept_literal("mm") {
            self.emit(TokenKind::Length);
            return Some(State::Expression);
        }
        // The next character must not belong to the digit class.
        if self.peek().map_or(false, is_numeric) {
            self.next_char();
            return self.error(format!(
                "bad number syntax: {:?}",
                &self.input[self.start..self.pos]
            ));
        }
        self.emit(TokenKind::Number);
        Some(State::Expression)
    }

    /// Emit an error token and halt the machine
    fn error(&mut self, message: String) -> Option<State> {
        self.pending.push_back(Token::new(TokenKind::Error, message));
        None
    }

    fn symbol(&self, kind: TokenKind) -> Option<State> {
        Some(State::Symbol { kind, advance: 0 })
    }

    fn emit(&mut self, kind: TokenKind) {
        self.pending
            .push_back(Token::new(kind, &self.input[self.start..self.pos]));
        self.start = self.pos;
    }

    /// Drop the pending span without emitting
    fn ignore(&mut self) {
        self.start = self.pos;
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    /// Decode and consume one character; `None` at end of input
    fn next_char(&mut self) -> Option<char> {
        match self.rest().chars().next() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    /// Undo the last `next_char`; a no-op at end of input
    fn step_back(&mut self) {
        self.pos -= self.width;
    }

    fn peek(&mut self) -> Option<char> {
        let c = self.next_char();
        self.step_back();
        c
    }

    /// Consume one character if it is in `valid`
    fn accept(&mut self, valid: &str) -> bool {
        if let Some(c) = self.next_char() {
            if valid.contains(c) {
                return true;
            }
        }
        self.step_back();
        false
    }

    fn accept_run(&mut self, valid: &str) {
        while self.accept(valid) {}
    }

    fn accept_literal(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            return true;
        }
        false
    }

    /// Longest applicable fixed-spelling token at the scan position
    fn match_spelled(&self) -> Option<(TokenKind, usize)> {
        let rest = self.rest();
        for (spelling, kind) in SPELLED {
            let matched = rest
                .get(..spelling.len())
                .map_or(false, |prefix| prefix.eq_ignore_ascii_case(spelling));
            if matched {
                return Some((*kind, spelling.len()));
            }
        }
        None
    }
}

fn is_numeric(c: char) -> bool {
    c == '_' || c.is_ascii_digit()
}
