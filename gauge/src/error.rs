use std::fmt;

/// Error types for the Gauge evaluator.
///
/// Evaluation has exactly two failure sources: the scanner (malformed
/// numeric literals) and the parser-evaluator (token-expectation or
/// dynamic type violations). All of them are fatal for the whole
/// evaluation; there is no partial result and no recovery.
#[derive(Debug, Clone, PartialEq)]
pub enum GaugeError {
    /// Scanner rejected a lexeme (the only case is bad number syntax)
    Scan(String),

    /// Parser saw a token it could not fit into the grammar
    Syntax(String),

    /// A value had the wrong dynamic type for the rule consuming it
    Type(String),
}

impl fmt::Display for GaugeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GaugeError::Scan(msg) => write!(f, "Scan error: {}", msg),
            GaugeError::Syntax(msg) => write!(f, "Syntax error: {}", msg),
            GaugeError::Type(msg) => write!(f, "Type error: {}", msg),
        }
    }
}

impl std::error::Error for GaugeError {}
