/// Error types for the wildscan library
use std::fmt;

/// Result type alias for wildscan operations
pub type Result<T> = std::result::Result<T, WildscanError>;

/// Main error type for wildscan operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WildscanError {
    /// Pattern-related errors (empty pattern, symbol outside the alphabet)
    InvalidPattern(String),

    /// Matcher configuration errors
    InvalidConfig(String),

    /// Malformed tokens or out-of-range values in tool input
    InvalidInput(String),

    /// Missing input or a zero-sized problem
    EmptyInput(String),

    /// Internal automaton invariant violated during construction
    MalformedAutomaton(String),

    /// I/O errors
    Io(String),
}

impl fmt::Display for WildscanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WildscanError::InvalidPattern(msg) => write!(f, "Invalid pattern: {}", msg),
            WildscanError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            WildscanError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            WildscanError::EmptyInput(msg) => write!(f, "Empty input: {}", msg),
            WildscanError::MalformedAutomaton(msg) => {
                write!(f, "Malformed automaton (internal error): {}", msg)
            }
            WildscanError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for WildscanError {}

impl From<std::io::Error> for WildscanError {
    fn from(err: std::io::Error) -> Self {
        WildscanError::Io(err.to_string())
    }
}
