use std::fmt;

/// Error types for the checked complex operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComplexError {
    DivisionByZero,
    LogOfZero,
    NonFiniteResult,
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComplexError::DivisionByZero => write!(f, "Division by zero"),
            ComplexError::LogOfZero => write!(f, "Logarithm of zero is undefined"),
            ComplexError::NonFiniteResult => write!(f, "Result is not finite"),
        }
    }
}

impl std::error::Error for ComplexError {}
