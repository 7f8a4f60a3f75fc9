//! Error types for Lattice Split core systems.

use std::fmt;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, SignalError>;

/// Signal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    InvalidConnection,
    /// The signal has been dropped and is no longer available.
    SignalDropped,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnection => write!(f, "Invalid or disconnected connection ID"),
            Self::SignalDropped => write!(f, "Signal has been dropped"),
        }
    }
}

impl std::error::Error for SignalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_error_display() {
        assert_eq!(
            SignalError::InvalidConnection.to_string(),
            "Invalid or disconnected connection ID"
        );
        assert_eq!(SignalError::SignalDropped.to_string(), "Signal has been dropped");
    }
}
