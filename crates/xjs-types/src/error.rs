use std::fmt;

/// Result type for xjs-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while interpreting raw values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A `since` or controller timestamp matched none of the accepted layouts
    Timestamp { value: String, reason: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Timestamp { value, reason } => {
                write!(f, "Invalid timestamp '{}': {}", value, reason)
            }
        }
    }
}

impl std::error::Error for Error {}
