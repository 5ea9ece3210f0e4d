use std::fmt;

/// Result type for letterbox-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A timestamp could not be parsed or is outside the representable range
    InvalidTimestamp(String),

    /// Unknown mailbox direction
    InvalidDirection(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTimestamp(msg) => write!(f, "Invalid timestamp: {}", msg),
            Error::InvalidDirection(value) => {
                write!(f, "Invalid direction '{}': expected 'received' or 'sent'", value)
            }
        }
    }
}

impl std::error::Error for Error {}
