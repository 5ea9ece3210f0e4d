use std::fmt;

/// Result type for letterbox-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while projecting letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested letter is absent (missing, or hidden from the viewer)
    NotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "Letter not found"),
        }
    }
}

impl std::error::Error for Error {}
