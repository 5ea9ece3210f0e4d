use letterbox_types::LetterId;
use std::fmt;

/// Result type for letterbox-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Letter store could not be read or written
    Store(String),

    /// Configuration error
    Config(String),

    /// Letter does not exist or is not visible to the viewer
    NotFound(LetterId),

    /// Pagination cursor not issued by this source
    InvalidCursor(String),

    /// Malformed identifier or timestamp
    Types(letterbox_types::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Store(msg) => write!(f, "Letter store error: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::NotFound(id) => write!(f, "Letter not found: {}", id),
            Error::InvalidCursor(cursor) => write!(f, "Invalid cursor: {}", cursor),
            Error::Types(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Types(err) => Some(err),
            Error::Store(_)
            | Error::Config(_)
            | Error::NotFound(_)
            | Error::InvalidCursor(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<letterbox_types::Error> for Error {
    fn from(err: letterbox_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Store(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
