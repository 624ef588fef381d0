use std::fmt;

/// Result type for mhist-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the record codec
#[derive(Debug)]
pub enum Error {
    /// A log line could not be decoded
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(_) => None,
        }
    }
}
