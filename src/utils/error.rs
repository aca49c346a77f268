use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for content-index operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for content-index operations
#[derive(Debug)]
pub enum IndexError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Front matter parsing error
    FrontMatter(String),
    /// Unknown or disallowed heading level token
    Level(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::Io(err) => write!(f, "IO error: {}", err),
            IndexError::Config(msg) => write!(f, "Configuration error: {}", msg),
            IndexError::FrontMatter(msg) => write!(f, "Front matter error: {}", msg),
            IndexError::Level(token) => write!(
                f,
                "Invalid heading level '{}' (expected one of h2, h3, h4, h5, h6)",
                token
            ),
            IndexError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for IndexError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            IndexError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for IndexError {
    fn from(err: io::Error) -> Self {
        IndexError::Io(err)
    }
}

impl From<String> for IndexError {
    fn from(msg: String) -> Self {
        IndexError::Generic(msg)
    }
}

impl From<&str> for IndexError {
    fn from(msg: &str) -> Self {
        IndexError::Generic(msg.to_string())
    }
}
