use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for mdtoc operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for mdtoc operations
#[derive(Debug)]
pub enum TocError {
    /// IO error wrapper
    Io(io::Error),
    /// A line classified as a hash heading contained no `#` on re-scan.
    /// Signals a contradiction between the line pattern and the hash
    /// counting step, not bad input.
    MalformedHeading(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for TocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocError::Io(err) => write!(f, "IO error: {}", err),
            TocError::MalformedHeading(line) => {
                write!(f, "Heading line does not match \" *#+\": {:?}", line)
            }
            TocError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for TocError {}

impl From<io::Error> for TocError {
    fn from(err: io::Error) -> Self {
        TocError::Io(err)
    }
}

impl From<String> for TocError {
    fn from(msg: String) -> Self {
        TocError::Generic(msg)
    }
}

impl From<&str> for TocError {
    fn from(msg: &str) -> Self {
        TocError::Generic(msg.to_string())
    }
}
