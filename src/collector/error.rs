//! Error type shared by all samplers.

use crate::collector::procfs::parser::ParseError;

/// Error type for sampling failures.
///
/// The composer turns any of these into the segment's placeholder text; none
/// of them stops the status loop.
#[derive(Debug)]
pub enum SampleError {
    /// The source is absent: tool not installed, player not running,
    /// no battery, sidecar file not written yet.
    Unavailable(String),
    /// The source answered but in an unexpected shape.
    Parse(String),
    /// I/O error reading the source.
    Io(std::io::Error),
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleError::Unavailable(what) => write!(f, "unavailable: {}", what),
            SampleError::Parse(msg) => write!(f, "parse error: {}", msg),
            SampleError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SampleError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SampleError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            SampleError::Unavailable(e.to_string())
        } else {
            SampleError::Io(e)
        }
    }
}

impl From<ParseError> for SampleError {
    fn from(e: ParseError) -> Self {
        SampleError::Parse(e.message)
    }
}
