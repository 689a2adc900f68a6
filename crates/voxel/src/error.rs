//! Error types for the voxel crate.

use std::fmt;

use voxel_decode::DecodeError;

/// Result type for voxel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding or building voxel outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Asset decoding failed.
    Decode(DecodeError),
    /// A section cannot be built into an output.
    InvalidSection {
        /// Name of the offending section.
        section: String,
        /// Description of what was invalid.
        detail: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(e) => write!(f, "decode error: {e}"),
            Error::InvalidSection { section, detail } => {
                write!(f, "invalid section {section:?}: {detail}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode(e) => Some(e),
            Error::InvalidSection { .. } => None,
        }
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Error::Decode(e)
    }
}
