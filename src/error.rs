//! Contains [`Error`]

/// Errors generated by this crate. Every error aborts the decode or encode call
/// that produced it; no partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// When a read or a skip would go past the end of the buffer.
    OutOfBounds(String),
    /// When the stream is known to be out of spec.
    OutOfSpec(String),
    /// Error presented when trying to use a physical type or encoding that is not supported
    FeatureNotSupported(String),
    /// When the parameters passed to a decoder or encoder are invalid
    InvalidParameter(String),
    /// When a stream ends before the requested number of values was decoded
    LengthMismatch {
        /// the number of values requested
        expected: usize,
        /// the number of values decoded before the stream ended
        found: usize,
    },
}

impl Error {
    /// Returns an [`Error::OutOfSpec`].
    pub(crate) fn oos<I: Into<String>>(message: I) -> Self {
        Self::OutOfSpec(message.into())
    }

    /// Returns an [`Error::OutOfBounds`] for an access of `needed` bytes at `offset`.
    pub(crate) fn oob(offset: usize, needed: usize, length: usize) -> Self {
        Self::OutOfBounds(format!(
            "cannot read {} byte(s) at offset {}: buffer has {} bytes",
            needed, offset, length
        ))
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::OutOfBounds(message) => {
                write!(fmt, "out of bounds: {}", message)
            }
            Error::OutOfSpec(message) => {
                write!(fmt, "File out of specification: {}", message)
            }
            Error::FeatureNotSupported(message) => {
                write!(fmt, "Not yet supported: {}", message)
            }
            Error::InvalidParameter(message) => {
                write!(fmt, "Invalid parameter: {}", message)
            }
            Error::LengthMismatch { expected, found } => {
                write!(
                    fmt,
                    "invalid RLE encoding: expected {} values but the stream ended after {}",
                    expected, found
                )
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::OutOfSpec(format!("underlying IO error: {}", e))
    }
}

impl From<std::num::TryFromIntError> for Error {
    fn from(e: std::num::TryFromIntError) -> Error {
        Error::OutOfSpec(format!("Number must be zero or positive: {}", e))
    }
}

/// A specialized `Result` for Parquet errors.
pub type Result<T> = std::result::Result<T, Error>;
