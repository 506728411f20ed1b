use std::path::PathBuf;

use enough::StopReason;

/// Errors from BMP decoding, encoding, and pixel transforms.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("buffer size mismatch: need {needed} pixels, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot open '{}' for reading", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}

/// Coarse classification of a [`BitmapError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The source file could not be opened for reading.
    FileNotFound,
    /// The input is not a well-formed uncompressed 24-bit BMP.
    Format,
    /// Writing the destination (or another I/O step) failed.
    Io,
    /// A transform parameter or buffer shape was rejected.
    InvalidArgument,
    /// A configured [`crate::Limits`] bound was exceeded.
    LimitExceeded,
    /// The stop token requested cancellation.
    Cancelled,
}

impl BitmapError {
    /// Which of the error kinds this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnrecognizedFormat
            | Self::InvalidHeader(_)
            | Self::UnsupportedVariant(_)
            | Self::UnexpectedEof
            | Self::DimensionsTooLarge { .. } => ErrorKind::Format,
            Self::LimitExceeded(_) => ErrorKind::LimitExceeded,
            Self::BufferTooSmall { .. } | Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            Self::Io(_) => ErrorKind::Io,
            Self::Cancelled(_) => ErrorKind::Cancelled,
        }
    }
}
