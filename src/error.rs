use std::path::PathBuf;

use thiserror::Error;

/// Main error type for media probing
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The file could not be opened or its container could not be parsed.
    /// Fatal to the whole probe; callers should treat the file as unusable.
    #[error("Failed to probe {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: FfmpegError,
    },

    /// No stream with the requested id exists in the inventory
    #[error("Stream not found: index {0}")]
    StreamNotFound(usize),

    /// A standard I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or applied
    #[error("Configuration error: {0}")]
    Config(String),
}

/// FFmpeg-specific errors
#[derive(Error, Debug)]
pub enum FfmpegError {
    /// Failure during global FFmpeg initialization
    #[error("FFmpeg initialization failed: {0}")]
    InitFailed(String),

    /// Failure opening an input media file or discovering its streams
    #[error("Failed to open input file: {0}")]
    OpenInput(String),
}

impl ProbeError {
    /// Build an [`ProbeError::Open`] for `path`
    pub fn open(path: impl Into<PathBuf>, source: FfmpegError) -> Self {
        ProbeError::Open {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is a lookup miss rather than a probe failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProbeError::StreamNotFound(_))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ProbeError>;
