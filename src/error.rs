//! Unified error type for placehold.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or downloading a placeholder image.
///
/// Remote failures during a download are not errors: they are reported as
/// [`crate::generator::DownloadOutcome::Failed`].
#[derive(Debug, Error)]
pub enum ImageError {
    /// The requested format is not one the service can render.
    #[error("Invalid image format \"{format}\". Allowable formats are: {allowed}")]
    InvalidFormat {
        /// The format as given by the caller.
        format: String,
        /// Comma-separated list of accepted formats.
        allowed: String,
    },

    /// The target directory is missing or cannot be written to.
    #[error("Cannot write to directory \"{}\": {reason}", .path.display())]
    Directory {
        /// The resolved directory.
        path: PathBuf,
        /// Why the directory was rejected.
        reason: String,
    },

    /// No HTTP transport was configured, so nothing can be downloaded.
    #[error(
        "Downloading an image requires an HTTP transport, but none is available in this context"
    )]
    TransportUnavailable,

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
