//! Error types for hlsclip-media.

use thiserror::Error;

/// Result type for hlsclip-media operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for hlsclip-media operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A timecode did not have the `HH:MM:SS[.fff]` shape.
    #[error("Invalid timecode {input:?}: {reason}")]
    InvalidTimecode { input: String, reason: String },

    /// The requested window does not end after it starts.
    #[error("Invalid range: end ({end:.3}s) must be greater than start ({start:.3}s)")]
    InvalidRange { start: f64, end: f64 },

    /// No segment intersects the requested window.
    #[error("No segments fall within {start:.3}s..{end:.3}s")]
    EmptySelection { start: f64, end: f64 },

    /// A URL could not be parsed or joined.
    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl Error {
    /// Create an invalid timecode error.
    pub fn invalid_timecode(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTimecode {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid URL error.
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            source,
        }
    }
}
