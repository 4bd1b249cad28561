//! Errors surfaced by a clip run.

use crate::fetch::FetchError;
use std::path::PathBuf;

/// Error type for [`crate::clip::PlaylistClipper`].
#[derive(Debug, thiserror::Error)]
pub enum ClipError {
    /// Timecode, range, selection or URL problem.
    #[error(transparent)]
    Media(#[from] hlsclip_media::Error),

    /// The manifest could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The clipped playlist could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClipError {
    /// Whether the failure came from the caller's input rather than the
    /// network or the playlist content.
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            ClipError::Media(
                hlsclip_media::Error::InvalidTimecode { .. }
                    | hlsclip_media::Error::InvalidRange { .. }
                    | hlsclip_media::Error::InvalidUrl { .. }
            )
        )
    }
}
