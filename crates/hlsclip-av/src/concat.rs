//! Stream-copy concatenation of a clipped playlist.
//!
//! ffmpeg reads the playlist, fetches each absolute segment URI in order and
//! copies the streams into one output file without re-encoding.

use crate::tools::{get_tool_path, FFMPEG};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Protocols ffmpeg may use while reading a playlist of remote segments.
pub const DEFAULT_PROTOCOL_WHITELIST: &str = "file,http,https,tcp,tls";

/// Extension of the media file written when none is given.
pub const DEFAULT_MEDIA_EXTENSION: &str = "mp4";

/// Turns a local playlist into a single media file.
pub trait Concatenator {
    /// Concatenate every segment of `playlist` into `output`.
    fn concatenate(&self, playlist: &Path, output: &Path) -> Result<()>;
}

/// [`Concatenator`] backed by the ffmpeg CLI.
#[derive(Debug, Clone)]
pub struct FfmpegConcat {
    program: PathBuf,
    protocol_whitelist: String,
}

impl FfmpegConcat {
    /// Use `program` as the ffmpeg executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            protocol_whitelist: DEFAULT_PROTOCOL_WHITELIST.to_string(),
        }
    }

    /// Find ffmpeg, preferring a configured path over `PATH`.
    pub fn locate(configured: Option<&Path>) -> Result<Self> {
        Ok(Self::new(get_tool_path(FFMPEG, configured)?))
    }

    /// Replace the protocol whitelist passed to ffmpeg.
    pub fn with_protocol_whitelist(mut self, whitelist: impl Into<String>) -> Self {
        self.protocol_whitelist = whitelist.into();
        self
    }

    /// The ffmpeg executable in use.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Build the ffmpeg invocation for `playlist` -> `output`.
    pub fn command(&self, playlist: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-y")
            .arg("-protocol_whitelist")
            .arg(&self.protocol_whitelist)
            .args(["-allowed_extensions", "ALL"])
            .arg("-i")
            .arg(playlist)
            .args(["-c", "copy"])
            .arg(output);
        cmd
    }
}

impl Concatenator for FfmpegConcat {
    fn concatenate(&self, playlist: &Path, output: &Path) -> Result<()> {
        if !playlist.exists() {
            return Err(Error::playlist_not_found(playlist));
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Concatenating {:?} into {:?}", playlist, output);

        let result = self.command(playlist, output).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found(self.program.to_string_lossy())
            } else {
                Error::Io(e)
            }
        })?;

        if !result.status.success() {
            return Err(Error::tool_failed(
                FFMPEG,
                result.status.code(),
                &result.stderr,
            ));
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Concatenation complete: {:?}", output);

        Ok(())
    }
}

/// Media file name for a playlist: its file stem plus `.mp4`, in the
/// current directory.
pub fn default_media_path(playlist: &Path) -> PathBuf {
    let stem = playlist
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "clipped".to_string());
    PathBuf::from(format!("{stem}.{DEFAULT_MEDIA_EXTENSION}"))
}
