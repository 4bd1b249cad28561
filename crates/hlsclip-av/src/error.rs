//! Error types for hlsclip-av.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while handing a playlist to an external tool.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required external tool is not available.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// An external tool ran but exited unsuccessfully.
    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    /// The playlist to concatenate does not exist.
    #[error("playlist not found: {}", path.display())]
    PlaylistNotFound { path: PathBuf },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a tool failure from its exit code and captured stderr.
    pub fn tool_failed(tool: impl Into<String>, exit_code: Option<i32>, stderr: &[u8]) -> Self {
        let status = match exit_code {
            Some(code) => format!("status {code}"),
            None => "a signal".to_string(),
        };
        Self::ToolFailed {
            tool: tool.into(),
            status,
            stderr: stderr_tail(stderr),
        }
    }

    /// Create a playlist not found error.
    pub fn playlist_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PlaylistNotFound { path: path.into() }
    }
}

/// Last few non-empty stderr lines; ffmpeg prints its banner first.
fn stderr_tail(stderr: &[u8]) -> String {
    const TAIL_LINES: usize = 5;

    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(TAIL_LINES);
    lines[start..].join("\n")
}
