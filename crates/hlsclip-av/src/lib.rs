//! # hlsclip-av
//!
//! External tool glue for hlsclip.
//!
//! This crate provides functionality for:
//! - Locating ffmpeg (configured path or `PATH`) and reading its version
//! - Stream-copying a clipped playlist into a single media file
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use hlsclip_av::{Concatenator, FfmpegConcat};
//! use std::path::Path;
//!
//! let ffmpeg = FfmpegConcat::locate(None)?;
//! ffmpeg.concatenate(Path::new("clipped.m3u8"), Path::new("clipped.mp4"))?;
//! # Ok::<(), hlsclip_av::Error>(())
//! ```

pub mod concat;
mod error;
pub mod tools;

// Re-exports
pub use concat::{default_media_path, Concatenator, FfmpegConcat, DEFAULT_PROTOCOL_WHITELIST};
pub use error::{Error, Result};
pub use tools::{check_ffmpeg, get_tool_path, require_tool, ToolInfo};
