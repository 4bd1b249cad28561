//! hlsclip - cut a time window out of a remote HLS playlist
//!
//! This library crate exposes the clip pipeline for integration testing.

pub mod clip;
pub mod config;
pub mod error;
pub mod fetch;

pub use clip::{ClipRequest, ClipSummary, PlaylistClipper};
pub use error::ClipError;
pub use fetch::{FetchError, HttpSource, ManifestSource};
