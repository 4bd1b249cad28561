//! hlsclip-media: HLS media playlist clipping
//!
//! This crate turns a VOD media playlist and a time window into a new,
//! standalone playlist that references only the overlapping segments.
//!
//! # Modules
//!
//! - `uri` - absolute URL checks and RFC 3986 resolution
//! - `timecode` - `HH:MM:SS[.fff]` conversion
//! - `playlist` - parsing, window selection and serialization (m3u8)
//!
//! # Guarantees
//!
//! - Segments are selected whole, never trimmed
//! - Every segment, key and map URI in the output is absolute
//! - `#EXT-X-TARGETDURATION` is the ceiling of the longest selected segment
//! - `#EXT-X-MEDIA-SEQUENCE` follows the number in the first selected file name
//! - Output re-parses to the same selection, and a stale
//!   `#EXT-X-TOTAL_DURATION` from an earlier clip never accumulates

pub mod error;
pub mod playlist;
pub mod timecode;
pub mod uri;

pub use error::{Error, Result};
pub use playlist::{Manifest, Segment, Selection, TimeWindow};
