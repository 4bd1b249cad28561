//! HLS media playlist clipping.
//!
//! A playlist goes through three steps:
//!
//! 1. [`parse`] reads the header directives and the segment list
//! 2. [`select`] picks the segments overlapping a [`TimeWindow`] and derives
//!    the new target duration and media sequence
//! 3. [`render`] writes the selection back out with absolute URIs

mod parser;
mod selector;
mod serializer;
mod types;

pub use parser::{
    absolutize_uri_attribute, is_total_duration, parse, parse_duration, parse_index, parse_number,
};
pub use selector::{select, TimeWindow};
pub use serializer::render;
pub use types::{
    Manifest, ManifestHeader, ParseOutcome, ParseReport, Segment, Selection, DEFAULT_VERSION,
    FALLBACK_TARGET_DURATION,
};

/// Playlist tag names.
pub mod tags {
    pub const EXTM3U: &str = "#EXTM3U";
    pub const EXTINF: &str = "#EXTINF";
    pub const VERSION: &str = "#EXT-X-VERSION";
    pub const PLAYLIST_TYPE: &str = "#EXT-X-PLAYLIST-TYPE";
    pub const INDEPENDENT_SEGMENTS: &str = "#EXT-X-INDEPENDENT-SEGMENTS";
    pub const TARGET_DURATION: &str = "#EXT-X-TARGETDURATION";
    pub const MEDIA_SEQUENCE: &str = "#EXT-X-MEDIA-SEQUENCE";
    pub const KEY: &str = "#EXT-X-KEY";
    pub const MAP: &str = "#EXT-X-MAP";
    pub const ENDLIST: &str = "#EXT-X-ENDLIST";
    /// Written after `#EXT-X-ENDLIST`; not part of RFC 8216.
    pub const TOTAL_DURATION: &str = "#EXT-X-TOTAL_DURATION";
}

/// Parse `text`, select `window` and render the result.
///
/// # Example
///
/// ```
/// use hlsclip_media::playlist::{clip, TimeWindow};
///
/// let text = "#EXTM3U\n#EXTINF:6.0,\nseg-1.ts\n#EXTINF:6.0,\nseg-2.ts\n";
/// let window = TimeWindow::from_timecodes("00:00:07", "00:00:08")?;
/// let (out, selection) = clip(text, "https://cdn.example.com/vod/", window)?;
///
/// assert_eq!(selection.media_sequence, 2);
/// assert!(out.contains("https://cdn.example.com/vod/seg-2.ts"));
/// # Ok::<(), hlsclip_media::Error>(())
/// ```
pub fn clip(text: &str, base_url: &str, window: TimeWindow) -> crate::Result<(String, Selection)> {
    let manifest = parse(text, base_url);
    let selection = select(&manifest, window)?;
    let rendered = render(&manifest, &selection)?;
    Ok((rendered, selection))
}
