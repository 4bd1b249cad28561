//! Playlist data model.

#[cfg(feature = "serialize")]
use serde::Serialize;

/// Version written when the source playlist has none.
pub const DEFAULT_VERSION: u32 = 6;

/// Target duration used when every selected segment has a zero duration
/// and the source playlist carried no target duration either.
pub const FALLBACK_TARGET_DURATION: u64 = 10;

/// Header directives captured before the first `#EXTINF`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct ManifestHeader {
    /// `#EXT-X-VERSION` value.
    pub version: Option<u32>,
    /// `#EXT-X-PLAYLIST-TYPE` line, verbatim.
    pub playlist_type: Option<String>,
    /// `#EXT-X-INDEPENDENT-SEGMENTS` line, verbatim.
    pub independent_segments: Option<String>,
    /// Original `#EXT-X-TARGETDURATION`.
    pub target_duration: Option<u64>,
    /// Original `#EXT-X-MEDIA-SEQUENCE`.
    pub media_sequence: Option<u64>,
    /// `#EXT-X-KEY` lines in playlist order, URIs made absolute.
    pub keys: Vec<String>,
    /// Last `#EXT-X-MAP` line, URI made absolute.
    pub map: Option<String>,
}

impl ManifestHeader {
    /// The version to write out.
    pub fn effective_version(&self) -> u32 {
        self.version.unwrap_or(DEFAULT_VERSION)
    }
}

/// A single media segment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct Segment {
    /// Duration in seconds.
    pub duration: f64,
    /// URI as written in the playlist (relative or absolute).
    pub uri: String,
    /// The `#EXTINF` line this segment came from.
    pub raw_duration_line: String,
    /// Number embedded at the end of the file name, if any.
    pub index: Option<u64>,
}

/// A parsed media playlist.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct Manifest {
    /// Base every relative URI resolves against.
    pub base_url: String,
    /// Header directives.
    pub header: ManifestHeader,
    /// Segments in playlist order.
    pub segments: Vec<Segment>,
    /// Fields that fell back to a default while parsing.
    pub report: ParseReport,
}

impl Manifest {
    /// Sum of all segment durations.
    pub fn total_duration(&self) -> f64 {
        self.segments.iter().map(|s| s.duration).sum()
    }
}

/// What the parser had to paper over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct ParseReport {
    /// Total-duration lines removed before scanning.
    pub stripped_total_duration: usize,
    /// `#EXTINF` durations that did not parse and became 0.0.
    pub defaulted_durations: usize,
    /// Header values (version, target duration, media sequence) that did not parse.
    pub defaulted_header_fields: usize,
    /// Key/map URIs that could not be resolved and were kept verbatim.
    pub unresolved_uris: usize,
    /// A trailing `#EXTINF` had no URI line after it.
    pub truncated: bool,
}

/// A value produced by a parse-or-default operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseOutcome<T> {
    /// The parsed value, or the default.
    pub value: T,
    /// True when `value` is the default.
    pub defaulted: bool,
}

impl<T> ParseOutcome<T> {
    /// A successfully parsed value.
    pub fn parsed(value: T) -> Self {
        Self {
            value,
            defaulted: false,
        }
    }

    /// A fallback value.
    pub fn fallback(value: T) -> Self {
        Self {
            value,
            defaulted: true,
        }
    }
}

/// Segments selected for a window, plus the headers derived from them.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct Selection {
    /// Selected segments, in playlist order.
    pub segments: Vec<Segment>,
    /// `ceil` of the longest selected segment.
    pub target_duration: u64,
    /// Sequence number of the first selected segment.
    pub media_sequence: u64,
    /// Exact sum of selected durations.
    pub total_duration: f64,
}
