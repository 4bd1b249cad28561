//! Time-window segment selection.

use super::types::{Manifest, Segment, Selection, FALLBACK_TARGET_DURATION};
use crate::{timecode, Error, Result};

#[cfg(feature = "serialize")]
use serde::Serialize;

/// A half-open `[start, end)` window in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct TimeWindow {
    start: f64,
    end: f64,
}

impl TimeWindow {
    /// Create a window, rejecting `end <= start`.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn new(start: f64, end: f64) -> Result<Self> {
        // Written so that NaN on either side is rejected too.
        if !(end > start) {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create a window from two `HH:MM:SS[.fff]` timecodes.
    pub fn from_timecodes(start: &str, end: &str) -> Result<Self> {
        Self::new(timecode::parse(start)?, timecode::parse(end)?)
    }

    /// Window start in seconds.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Window end in seconds.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Whether `[seg_start, seg_start + duration)` intersects this window.
    pub fn overlaps(&self, seg_start: f64, duration: f64) -> bool {
        seg_start < self.end && seg_start + duration > self.start
    }
}

/// Select the segments that intersect `window`.
///
/// Segments are taken whole; one that straddles either edge of the window
/// is included untrimmed. The scan stops at the first segment starting at or
/// after the window end, so segments are expected in playlist order.
pub fn select(manifest: &Manifest, window: TimeWindow) -> Result<Selection> {
    let mut selected: Vec<Segment> = Vec::new();
    let mut cursor = 0.0;

    for segment in &manifest.segments {
        if cursor >= window.end {
            break;
        }
        if window.overlaps(cursor, segment.duration) {
            selected.push(segment.clone());
        }
        cursor += segment.duration;
    }

    let Some(first) = selected.first() else {
        return Err(Error::EmptySelection {
            start: window.start,
            end: window.end,
        });
    };

    let media_sequence = first
        .index
        .or(manifest.header.media_sequence)
        .unwrap_or(0);

    let max_duration = selected.iter().map(|s| s.duration).fold(0.0, f64::max);
    let target_duration = if max_duration > 0.0 {
        max_duration.ceil() as u64
    } else {
        manifest
            .header
            .target_duration
            .unwrap_or(FALLBACK_TARGET_DURATION)
    };

    let total_duration: f64 = selected.iter().map(|s| s.duration).sum();

    tracing::debug!(
        "Selected {} of {} segments for {:.3}s..{:.3}s (sequence {}, target {}s)",
        selected.len(),
        manifest.segments.len(),
        window.start,
        window.end,
        media_sequence,
        target_duration
    );

    Ok(Selection {
        segments: selected,
        target_duration,
        media_sequence,
        total_duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::types::ManifestHeader;

    fn segment(duration: f64, uri: &str) -> Segment {
        Segment {
            duration,
            uri: uri.to_string(),
            raw_duration_line: format!("#EXTINF:{duration},"),
            index: crate::playlist::parser::parse_index(uri),
        }
    }

    fn manifest(segments: Vec<Segment>) -> Manifest {
        Manifest {
            base_url: "https://cdn.example.com/".to_string(),
            header: ManifestHeader::default(),
            segments,
            report: Default::default(),
        }
    }

    fn six_second_segments(count: usize) -> Manifest {
        manifest(
            (0..count)
                .map(|i| segment(6.0, &format!("seg-{i:05}.ts")))
                .collect(),
        )
    }

    fn uris(selection: &Selection) -> Vec<&str> {
        selection.segments.iter().map(|s| s.uri.as_str()).collect()
    }

    #[test]
    fn test_window_rejects_empty_and_inverted_ranges() {
        assert!(matches!(
            TimeWindow::new(10.0, 10.0),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            TimeWindow::new(10.0, 5.0),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            TimeWindow::new(0.0, f64::NAN),
            Err(Error::InvalidRange { .. })
        ));
        assert!(TimeWindow::new(0.0, 0.001).is_ok());
    }

    #[test]
    fn test_window_from_timecodes() {
        let window = TimeWindow::from_timecodes("00:00:10", "00:01:00.5").unwrap();
        assert_eq!(window.start(), 10.0);
        assert_eq!(window.end(), 60.5);

        assert!(matches!(
            TimeWindow::from_timecodes("00:01:00", "00:00:30"),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            TimeWindow::from_timecodes("1:00", "00:00:30"),
            Err(Error::InvalidTimecode { .. })
        ));
    }

    #[test]
    fn test_select_everything_when_window_exceeds_playlist() {
        let manifest = six_second_segments(5);
        let selection = select(&manifest, TimeWindow::new(0.0, 3600.0).unwrap()).unwrap();

        assert_eq!(selection.segments.len(), 5);
        assert_eq!(selection.total_duration, 30.0);
        assert_eq!(selection.media_sequence, 0);
    }

    #[test]
    fn test_select_window_inside_one_segment() {
        let manifest = six_second_segments(5);
        let selection = select(&manifest, TimeWindow::new(13.0, 14.0).unwrap()).unwrap();

        assert_eq!(uris(&selection), vec!["seg-00002.ts"]);
        assert_eq!(selection.total_duration, 6.0);
        assert_eq!(selection.media_sequence, 2);
        assert_eq!(selection.target_duration, 6);
    }

    #[test]
    fn test_select_boundaries_are_half_open() {
        let manifest = six_second_segments(5);

        // [6, 12) touches seg 0 and seg 2 only at their edges.
        let selection = select(&manifest, TimeWindow::new(6.0, 12.0).unwrap()).unwrap();
        assert_eq!(uris(&selection), vec!["seg-00001.ts"]);

        let selection = select(&manifest, TimeWindow::new(5.9, 12.1).unwrap()).unwrap();
        assert_eq!(
            uris(&selection),
            vec!["seg-00000.ts", "seg-00001.ts", "seg-00002.ts"]
        );
    }

    #[test]
    fn test_select_past_end_is_empty() {
        let manifest = six_second_segments(3);
        let err = select(&manifest, TimeWindow::new(18.0, 30.0).unwrap()).unwrap_err();
        assert!(matches!(err, Error::EmptySelection { .. }));
    }

    #[test]
    fn test_select_gap_is_empty() {
        // A zero-length segment leaves nothing covering [6, 6.5).
        let manifest = manifest(vec![
            segment(6.0, "a0.ts"),
            segment(0.0, "a1.ts"),
        ]);
        let err = select(&manifest, TimeWindow::new(6.0, 6.5).unwrap()).unwrap_err();
        assert!(matches!(err, Error::EmptySelection { .. }));
    }

    #[test]
    fn test_target_duration_is_ceiling_of_max() {
        let manifest = manifest(vec![
            segment(4.004, "a0.ts"),
            segment(6.006, "a1.ts"),
            segment(2.0, "a2.ts"),
        ]);
        let selection = select(&manifest, TimeWindow::new(0.0, 100.0).unwrap()).unwrap();

        assert_eq!(selection.target_duration, 7);
        for s in &selection.segments {
            assert!(selection.target_duration as f64 >= s.duration);
        }
    }

    #[test]
    fn test_target_duration_fallbacks_for_zero_durations() {
        let mut zeros = manifest(vec![segment(0.0, "a0.ts"), segment(0.0, "a1.ts")]);

        // A zero-length segment at 0 still intersects [-1, 1).
        let window = TimeWindow::new(-1.0, 1.0).unwrap();
        let selection = select(&zeros, window).unwrap();
        assert_eq!(selection.target_duration, FALLBACK_TARGET_DURATION);

        zeros.header.target_duration = Some(4);
        let selection = select(&zeros, window).unwrap();
        assert_eq!(selection.target_duration, 4);
    }

    #[test]
    fn test_media_sequence_fallbacks() {
        let mut unnumbered = manifest(vec![segment(6.0, "intro.ts"), segment(6.0, "main.ts")]);
        let window = TimeWindow::new(7.0, 8.0).unwrap();

        assert_eq!(select(&unnumbered, window).unwrap().media_sequence, 0);

        unnumbered.header.media_sequence = Some(31);
        assert_eq!(select(&unnumbered, window).unwrap().media_sequence, 31);
    }

    #[test]
    fn test_media_sequence_from_first_selected_index() {
        let manifest = manifest(vec![
            segment(6.0, "https://cdn.example.com/a/seg-00041.m4s?cv=v1"),
            segment(6.0, "https://cdn.example.com/a/seg-00042.m4s?cv=v1"),
        ]);
        let selection = select(&manifest, TimeWindow::new(6.5, 8.0).unwrap()).unwrap();
        assert_eq!(selection.media_sequence, 42);
    }

    #[test]
    fn test_total_duration_is_exact_sum() {
        let manifest = manifest(vec![
            segment(0.1, "a0.ts"),
            segment(0.2, "a1.ts"),
            segment(0.3, "a2.ts"),
        ]);
        let selection = select(&manifest, TimeWindow::new(0.0, 10.0).unwrap()).unwrap();
        assert_eq!(selection.total_duration, 0.1 + 0.2 + 0.3);
    }
}
