//! Fetch, clip and write a playlist.

use crate::error::ClipError;
use crate::fetch::ManifestSource;
use hlsclip_media::playlist::{self, TimeWindow};
use hlsclip_media::{timecode, uri};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One clip invocation.
#[derive(Debug, Clone)]
pub struct ClipRequest {
    /// Absolute http(s) URL of the media playlist.
    pub manifest_url: String,
    /// Window to keep.
    pub window: TimeWindow,
    /// Where the clipped playlist is written.
    pub output: PathBuf,
}

impl ClipRequest {
    /// Build a request from user-supplied timecodes.
    ///
    /// Timecodes, range and URL are all checked here, before anything
    /// touches the network.
    pub fn from_timecodes(
        manifest_url: &str,
        start: &str,
        end: &str,
        output: impl Into<PathBuf>,
    ) -> Result<Self, ClipError> {
        let window = TimeWindow::from_timecodes(start, end)?;
        uri::validate_manifest_url(manifest_url)?;

        Ok(Self {
            manifest_url: manifest_url.to_string(),
            window,
            output: output.into(),
        })
    }
}

/// What a successful clip produced.
#[derive(Debug, Clone, Serialize)]
pub struct ClipSummary {
    pub output: PathBuf,
    pub base_url: String,
    pub segments: usize,
    pub duration_secs: f64,
    pub target_duration: u64,
    pub media_sequence: u64,
    pub window: TimeWindow,
}

impl ClipSummary {
    /// Selected duration as `HH:MM:SS.fff`.
    pub fn duration_timecode(&self) -> String {
        timecode::format(self.duration_secs)
    }
}

/// Runs fetch -> parse -> select -> serialize -> write.
pub struct PlaylistClipper<S> {
    source: S,
}

impl<S: ManifestSource> PlaylistClipper<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Clip `request.manifest_url` to `request.window`.
    ///
    /// The output file is only created once a non-empty selection has been
    /// rendered; any earlier failure leaves the filesystem untouched.
    pub async fn clip(&self, request: &ClipRequest) -> Result<ClipSummary, ClipError> {
        uri::validate_manifest_url(&request.manifest_url)?;
        let base_url = uri::base_of(&request.manifest_url);

        let text = self.source.fetch_text(&request.manifest_url).await?;
        let (rendered, selection) = playlist::clip(&text, &base_url, request.window)?;

        write_playlist(&request.output, &rendered)?;

        tracing::info!(
            "Wrote {} segments ({:.3}s) to {:?}",
            selection.segments.len(),
            selection.total_duration,
            request.output
        );

        Ok(ClipSummary {
            output: request.output.clone(),
            base_url,
            segments: selection.segments.len(),
            duration_secs: selection.total_duration,
            target_duration: selection.target_duration,
            media_sequence: selection.media_sequence,
            window: request.window,
        })
    }
}

fn write_playlist(path: &Path, contents: &str) -> Result<(), ClipError> {
    std::fs::write(path, contents).map_err(|source| ClipError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use tempfile::tempdir;

    struct StaticSource(&'static str);

    #[async_trait::async_trait]
    impl ManifestSource for StaticSource {
        async fn fetch_text(&self, _url: &str) -> Result<String, FetchError> {
            Ok(self.0.to_string())
        }
    }

    const PLAYLIST: &str = "#EXTM3U
#EXT-X-TARGETDURATION:6
#EXTINF:6.0,
seg-10.ts
#EXTINF:6.0,
seg-11.ts
#EXTINF:6.0,
seg-12.ts
";

    #[test]
    fn test_request_rejects_bad_input_up_front() {
        let err = ClipRequest::from_timecodes("https://a/b.m3u8", "00:00:10", "00:00:10", "x")
            .unwrap_err();
        assert!(matches!(
            err,
            ClipError::Media(hlsclip_media::Error::InvalidRange { .. })
        ));
        assert!(err.is_bad_input());

        let err = ClipRequest::from_timecodes("https://a/b.m3u8", "10", "00:00:20", "x")
            .unwrap_err();
        assert!(matches!(
            err,
            ClipError::Media(hlsclip_media::Error::InvalidTimecode { .. })
        ));

        let err =
            ClipRequest::from_timecodes("b.m3u8", "00:00:00", "00:00:20", "x").unwrap_err();
        assert!(matches!(
            err,
            ClipError::Media(hlsclip_media::Error::InvalidUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_clip_writes_playlist() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("clip.m3u8");
        let request = ClipRequest::from_timecodes(
            "https://cdn.example.com/vod/index.m3u8",
            "00:00:07",
            "00:00:13",
            &output,
        )
        .unwrap();

        let summary = PlaylistClipper::new(StaticSource(PLAYLIST))
            .clip(&request)
            .await
            .unwrap();

        assert_eq!(summary.segments, 2);
        assert_eq!(summary.media_sequence, 11);
        assert_eq!(summary.duration_secs, 12.0);
        assert_eq!(summary.base_url, "https://cdn.example.com/vod/");
        assert_eq!(summary.duration_timecode(), "00:00:12.000");

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("\nhttps://cdn.example.com/vod/seg-11.ts\n"));
        assert!(written.contains("\nhttps://cdn.example.com/vod/seg-12.ts\n"));
        assert!(!written.contains("seg-10.ts"));
        assert!(written.ends_with("#EXT-X-TOTAL_DURATION:12.000000\n"));
    }

    #[tokio::test]
    async fn test_empty_selection_writes_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("clip.m3u8");
        let request = ClipRequest::from_timecodes(
            "https://cdn.example.com/vod/index.m3u8",
            "00:01:00",
            "00:02:00",
            &output,
        )
        .unwrap();

        let err = PlaylistClipper::new(StaticSource(PLAYLIST))
            .clip(&request)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClipError::Media(hlsclip_media::Error::EmptySelection { .. })
        ));
        assert!(!err.is_bad_input());
        assert!(!output.exists());
    }
}
