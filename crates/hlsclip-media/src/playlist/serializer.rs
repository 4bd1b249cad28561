//! Render a selection back to playlist text.

use super::tags;
use super::types::{Manifest, Selection};
use crate::{uri, Result};

/// Render `selection` as a standalone VOD playlist.
///
/// Header lines come from `manifest.header` with the target duration and
/// media sequence replaced by the selection's values. Every segment keeps its
/// original `#EXTINF` line and gets an absolute URI. The output ends with
/// `#EXT-X-ENDLIST` and an `#EXT-X-TOTAL_DURATION` line, and is newline
/// terminated.
pub fn render(manifest: &Manifest, selection: &Selection) -> Result<String> {
    let header = &manifest.header;
    let mut lines: Vec<String> = Vec::with_capacity(8 + header.keys.len() + 2 * selection.segments.len());

    lines.push(tags::EXTM3U.to_string());
    lines.push(format!("{}:{}", tags::VERSION, header.effective_version()));
    lines.extend(header.independent_segments.iter().cloned());
    lines.extend(header.playlist_type.iter().cloned());
    lines.push(format!("{}:{}", tags::TARGET_DURATION, selection.target_duration));
    lines.push(format!("{}:{}", tags::MEDIA_SEQUENCE, selection.media_sequence));
    lines.extend(header.keys.iter().cloned());
    lines.extend(header.map.iter().cloned());

    for segment in &selection.segments {
        lines.push(segment.raw_duration_line.clone());
        lines.push(uri::resolve(&manifest.base_url, &segment.uri)?);
    }

    lines.push(tags::ENDLIST.to_string());
    lines.push(format!(
        "{}:{:.6}",
        tags::TOTAL_DURATION,
        selection.total_duration
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}
