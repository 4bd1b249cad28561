//! Media playlist parsing.
//!
//! Parsing is best effort: a malformed duration or header number falls back
//! to a default and is counted in the [`ParseReport`] instead of failing the
//! whole playlist.

use super::tags;
use super::types::{Manifest, ManifestHeader, ParseOutcome, ParseReport, Segment};
use crate::uri;
use regex::{NoExpand, Regex};
use std::str::FromStr;
use std::sync::LazyLock;

static TOTAL_DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#EXT-X-TOTAL[-_]DURATION").expect("static regex"));

static URI_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"URI="([^"]+)""#).expect("static regex"));

static LAST_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\D*$").expect("static regex"));

/// Parse playlist text.
///
/// Relative key and map URIs are resolved against `base_url` while the
/// header is captured. Segment URIs are kept as written; the serializer
/// resolves them on output.
pub fn parse(text: &str, base_url: &str) -> Manifest {
    let mut report = ParseReport::default();

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let stale = is_total_duration(line);
            if stale {
                report.stripped_total_duration += 1;
            }
            !stale
        })
        .collect();

    if report.stripped_total_duration > 0 {
        tracing::debug!(
            "Stripped {} total-duration tag(s) from a previous clip",
            report.stripped_total_duration
        );
    }

    let mut header = ManifestHeader::default();
    let mut segments = Vec::new();
    let mut lines = lines.into_iter();

    while let Some(line) = lines.next() {
        let (tag, value) = split_tag(line);

        if tag == tags::EXTINF {
            let Some(uri) = lines.next() else {
                tracing::warn!("Playlist ends with a dangling {:?}, ignoring it", line);
                report.truncated = true;
                break;
            };

            let duration = parse_duration(value);
            if duration.defaulted {
                tracing::warn!("Unparseable segment duration in {:?}, using 0.0", line);
                report.defaulted_durations += 1;
            }

            let segment = Segment {
                duration: duration.value,
                uri: uri.to_string(),
                raw_duration_line: line.to_string(),
                index: parse_index(uri),
            };
            tracing::trace!(
                "Segment {} ({:.3}s, index {:?})",
                segment.uri,
                segment.duration,
                segment.index
            );
            segments.push(segment);
            continue;
        }

        // The header is frozen once the first segment has been seen.
        if segments.is_empty() {
            capture_header(&mut header, tag, value, line, base_url, &mut report);
        }
    }

    tracing::debug!(
        "Parsed {} segments (version {:?}, {} key(s), map: {})",
        segments.len(),
        header.version,
        header.keys.len(),
        header.map.is_some()
    );

    Manifest {
        base_url: base_url.to_string(),
        header,
        segments,
        report,
    }
}

/// Returns true for `#EXT-X-TOTAL-DURATION` / `#EXT-X-TOTAL_DURATION` in any case.
pub fn is_total_duration(line: &str) -> bool {
    TOTAL_DURATION.is_match(line)
}

fn split_tag(line: &str) -> (&str, &str) {
    line.split_once(':').unwrap_or((line, ""))
}

fn capture_header(
    header: &mut ManifestHeader,
    tag: &str,
    value: &str,
    line: &str,
    base_url: &str,
    report: &mut ParseReport,
) {
    match tag {
        tags::VERSION => {
            header.version = parse_header_number(value, line, report);
        }
        tags::PLAYLIST_TYPE => header.playlist_type = Some(line.to_string()),
        tags::INDEPENDENT_SEGMENTS => header.independent_segments = Some(line.to_string()),
        tags::TARGET_DURATION => {
            header.target_duration = parse_header_number(value, line, report);
        }
        tags::MEDIA_SEQUENCE => {
            header.media_sequence = parse_header_number(value, line, report);
        }
        tags::KEY => {
            let key = absolutize_uri_attribute(line, base_url);
            if key.defaulted {
                report.unresolved_uris += 1;
            }
            header.keys.push(key.value);
        }
        tags::MAP => {
            let map = absolutize_uri_attribute(line, base_url);
            if map.defaulted {
                report.unresolved_uris += 1;
            }
            header.map = Some(map.value);
        }
        _ => {}
    }
}

fn parse_header_number<T: FromStr>(value: &str, line: &str, report: &mut ParseReport) -> Option<T> {
    let outcome = parse_number(value);
    if outcome.defaulted {
        tracing::warn!("Ignoring unparseable header {:?}", line);
        report.defaulted_header_fields += 1;
    }
    outcome.value
}

/// Parse an integer header value, falling back to `None`.
pub fn parse_number<T: FromStr>(value: &str) -> ParseOutcome<Option<T>> {
    match value.trim().parse() {
        Ok(n) => ParseOutcome::parsed(Some(n)),
        Err(_) => ParseOutcome::fallback(None),
    }
}

/// Parse the duration part of an `#EXTINF` value (`<float>,<title>`).
///
/// Anything that is not a finite, non-negative number becomes 0.0.
pub fn parse_duration(value: &str) -> ParseOutcome<f64> {
    let number = value.split(',').next().unwrap_or_default().trim();
    match number.parse::<f64>() {
        Ok(d) if d.is_finite() && d >= 0.0 => ParseOutcome::parsed(d),
        _ => ParseOutcome::fallback(0.0),
    }
}

/// Extract the number at the end of a segment's file name.
///
/// The query string, fragment and extension are ignored, so
/// `seg-00042.m4s?cv=v1` yields 42.
pub fn parse_index(uri: &str) -> Option<u64> {
    let path = uri.split(['?', '#']).next().unwrap_or(uri);
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let stem = match file_name.rfind('.') {
        Some(pos) if pos > 0 => &file_name[..pos],
        _ => file_name,
    };

    LAST_DIGITS
        .captures(stem)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

/// Rewrite the quoted `URI` attribute of a directive to absolute form.
///
/// Directives without a `URI` attribute are returned as-is. If resolution
/// fails the line is kept verbatim and the outcome is flagged.
pub fn absolutize_uri_attribute(line: &str, base_url: &str) -> ParseOutcome<String> {
    let Some(relative) = URI_ATTRIBUTE.captures(line).and_then(|caps| caps.get(1)) else {
        return ParseOutcome::parsed(line.to_string());
    };

    match uri::resolve(base_url, relative.as_str()) {
        Ok(absolute) => {
            let replacement = format!("URI=\"{absolute}\"");
            ParseOutcome::parsed(URI_ATTRIBUTE.replace(line, NoExpand(&replacement)).into_owned())
        }
        Err(e) => {
            tracing::warn!("Keeping {:?} verbatim: {}", line, e);
            ParseOutcome::fallback(line.to_string())
        }
    }
}
