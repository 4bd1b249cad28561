//! Absolute URL resolution for playlist URIs.

use crate::{Error, Result};
use url::Url;

/// Returns true if `uri` carries an `http` or `https` scheme.
pub fn is_absolute(uri: &str) -> bool {
    Url::parse(uri)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Resolve `uri` against `base`.
///
/// Absolute URIs are returned untouched. Everything else goes through
/// RFC 3986 reference resolution, so `../`, rooted paths and query-only
/// references all behave the way a player would resolve them.
pub fn resolve(base: &str, uri: &str) -> Result<String> {
    if is_absolute(uri) {
        return Ok(uri.to_string());
    }

    let base_url = Url::parse(base).map_err(|e| Error::invalid_url(base, e))?;
    base_url
        .join(uri)
        .map(String::from)
        .map_err(|e| Error::invalid_url(uri, e))
}

/// The manifest URL truncated after its last `/`.
///
/// The result always ends in `/`.
pub fn base_of(manifest_url: &str) -> String {
    match manifest_url.rfind('/') {
        Some(pos) => manifest_url[..=pos].to_string(),
        None => format!("{manifest_url}/"),
    }
}

/// Check that `manifest_url` is an absolute http(s) URL.
pub fn validate_manifest_url(manifest_url: &str) -> Result<Url> {
    let url = Url::parse(manifest_url).map_err(|e| Error::invalid_url(manifest_url, e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_url(
            manifest_url,
            url::ParseError::RelativeUrlWithoutBase,
        ));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://cdn.example.com/vod/show/";

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("https://cdn.example.com/a.ts"));
        assert!(is_absolute("http://cdn.example.com/a.ts"));
        assert!(!is_absolute("a.ts"));
        assert!(!is_absolute("/vod/a.ts"));
        assert!(!is_absolute("ftp://cdn.example.com/a.ts"));
        assert!(!is_absolute("data:text/plain,hi"));
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(
            resolve(BASE, "seg-1.ts").unwrap(),
            "https://cdn.example.com/vod/show/seg-1.ts"
        );
        assert_eq!(
            resolve(BASE, "../keys/k.bin").unwrap(),
            "https://cdn.example.com/vod/keys/k.bin"
        );
        assert_eq!(
            resolve(BASE, "/root.ts").unwrap(),
            "https://cdn.example.com/root.ts"
        );
    }

    #[test]
    fn test_resolve_query_only() {
        assert_eq!(
            resolve("https://cdn.example.com/vod/index.m3u8", "?token=1").unwrap(),
            "https://cdn.example.com/vod/index.m3u8?token=1"
        );
    }

    #[test]
    fn test_resolve_keeps_absolute() {
        let uri = "https://other.example.com/x/seg-00042.m4s?cv=v1";
        assert_eq!(resolve(BASE, uri).unwrap(), uri);
    }

    #[test]
    fn test_resolve_bad_base() {
        let err = resolve("not a url", "seg.ts").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_base_of() {
        assert_eq!(
            base_of("https://cdn.example.com/vod/show/index.m3u8"),
            "https://cdn.example.com/vod/show/"
        );
        assert_eq!(
            base_of("https://cdn.example.com/vod/"),
            "https://cdn.example.com/vod/"
        );
        assert_eq!(base_of("index.m3u8"), "index.m3u8/");
    }

    #[test]
    fn test_validate_manifest_url() {
        assert!(validate_manifest_url("https://cdn.example.com/a.m3u8").is_ok());
        assert!(validate_manifest_url("file:///tmp/a.m3u8").is_err());
        assert!(validate_manifest_url("cdn.example.com/a.m3u8").is_err());
    }
}
