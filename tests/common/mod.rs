//! Shared fixtures for integration tests.
//!
//! [`serve_playlist`] mounts a playlist on a fresh `wiremock` server and
//! returns the server together with the playlist URL.

#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the playlist is served under.
pub const PLAYLIST_PATH: &str = "/vod/show/index.m3u8";

/// Six fMP4 segments of 6.006s behind an AES-128 key and an init map,
/// with a stale total-duration tag left by an earlier clip.
pub const VOD_PLAYLIST: &str = "#EXTM3U
#EXT-X-VERSION:7
#EXT-X-TARGETDURATION:7
#EXT-X-MEDIA-SEQUENCE:40
#EXT-X-PLAYLIST-TYPE:VOD
#EXT-X-INDEPENDENT-SEGMENTS
#EXT-X-KEY:METHOD=AES-128,URI=\"../keys/k1.bin\",IV=0x00000000000000000000000000000001
#EXT-X-MAP:URI=\"init.mp4?cv=v1\"
#EXTINF:6.006,
seg-00040.m4s?cv=v1
#EXTINF:6.006,
seg-00041.m4s?cv=v1
#EXTINF:6.006,
seg-00042.m4s?cv=v1
#EXTINF:6.006,
seg-00043.m4s?cv=v1
#EXTINF:6.006,
seg-00044.m4s?cv=v1
#EXTINF:4.2,
seg-00045.m4s?cv=v1
#EXT-X-ENDLIST
#EXT-X-TOTAL-DURATION:34.230000
";

/// Start a server that answers `GET PLAYLIST_PATH` with `body`.
pub async fn serve_playlist(body: &str) -> (MockServer, String) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PLAYLIST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let url = format!("{}{}", server.uri(), PLAYLIST_PATH);
    (server, url)
}

/// Start a server that answers `GET PLAYLIST_PATH` with `status`.
pub async fn serve_status(status: u16) -> (MockServer, String) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PLAYLIST_PATH))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;

    let url = format!("{}{}", server.uri(), PLAYLIST_PATH);
    (server, url)
}
