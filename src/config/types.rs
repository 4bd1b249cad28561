use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub tools: ToolsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    /// User-Agent header sent with the manifest request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    format!("hlsclip/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Playlist written when `--output` is not given
    #[serde(default = "default_playlist")]
    pub default_playlist: PathBuf,
}

fn default_playlist() -> PathBuf {
    PathBuf::from("clipped.m3u8")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_playlist: default_playlist(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub ffmpeg_path: Option<PathBuf>,

    /// Comma-separated protocols ffmpeg may open while reading the playlist
    #[serde(default = "default_protocol_whitelist")]
    pub protocol_whitelist: String,
}

fn default_protocol_whitelist() -> String {
    hlsclip_av::DEFAULT_PROTOCOL_WHITELIST.to_string()
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: None,
            protocol_whitelist: default_protocol_whitelist(),
        }
    }
}
