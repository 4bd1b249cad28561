mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./hlsclip.toml",
        "./config.toml",
        "~/.config/hlsclip/config.toml",
        "/etc/hlsclip/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.fetch.user_agent.trim().is_empty() {
        anyhow::bail!("fetch.user_agent cannot be empty");
    }

    if config.output.default_playlist.as_os_str().is_empty() {
        anyhow::bail!("output.default_playlist cannot be empty");
    }

    // ffmpeg opens the playlist itself through the file protocol.
    if !config
        .tools
        .protocol_whitelist
        .split(',')
        .any(|p| p.trim() == "file")
    {
        anyhow::bail!(
            "tools.protocol_whitelist must include \"file\", got {:?}",
            config.tools.protocol_whitelist
        );
    }

    if let Some(ref ffmpeg) = config.tools.ffmpeg_path {
        if !ffmpeg.exists() {
            tracing::warn!("Configured ffmpeg path does not exist: {:?}", ffmpeg);
        }
    }

    Ok(())
}
