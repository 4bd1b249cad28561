use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hlsclip")]
#[command(author, version, about = "Cut a time window out of a remote HLS playlist")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clip a remote playlist to a time window
    Clip(ClipArgs),

    /// Check that ffmpeg is available
    CheckTools,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses --config or defaults if not specified)
        #[arg(value_name = "CONFIG")]
        file: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

#[derive(Args)]
pub struct ClipArgs {
    /// URL of the media playlist (m3u8)
    #[arg(required = true)]
    pub url: String,

    /// Window start (HH:MM:SS[.fff])
    #[arg(short, long)]
    pub start: String,

    /// Window end (HH:MM:SS[.fff]), exclusive
    #[arg(short, long)]
    pub end: String,

    /// Playlist to write (defaults to output.default_playlist from config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Stream-copy the clipped segments into one file with ffmpeg
    #[arg(long)]
    pub download: bool,

    /// Media file for --download (defaults to the playlist name with .mp4)
    #[arg(long, requires = "download")]
    pub media: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}
