mod cli;

use hlsclip::{config, ClipError, ClipRequest, ClipSummary, HttpSource, PlaylistClipper};
use hlsclip_av::{check_ffmpeg, default_media_path, Concatenator, FfmpegConcat};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, ClipArgs, Commands};
use std::path::Path;
use std::process::ExitCode;

/// Exit status for malformed timecodes, ranges or URLs.
const EXIT_BAD_INPUT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "hlsclip=trace,hlsclip_media=trace,hlsclip_av=debug".to_string()
        } else {
            "hlsclip=info,hlsclip_media=info,hlsclip_av=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let bad_input = e
                .downcast_ref::<ClipError>()
                .is_some_and(ClipError::is_bad_input);
            if bad_input {
                ExitCode::from(EXIT_BAD_INPUT)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Clip(args) => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            clip_playlist(&config, args)
        }
        Commands::CheckTools => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            check_tools(&config)
        }
        Commands::Validate { file } => {
            let path = file.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("hlsclip {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn clip_playlist(config: &config::Config, args: ClipArgs) -> Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| config.output.default_playlist.clone());
    let request = ClipRequest::from_timecodes(&args.url, &args.start, &args.end, output)?;

    // Locate ffmpeg before fetching anything so a missing tool fails fast.
    let concat = if args.download {
        let ffmpeg = FfmpegConcat::locate(config.tools.ffmpeg_path.as_deref())
            .context("--download needs ffmpeg")?;
        Some(ffmpeg.with_protocol_whitelist(&config.tools.protocol_whitelist))
    } else {
        None
    };

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let clipper = PlaylistClipper::new(HttpSource::new(&config.fetch));
    let summary = rt.block_on(clipper.clip(&request))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    if let Some(concat) = concat {
        let media = args
            .media
            .unwrap_or_else(|| default_media_path(&summary.output));
        if !args.json {
            println!("\nDownloading to {} ...", media.display());
        }
        concat
            .concatenate(&summary.output, &media)
            .with_context(|| format!("Failed to download {:?}", media))?;
        if !args.json {
            println!("Download completed: {}", media.display());
        }
    }

    Ok(())
}

fn print_summary(summary: &ClipSummary) {
    println!("Clipped playlist saved to: {}", summary.output.display());
    println!("Base URL (auto): {}", summary.base_url);
    println!(
        "Selected duration: {:.3}s ({})  |  Segments: {}  |  TARGETDURATION: {}  |  MEDIA-SEQUENCE: {}",
        summary.duration_secs,
        summary.duration_timecode(),
        summary.segments,
        summary.target_duration,
        summary.media_sequence
    );
}

fn check_tools(config: &config::Config) -> Result<()> {
    println!("Checking external tools...\n");

    let tool = check_ffmpeg(config.tools.ffmpeg_path.as_deref());
    let status = if tool.available { "✓" } else { "✗" };

    print!("{} {}", status, tool.name);
    if let Some(ref version) = tool.version {
        print!(" ({})", version);
    }
    if let Some(ref path) = tool.path {
        print!(" - {}", path.display());
    }
    println!();

    println!();
    if tool.available {
        println!("All required tools are available!");
    } else {
        println!("ffmpeg is missing. Install it to use `clip --download`.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            print_config(&config);
        }
        None => {
            println!("No config file specified, using defaults");
            print_config(&config::Config::default());
        }
    }

    Ok(())
}

fn print_config(config: &config::Config) {
    println!("  User agent: {}", config.fetch.user_agent);
    println!(
        "  Default playlist: {}",
        config.output.default_playlist.display()
    );
    match config.tools.ffmpeg_path {
        Some(ref ffmpeg) => println!("  ffmpeg: {}", ffmpeg.display()),
        None => println!("  ffmpeg: (PATH)"),
    }
    println!("  Protocol whitelist: {}", config.tools.protocol_whitelist);
}
