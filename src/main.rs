use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, Level};

use panel_animator::{
    frames::FrameLoader,
    AnimationEngine, Config, OutputFormat,
};

#[derive(Parser)]
#[command(
    name = "panel-animator",
    version,
    about = "Turn a sequence of still images into an animation",
    long_about = "Panel-Animator orders images by their file names (numbers sort numerically), resizes them to match the first image, and encodes them as a looping GIF or an MP4 video."
)]
struct Cli {
    /// Image files (PNG, JPEG) or directories containing them
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Frames per second (defaults to the configured value)
    #[arg(short, long)]
    fps: Option<u32>,

    /// Output format (defaults to the configured value)
    #[arg(short = 't', long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file path (defaults to animation.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    info!("Starting Panel-Animator v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(&config_path)?
        }
        None => {
            info!("Using default configuration");
            Config::default()
        }
    };

    let fps = cli.fps.unwrap_or(config.animation.default_fps);
    let format = cli.format.unwrap_or(config.animation.default_format);
    let output_path = cli.output.unwrap_or_else(|| PathBuf::from(format.file_name()));

    let sources = FrameLoader::collect_sources(&cli.inputs)?;

    let engine = AnimationEngine::new(config)?;
    let animation = match engine.render_async(sources, fps, format).await {
        Ok(animation) => animation,
        Err(e) => {
            error!("{}", e.user_message());
            return Err(e.into());
        }
    };

    std::fs::write(&output_path, animation.bytes())?;

    info!(
        "Animation saved to {:?} ({}, {} bytes)",
        output_path,
        animation.content_type(),
        animation.len()
    );
    Ok(())
}
