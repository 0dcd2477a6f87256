//! # Panel-Animator
//!
//! Turn a sequence of still images into a looping GIF or an MP4 video.
//!
//! Images are put in natural filename order (`panel2` before `panel10`),
//! decoded to RGB, stretched to the size of the first frame, and encoded at a
//! fixed frame rate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use panel_animator::{AnimationEngine, Config, OutputFormat, SourceImage};
//!
//! # fn main() -> panel_animator::Result<()> {
//! let engine = AnimationEngine::new(Config::default())?;
//!
//! let sources = vec![
//!     SourceImage::from_path("panels/panel10.png")?,
//!     SourceImage::from_path("panels/panel2.png")?,
//!     SourceImage::from_path("panels/panel1.png")?,
//! ];
//!
//! let output = engine.render(sources, 12, OutputFormat::Gif)?;
//! std::fs::write(output.file_name(), output.bytes())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`frames`] - Ordering, decoding and size normalization
//! - [`encoders`] - GIF and MP4 container writers
//! - [`pipeline`] - The engine that runs a whole batch
//! - [`config`] - Configuration management
//!
//! ## Custom Encoders
//!
//! Implement [`AnimationEncoder`](encoders::AnimationEncoder) and hand it to
//! [`AnimationEngine::with_encoder`] to replace the built-in writer for a format.

pub mod config;
pub mod encoders;
pub mod error;
pub mod frames;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use crate::{
    config::Config,
    encoders::{AnimationEncoder, AnimationOutput, OutputFormat},
    error::{AnimatorError, Result},
    frames::SourceImage,
    pipeline::AnimationEngine,
};
