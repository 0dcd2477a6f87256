use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    config::Config,
    encoders::{AnimationEncoder, AnimationOutput, EncoderRegistry, OutputFormat, StagingSlot},
    error::{AnimatorError, EncodeError, FrameError, Result},
    frames::{order_sources, FrameLoader, FrameNormalizer, FrameSequence, SourceImage},
};

/// Main engine that turns a batch of still images into one animation
///
/// The engine follows a clear pipeline:
/// 1. Validation - Check the frame rate range and that input exists
/// 2. Ordering - Natural sort of the sources by file stem
/// 3. Decoding - Decode every image to RGB, aborting on the first failure
/// 4. Normalization - Conform every frame to the first frame's size
/// 5. Encoding - Write the container to a staging file and read it back
///
/// Each call is a single blocking batch: it either returns the complete
/// animation or an error, never a partial file.
#[derive(Clone)]
pub struct AnimationEngine {
    config: Config,
    encoders: EncoderRegistry,
}

impl AnimationEngine {
    /// Create a new engine, rejecting an invalid configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let encoders = EncoderRegistry::new(&config.encoding);
        Ok(Self { config, encoders })
    }

    /// Replace the encoder used for the encoder's own format
    pub fn with_encoder(mut self, encoder: Arc<dyn AnimationEncoder>) -> Self {
        self.encoders.register(encoder);
        self
    }

    /// The configuration this engine runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Main render method - orchestrates the entire pipeline
    ///
    /// # Arguments
    ///
    /// * `sources` - Images in upload order
    /// * `fps` - Frames per second, must lie in the configured range
    /// * `format` - Output container
    pub fn render(
        &self,
        sources: Vec<SourceImage>,
        fps: u32,
        format: OutputFormat,
    ) -> Result<AnimationOutput> {
        info!("🎞️  Rendering {} images as {} at {} fps", sources.len(), format, fps);

        // Pipeline Step 1: Validation
        let encoder = self.validate(&sources, fps, format)?;

        // Pipeline Step 2: Ordering
        let sources = order_sources(sources);
        debug!(
            "Frame order: {:?}",
            sources.iter().map(SourceImage::name).collect::<Vec<_>>()
        );

        // Pipeline Step 3: Decoding
        let frames = FrameLoader::load_all(&sources)?;

        // Pipeline Step 4: Normalization
        let sequence = FrameNormalizer::new(self.config.normalize.filter).normalize(frames)?;

        // Pipeline Step 5: Encoding
        let output = self.encode(encoder.as_ref(), &sequence, fps, format)?;

        info!("🎉 Animation ready: {} ({} bytes)", output.file_name(), output.len());
        Ok(output)
    }

    /// Run [`render`](Self::render) on the blocking thread pool
    ///
    /// For async hosts. The pipeline itself still runs start to finish on a
    /// single thread.
    pub async fn render_async(
        &self,
        sources: Vec<SourceImage>,
        fps: u32,
        format: OutputFormat,
    ) -> Result<AnimationOutput> {
        let engine = self.clone();
        tokio::task::spawn_blocking(move || engine.render(sources, fps, format))
            .await
            .map_err(|e| AnimatorError::generic(format!("render task failed: {}", e)))?
    }

    // ==========================================
    // PIPELINE STEP 1: VALIDATION
    // ==========================================

    fn validate(
        &self,
        sources: &[SourceImage],
        fps: u32,
        format: OutputFormat,
    ) -> Result<Arc<dyn AnimationEncoder>> {
        let animation = &self.config.animation;
        if !animation.accepts_fps(fps) {
            return Err(EncodeError::InvalidFrameRate {
                fps,
                min: animation.min_fps,
                max: animation.max_fps,
            }
            .into());
        }

        if sources.is_empty() {
            return Err(FrameError::EmptyInput.into());
        }

        let encoder = self.encoders.get(format).ok_or_else(|| EncodeError::EncoderUnavailable {
            encoder: format.to_string(),
            reason: "no encoder registered for this format".to_string(),
        })?;
        encoder.check_available()?;

        Ok(encoder)
    }

    // ==========================================
    // PIPELINE STEP 5: ENCODING
    // ==========================================

    fn encode(
        &self,
        encoder: &dyn AnimationEncoder,
        sequence: &FrameSequence,
        fps: u32,
        format: OutputFormat,
    ) -> Result<AnimationOutput> {
        info!(
            "📼 Encoding {} frames at {} with '{}'",
            sequence.len(),
            sequence.reference_size(),
            encoder.name()
        );

        let slot = StagingSlot::claim(self.config.encoding.staging_dir(), format)?;

        // The slot is dropped, and its file removed, on every return below
        encoder.encode(sequence, fps, slot.path())?;
        let bytes = slot.read_back()?;

        Ok(AnimationOutput::new(bytes, format))
    }
}
