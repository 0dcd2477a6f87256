use std::path::Path;

use crate::{encoders::types::OutputFormat, error::Result, frames::FrameSequence};

/// Core trait every animation container writer implements
pub trait AnimationEncoder: Send + Sync {
    /// Returns the unique name of this encoder
    fn name(&self) -> &str;

    /// Container format this encoder produces
    fn format(&self) -> OutputFormat;

    /// Check that whatever the encoder needs at runtime is present
    ///
    /// Called before any frame is decoded so a missing tool fails the run
    /// early. The default implementation has no runtime requirements.
    fn check_available(&self) -> Result<()> {
        Ok(())
    }

    /// Encode the whole sequence at `fps` into the file at `destination`
    ///
    /// # Arguments
    ///
    /// * `frames` - Ordered frames, all at the sequence reference size
    /// * `fps` - Frames per second, already range-checked by the caller
    /// * `destination` - Staging file to write; the caller owns its cleanup
    ///
    /// # Returns
    ///
    /// `Ok(())` only when `destination` holds a complete container. On error
    /// the file contents are unspecified and must not be exposed.
    fn encode(&self, frames: &FrameSequence, fps: u32, destination: &Path) -> Result<()>;
}
