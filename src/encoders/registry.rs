use std::collections::HashMap;
use std::sync::Arc;

use crate::config::EncodingConfig;
use crate::encoders::{AnimationEncoder, GifEncoder, OutputFormat, VideoEncoder};

/// Registry mapping each output format to the encoder that writes it
///
/// The built-in encoders are registered from the encoding configuration;
/// hosts may replace them with their own implementations.
#[derive(Clone)]
pub struct EncoderRegistry {
    encoders: HashMap<OutputFormat, Arc<dyn AnimationEncoder>>,
}

impl EncoderRegistry {
    /// Create a registry with the built-in GIF and ffmpeg encoders
    pub fn new(config: &EncodingConfig) -> Self {
        let mut registry = Self {
            encoders: HashMap::new(),
        };

        registry.register(Arc::new(GifEncoder::new(config.gif_speed)));
        registry.register(Arc::new(VideoEncoder::new(
            config.ffmpeg_path.clone(),
            config.video_codec.clone(),
            config.quality,
        )));
        registry
    }

    /// Register an encoder, replacing any previous one for its format
    pub fn register(&mut self, encoder: Arc<dyn AnimationEncoder>) {
        self.encoders.insert(encoder.format(), encoder);
    }

    /// Get the encoder for a format
    pub fn get(&self, format: OutputFormat) -> Option<Arc<dyn AnimationEncoder>> {
        self.encoders.get(&format).cloned()
    }

    /// Check if a format has an encoder
    pub fn has_format(&self, format: OutputFormat) -> bool {
        self.encoders.contains_key(&format)
    }

    /// Get the number of registered encoders
    pub fn len(&self) -> usize {
        self.encoders.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.encoders.is_empty()
    }
}

impl Default for EncoderRegistry {
    fn default() -> Self {
        Self::new(&EncodingConfig::default())
    }
}
