use thiserror::Error;

/// Main error type for the Panel-Animator library
#[derive(Error, Debug)]
pub enum AnimatorError {
    #[error("Frame loading error: {0}")]
    Frame(#[from] FrameError),

    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Errors raised while collecting, decoding or normalizing frames
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Failed to decode image '{name}': {reason}")]
    DecodeFailed { name: String, reason: String },

    #[error("No valid images were provided")]
    EmptyInput,

    #[error("Failed to read image file: {path} ({reason})")]
    ReadFailed { path: String, reason: String },
}

/// Errors raised while encoding the animation container
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Frame rate {fps} is outside the supported range {min}-{max}")]
    InvalidFrameRate { fps: u32, min: u32, max: u32 },

    #[error("Unsupported encoding parameters: {details}")]
    UnsupportedParameters { details: String },

    #[error("Encoder '{encoder}' is unavailable: {reason}")]
    EncoderUnavailable { encoder: String, reason: String },

    #[error("Animation encoding failed: {reason}")]
    EncodingFailed { reason: String },

    #[error("Staging file error: {path} ({reason})")]
    StagingFailed { path: String, reason: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using AnimatorError
pub type Result<T> = std::result::Result<T, AnimatorError>;

impl AnimatorError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Frame(FrameError::DecodeFailed { name, reason }) => {
                format!("Error processing image '{}': {}. Ensure your images are valid.", name, reason)
            }
            Self::Frame(FrameError::EmptyInput) => "No valid images were uploaded.".to_string(),
            Self::Encode(EncodeError::InvalidFrameRate { fps, min, max }) => {
                format!("Frame rate {} is not allowed. Pick a value between {} and {}.", fps, min, max)
            }
            Self::Encode(EncodeError::EncoderUnavailable { encoder, .. }) if encoder == "ffmpeg" => {
                "Could not create the video: FFmpeg was not found. Install FFmpeg or choose GIF output.".to_string()
            }
            Self::Encode(e) => format!("Error creating animation: {}", e),
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}
