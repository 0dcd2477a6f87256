use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::{
    encoders::OutputFormat,
    error::{ConfigError, Result},
    frames::ResampleFilter,
};

/// Main configuration for the Panel-Animator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Frame rate bounds and output defaults
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Frame normalization settings
    #[serde(default)]
    pub normalize: NormalizeConfig,

    /// Encoder settings
    #[serde(default)]
    pub encoding: EncodingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string()
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.animation.validate()?;
        self.encoding.validate()?;
        Ok(())
    }
}

/// Frame rate range and the defaults used when the caller does not choose
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Lowest accepted frame rate (inclusive)
    pub min_fps: u32,

    /// Highest accepted frame rate (inclusive)
    pub max_fps: u32,

    /// Frame rate used when none is given
    pub default_fps: u32,

    /// Output container used when none is given
    pub default_format: OutputFormat,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            min_fps: 1,
            max_fps: 30,
            default_fps: 10,
            default_format: OutputFormat::Mp4,
        }
    }
}

impl AnimationConfig {
    /// Check whether `fps` lies inside the configured range
    pub fn accepts_fps(&self, fps: u32) -> bool {
        (self.min_fps..=self.max_fps).contains(&fps)
    }

    fn validate(&self) -> Result<()> {
        if self.min_fps == 0 {
            return Err(ConfigError::InvalidValue {
                key: "animation.min_fps".to_string(),
                value: self.min_fps.to_string()
            }.into());
        }

        if self.min_fps > self.max_fps {
            return Err(ConfigError::InvalidValue {
                key: "animation.fps_range".to_string(),
                value: format!("{}-{}", self.min_fps, self.max_fps)
            }.into());
        }

        if !self.accepts_fps(self.default_fps) {
            return Err(ConfigError::InvalidValue {
                key: "animation.default_fps".to_string(),
                value: self.default_fps.to_string()
            }.into());
        }

        Ok(())
    }
}

/// Frame normalization configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Resampling filter used when a frame must be resized
    pub filter: ResampleFilter,
}

/// Encoder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingConfig {
    /// Directory holding the staging file (OS temp dir when unset)
    pub staging_dir: Option<PathBuf>,

    /// NeuQuant speed for GIF palette generation (1 = best, 30 = fastest)
    pub gif_speed: i32,

    /// Video codec passed to ffmpeg
    pub video_codec: String,

    /// Quality setting (0-100, higher is better)
    pub quality: u8,

    /// ffmpeg executable to invoke
    pub ffmpeg_path: String,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            staging_dir: None,
            gif_speed: 10,
            video_codec: "libx264".to_string(),
            quality: 85,
            ffmpeg_path: "ffmpeg".to_string(),
        }
    }
}

impl EncodingConfig {
    /// Directory the staging file is written to
    pub fn staging_dir(&self) -> PathBuf {
        self.staging_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    fn validate(&self) -> Result<()> {
        if !(1..=30).contains(&self.gif_speed) {
            return Err(ConfigError::InvalidValue {
                key: "encoding.gif_speed".to_string(),
                value: self.gif_speed.to_string()
            }.into());
        }

        if self.quality > 100 {
            return Err(ConfigError::InvalidValue {
                key: "encoding.quality".to_string(),
                value: self.quality.to_string()
            }.into());
        }

        if self.video_codec.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "encoding.video_codec".to_string(),
                value: self.video_codec.clone()
            }.into());
        }

        if self.ffmpeg_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "encoding.ffmpeg_path".to_string(),
                value: self.ffmpeg_path.clone()
            }.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.animation.accepts_fps(1));
        assert!(config.animation.accepts_fps(30));
        assert!(!config.animation.accepts_fps(0));
        assert!(!config.animation.accepts_fps(31));
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");

        let mut original_config = Config::default();
        original_config.animation.default_format = OutputFormat::Gif;
        original_config.normalize.filter = ResampleFilter::CatmullRom;

        original_config.save_to_file(&file_path).unwrap();
        let loaded_config = Config::from_file(&file_path).unwrap();

        assert_eq!(loaded_config.animation.default_fps, 10);
        assert_eq!(loaded_config.animation.default_format, OutputFormat::Gif);
        assert_eq!(loaded_config.normalize.filter, ResampleFilter::CatmullRom);
        assert_eq!(loaded_config.encoding.video_codec, "libx264");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("partial.toml");
        std::fs::write(
            &file_path,
            "[animation]\nmin_fps = 2\nmax_fps = 24\ndefault_fps = 12\ndefault_format = \"gif\"\n",
        )
        .unwrap();

        let config = Config::from_file(&file_path).unwrap();
        assert_eq!(config.animation.max_fps, 24);
        assert_eq!(config.encoding.gif_speed, 10);
        assert_eq!(config.normalize.filter, ResampleFilter::Lanczos3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections_fill_in_defaults() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("sparse.toml");
        std::fs::write(
            &file_path,
            "[animation]\nmax_fps = 24\n\n[encoding]\ngif_speed = 5\n",
        )
        .unwrap();

        let config = Config::from_file(&file_path).unwrap();
        assert_eq!(config.animation.max_fps, 24);
        assert_eq!(config.animation.min_fps, 1);
        assert_eq!(config.animation.default_fps, 10);
        assert_eq!(config.animation.default_format, OutputFormat::Mp4);
        assert_eq!(config.encoding.gif_speed, 5);
        assert_eq!(config.encoding.video_codec, "libx264");
        assert_eq!(config.encoding.quality, 85);
        assert!(config.encoding.staging_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempdir().unwrap();
        let result = Config::from_file(dir.path().join("nope.toml"));
        assert!(matches!(
            result,
            Err(crate::AnimatorError::Config(ConfigError::FileNotFound { .. }))
        ));
    }

    #[test]
    fn test_invalid_fps_range() {
        let mut config = Config::default();
        config.animation.min_fps = 20;
        config.animation.max_fps = 10;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.animation.min_fps = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.animation.default_fps = 60;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_encoding_config() {
        let mut config = Config::default();
        config.encoding.gif_speed = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.encoding.quality = 101;
        assert!(config.validate().is_err());
    }
}
