use serde::{Deserialize, Serialize};

/// Container kinds an animation can be written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Self-contained looping GIF
    Gif,
    /// H.264 video in an MP4 container
    Mp4,
}

impl OutputFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Gif => "gif",
            OutputFormat::Mp4 => "mp4",
        }
    }

    /// Suggested download name, `animation.<ext>`
    pub fn file_name(&self) -> String {
        format!("animation.{}", self.extension())
    }

    /// MIME-style content type, `video/<ext>`
    pub fn content_type(&self) -> String {
        format!("video/{}", self.extension())
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Encoded animation bytes tagged with their container format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationOutput {
    bytes: Vec<u8>,
    format: OutputFormat,
}

impl AnimationOutput {
    pub fn new(bytes: Vec<u8>, format: OutputFormat) -> Self {
        Self { bytes, format }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn file_name(&self) -> String {
        self.format.file_name()
    }

    pub fn content_type(&self) -> String {
        self.format.content_type()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
