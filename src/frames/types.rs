use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;

use crate::error::{FrameError, Result};

/// An input image as handed over by the host: a name plus its encoded bytes
///
/// The name drives ordering; the bytes are decoded by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    name: String,
    bytes: Vec<u8>,
}

impl SourceImage {
    /// Create a source image from in-memory content
    pub fn new<S: Into<String>>(name: S, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a source image from disk, naming it after the file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| FrameError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(name, bytes))
    }

    /// The uploaded file name, extension included
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The file name without its extension
    pub fn stem(&self) -> &str {
        Path::new(&self.name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.name)
    }

    /// Encoded image content
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// A single decoded animation frame
///
/// Thin wrapper around an RGB image buffer. Alpha never reaches a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    buffer: RgbImage,
}

impl Frame {
    /// Create a new frame from an RGB image buffer
    pub fn new(buffer: RgbImage) -> Self {
        Self { buffer }
    }

    /// Create a new frame with the given dimensions filled with the specified color
    pub fn new_filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        let buffer = ImageBuffer::from_fn(width, height, |_, _| {
            Rgb(color)
        });
        Self { buffer }
    }

    /// Get the width of the frame
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Get the height of the frame
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Frame dimensions as a reference size
    pub fn size(&self) -> ReferenceSize {
        ReferenceSize::new(self.width(), self.height())
    }

    /// Get a pixel at the given coordinates (returns RGB array)
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let pixel = self.buffer.get_pixel(x, y);
        [pixel[0], pixel[1], pixel[2]]
    }

    /// Get the underlying image buffer
    pub fn as_image(&self) -> &RgbImage {
        &self.buffer
    }

    /// Raw interleaved RGB bytes, row-major
    pub fn as_rgb_bytes(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    /// Unwrap into the underlying image buffer
    pub fn into_image(self) -> RgbImage {
        self.buffer
    }
}

/// Dimensions every frame of a sequence is conformed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceSize {
    pub width: u32,
    pub height: u32,
}

impl ReferenceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for ReferenceSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Ordered, size-normalized frames ready for encoding
///
/// Construction enforces the encoder preconditions: at least one frame, and
/// every frame at the reference size of the first one.
#[derive(Debug, Clone)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    reference_size: ReferenceSize,
}

impl FrameSequence {
    /// Build a sequence, taking the reference size from the first frame
    pub fn new(frames: Vec<Frame>) -> Result<Self> {
        let reference_size = frames
            .first()
            .map(Frame::size)
            .ok_or(FrameError::EmptyInput)?;

        if let Some(index) = frames.iter().position(|frame| frame.size() != reference_size) {
            return Err(crate::AnimatorError::generic(format!(
                "frame {} is {} but the sequence reference size is {}",
                index,
                frames[index].size(),
                reference_size
            )));
        }

        Ok(Self {
            frames,
            reference_size,
        })
    }

    /// Dimensions shared by every frame
    pub fn reference_size(&self) -> ReferenceSize {
        self.reference_size
    }

    /// Frames in playback order
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false for a constructed sequence, kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Get frames as an iterator
    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }
}
