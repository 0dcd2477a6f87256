use image::imageops::{self, FilterType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FrameError, Result};
use crate::frames::types::{Frame, FrameSequence, ReferenceSize};

/// Resampling filter used to conform frames to the reference size
///
/// Only anti-aliased filters are offered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    #[default]
    Lanczos3,
    CatmullRom,
    Gaussian,
    Triangle,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Triangle => FilterType::Triangle,
        }
    }
}

/// Conforms decoded frames to the size of the first one
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameNormalizer {
    filter: ResampleFilter,
}

impl FrameNormalizer {
    pub fn new(filter: ResampleFilter) -> Self {
        Self { filter }
    }

    /// Resize `frame` to `size`, stretching without preserving aspect ratio
    ///
    /// A frame that already has the requested size is returned untouched.
    pub fn conform(&self, frame: Frame, size: ReferenceSize) -> Frame {
        if frame.size() == size {
            return frame;
        }

        debug!("Resizing frame {} -> {} ({:?})", frame.size(), size, self.filter);
        let resized = imageops::resize(frame.as_image(), size.width, size.height, self.filter.into());
        Frame::new(resized)
    }

    /// Turn decoded frames into a sequence sharing the first frame's size
    pub fn normalize(&self, frames: Vec<Frame>) -> Result<FrameSequence> {
        let reference = frames
            .first()
            .map(Frame::size)
            .ok_or(FrameError::EmptyInput)?;

        let frames = frames
            .into_iter()
            .map(|frame| self.conform(frame, reference))
            .collect();

        FrameSequence::new(frames)
    }
}
