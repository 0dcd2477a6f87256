//! # Frame Module
//!
//! Everything that happens to the input images before encoding: natural
//! ordering by file name, decoding to RGB, and conforming every frame to the
//! size of the first.

pub mod types;
pub mod ordering;
pub mod loader;
pub mod normalizer;

pub use types::{Frame, FrameSequence, ReferenceSize, SourceImage};
pub use ordering::{natural_cmp, order_sources};
pub use loader::FrameLoader;
pub use normalizer::{FrameNormalizer, ResampleFilter};
