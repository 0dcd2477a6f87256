use std::path::Path;

use tracing::{debug, info};

use crate::encoders::{traits::AnimationEncoder, types::OutputFormat};
use crate::error::{EncodeError, Result};
use crate::frames::FrameSequence;

/// Writes the sequence as a single infinitely looping GIF
pub struct GifEncoder {
    speed: i32,
}

impl GifEncoder {
    /// Create an encoder with the given NeuQuant speed (1 = best, 30 = fastest)
    pub fn new(speed: i32) -> Self {
        Self {
            speed: speed.clamp(1, 30),
        }
    }

    /// Per-frame display time in GIF centiseconds for a frame rate
    pub fn frame_delay(fps: u32) -> u16 {
        let centis = (100.0 / fps.max(1) as f64).round();
        (centis as u16).max(1)
    }

    /// Encode the sequence into an in-memory GIF
    pub fn encode_to_vec(&self, frames: &FrameSequence, fps: u32) -> Result<Vec<u8>> {
        let size = frames.reference_size();
        let (width, height) = match (u16::try_from(size.width), u16::try_from(size.height)) {
            (Ok(width), Ok(height)) => (width, height),
            _ => {
                return Err(EncodeError::UnsupportedParameters {
                    details: format!("{} exceeds the GIF limit of 65535x65535", size),
                }
                .into())
            }
        };

        let delay = Self::frame_delay(fps);
        debug!("GIF {}x{}, {} frames, delay {}cs", width, height, frames.len(), delay);

        let mut buffer = Vec::new();
        {
            let mut encoder = gif::Encoder::new(&mut buffer, width, height, &[]).map_err(gif_failure)?;
            encoder.set_repeat(gif::Repeat::Infinite).map_err(gif_failure)?;

            for frame in frames.iter() {
                let mut gif_frame = gif::Frame::from_rgb_speed(width, height, frame.as_rgb_bytes(), self.speed);
                gif_frame.delay = delay;
                encoder.write_frame(&gif_frame).map_err(gif_failure)?;
            }
            // Dropping the encoder writes the trailer
        }

        Ok(buffer)
    }
}

impl Default for GifEncoder {
    fn default() -> Self {
        Self::new(10)
    }
}

impl AnimationEncoder for GifEncoder {
    fn name(&self) -> &str {
        "gif"
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Gif
    }

    fn encode(&self, frames: &FrameSequence, fps: u32, destination: &Path) -> Result<()> {
        let bytes = self.encode_to_vec(frames, fps)?;

        std::fs::write(destination, &bytes).map_err(|e| EncodeError::StagingFailed {
            path: destination.display().to_string(),
            reason: e.to_string(),
        })?;

        info!("Wrote {} frame GIF ({} bytes)", frames.len(), bytes.len());
        Ok(())
    }
}

fn gif_failure(e: gif::EncodingError) -> EncodeError {
    EncodeError::EncodingFailed {
        reason: format!("GIF encoder: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::Frame;
    use std::io::Cursor;

    struct DecodedFrame {
        width: u16,
        height: u16,
        delay: u16,
        first_pixel: [u8; 3],
    }

    fn decode(bytes: &[u8]) -> (u16, u16, Vec<DecodedFrame>) {
        let mut options = gif::DecodeOptions::new();
        options.set_color_output(gif::ColorOutput::RGBA);
        let mut decoder = options.read_info(Cursor::new(bytes)).unwrap();
        let (width, height) = (decoder.width(), decoder.height());

        let mut frames = Vec::new();
        while let Some(frame) = decoder.read_next_frame().unwrap() {
            frames.push(DecodedFrame {
                width: frame.width,
                height: frame.height,
                delay: frame.delay,
                first_pixel: [frame.buffer[0], frame.buffer[1], frame.buffer[2]],
            });
        }
        (width, height, frames)
    }

    fn dominant_channel(pixel: [u8; 3]) -> usize {
        (0..3).max_by_key(|&i| pixel[i]).unwrap()
    }

    #[test]
    fn test_frame_delay() {
        assert_eq!(GifEncoder::frame_delay(1), 100);
        assert_eq!(GifEncoder::frame_delay(10), 10);
        assert_eq!(GifEncoder::frame_delay(30), 3);
        assert_eq!(GifEncoder::frame_delay(0), 100);
    }

    #[test]
    fn test_roundtrip_preserves_count_order_and_size() {
        let colors = [[250, 10, 10], [10, 250, 10], [10, 10, 250], [250, 10, 10]];
        let frames = colors.iter().map(|&c| Frame::new_filled(9, 7, c)).collect();
        let sequence = FrameSequence::new(frames).unwrap();

        let bytes = GifEncoder::default().encode_to_vec(&sequence, 5).unwrap();
        let (width, height, decoded) = decode(&bytes);

        assert_eq!((width, height), (9, 7));
        assert_eq!(decoded.len(), colors.len());
        for (frame, expected) in decoded.iter().zip(colors.iter()) {
            assert_eq!((frame.width, frame.height), (9, 7));
            assert_eq!(frame.delay, 20);
            assert_eq!(dominant_channel(frame.first_pixel), dominant_channel(*expected));
        }
    }

    #[test]
    fn test_single_frame_gif() {
        let sequence = FrameSequence::new(vec![Frame::new_filled(1, 1, [0, 0, 0])]).unwrap();
        let bytes = GifEncoder::new(30).encode_to_vec(&sequence, 1).unwrap();
        assert!(bytes.starts_with(b"GIF89a"));
        assert_eq!(bytes.last(), Some(&0x3B));
        assert_eq!(decode(&bytes).2.len(), 1);
    }

    #[test]
    fn test_encode_writes_destination() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("out.gif");
        let sequence = FrameSequence::new(vec![Frame::new_filled(4, 4, [1, 2, 3])]).unwrap();

        GifEncoder::default().encode(&sequence, 12, &destination).unwrap();
        let written = std::fs::read(&destination).unwrap();
        assert!(written.starts_with(b"GIF89a"));
    }

    #[test]
    fn test_oversized_frames_are_rejected() {
        let sequence = FrameSequence::new(vec![Frame::new_filled(65536, 1, [0, 0, 0])]).unwrap();
        let result = GifEncoder::default().encode_to_vec(&sequence, 10);
        assert!(matches!(
            result,
            Err(crate::AnimatorError::Encode(EncodeError::UnsupportedParameters { .. }))
        ));
    }
}
