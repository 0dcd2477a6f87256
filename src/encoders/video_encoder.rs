use std::io::Write;
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};

use tracing::{debug, info, warn};

use crate::encoders::{traits::AnimationEncoder, types::OutputFormat};
use crate::error::{EncodeError, Result};
use crate::frames::FrameSequence;

const ENCODER_NAME: &str = "ffmpeg";

/// Encodes the sequence into an MP4 by piping raw RGB frames to `ffmpeg`
///
/// The system binary is used instead of linking libav, so only an `ffmpeg`
/// on PATH (or at the configured location) is required.
pub struct VideoEncoder {
    ffmpeg_path: String,
    codec: String,
    quality: u8,
}

impl VideoEncoder {
    pub fn new<S: Into<String>>(ffmpeg_path: S, codec: S, quality: u8) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
            codec: codec.into(),
            quality: quality.min(100),
        }
    }

    /// Check whether the configured ffmpeg binary runs
    pub fn check_ffmpeg_available(&self) -> bool {
        Command::new(&self.ffmpeg_path)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn quality_to_crf(&self) -> u8 {
        (51 - ((self.quality as f32 / 100.0) * 51.0) as u8).clamp(0, 51)
    }

    fn spawn(&self, frames: &FrameSequence, fps: u32, destination: &Path) -> Result<Child> {
        let size = frames.reference_size();
        let mut cmd = Command::new(&self.ffmpeg_path);
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        cmd.args([
            "-y",
            "-loglevel", "error",
            "-f", "rawvideo",
            "-pix_fmt", "rgb24",
            "-s", &format!("{}x{}", size.width, size.height),
            "-r", &fps.to_string(),
            "-i", "pipe:0",
            "-an",
            // yuv420p needs even dimensions
            "-vf", "pad=ceil(iw/2)*2:ceil(ih/2)*2",
            "-c:v", &self.codec,
            "-pix_fmt", "yuv420p",
            "-crf", &self.quality_to_crf().to_string(),
            "-movflags", "+faststart",
            "-f", "mp4",
        ])
        .arg(destination);

        debug!("Spawning {:?}", cmd);

        cmd.spawn().map_err(|e| {
            EncodeError::EncoderUnavailable {
                encoder: ENCODER_NAME.to_string(),
                reason: format!("failed to spawn '{}': {}", self.ffmpeg_path, e),
            }
            .into()
        })
    }
}

impl Default for VideoEncoder {
    fn default() -> Self {
        Self::new("ffmpeg", "libx264", 85)
    }
}

impl AnimationEncoder for VideoEncoder {
    fn name(&self) -> &str {
        ENCODER_NAME
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Mp4
    }

    fn check_available(&self) -> Result<()> {
        if self.check_ffmpeg_available() {
            Ok(())
        } else {
            Err(EncodeError::EncoderUnavailable {
                encoder: ENCODER_NAME.to_string(),
                reason: format!("'{}' was not found or did not run", self.ffmpeg_path),
            }
            .into())
        }
    }

    fn encode(&self, frames: &FrameSequence, fps: u32, destination: &Path) -> Result<()> {
        info!("Encoding {} frames at {} fps with {}", frames.len(), fps, self.codec);

        let mut child = self.spawn(frames, fps, destination)?;

        let Some(mut stdin) = child.stdin.take() else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(EncodeError::EncodingFailed {
                reason: "failed to open ffmpeg stdin".to_string(),
            }
            .into());
        };

        let mut write_error = None;
        for (index, frame) in frames.iter().enumerate() {
            if let Err(e) = stdin.write_all(frame.as_rgb_bytes()) {
                write_error = Some((index, e));
                break;
            }
        }

        // Closing stdin signals end of input
        drop(stdin);

        let output = child.wait_with_output().map_err(|e| EncodeError::EncodingFailed {
            reason: format!("failed to wait for ffmpeg: {}", e),
        })?;

        if let Some((index, e)) = write_error {
            warn!("ffmpeg stopped reading at frame {}: {}", index, e);
            return Err(EncodeError::EncodingFailed {
                reason: format!("failed to write frame {} to ffmpeg ({}); {}", index, e, describe_exit(&output)),
            }
            .into());
        }

        if !output.status.success() {
            return Err(EncodeError::EncodingFailed {
                reason: describe_exit(&output),
            }
            .into());
        }

        Ok(())
    }
}

fn describe_exit(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("ffmpeg exited with {}", output.status)
    } else {
        format!("ffmpeg exited with {}: {}", output.status, stderr)
    }
}
