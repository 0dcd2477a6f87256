//! # Encoder Module
//!
//! Turns a normalized frame sequence into an animation container. GIF output
//! is written in-process; MP4 output goes through the system `ffmpeg`.

pub mod types;
pub mod traits;
pub mod registry;
pub mod staging;

mod gif_encoder;
mod video_encoder;

pub use types::{AnimationOutput, OutputFormat};
pub use traits::AnimationEncoder;
pub use registry::EncoderRegistry;
pub use staging::StagingSlot;
pub use gif_encoder::GifEncoder;
pub use video_encoder::VideoEncoder;

#[cfg(all(test, unix))]
pub(crate) mod testing {
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use std::process::Command;
    use std::time::Duration;

    /// Reads all of stdin and writes it to the output path
    pub const COPIES_INPUT: &str = "cat > \"$out\"";

    /// Drains stdin, leaves a partial file behind and fails
    pub const FAILS_AFTER_PARTIAL: &str =
        "cat > /dev/null\nprintf partial > \"$out\"\necho \"boom from fake\" >&2\nexit 1";

    /// Leaves a partial file and exits without reading stdin
    pub const EXITS_WITHOUT_READING: &str = "printf partial > \"$out\"\nexit 3";

    /// Write an executable stand-in for ffmpeg into `dir`
    ///
    /// `-version` always succeeds. Otherwise `$out` holds the last argument
    /// (the output path) and `body` runs.
    pub fn fake_ffmpeg(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        let script = format!(
            "#!/bin/sh\nif [ \"$1\" = \"-version\" ]; then exit 0; fi\nfor out; do :; done\n{}\n",
            body
        );
        std::fs::write(&path, script).unwrap();

        let mut permissions = std::fs::metadata(&path).unwrap().permissions();
        permissions.set_mode(0o755);
        std::fs::set_permissions(&path, permissions).unwrap();

        // A fork in another test thread can briefly keep the script open (ETXTBSY)
        for _ in 0..50 {
            match Command::new(&path).arg("-version").status() {
                Err(e) if e.raw_os_error() == Some(26) => std::thread::sleep(Duration::from_millis(20)),
                _ => break,
            }
        }
        path
    }
}
