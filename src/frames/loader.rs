use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{FrameError, Result};
use crate::frames::types::{Frame, SourceImage};

/// Decodes source images into RGB frames
///
/// Decoding is fail-fast: the first image that cannot be decoded aborts the
/// whole batch and the error names that image.
pub struct FrameLoader;

impl FrameLoader {
    /// Decode a single source image, forcing the RGB color model
    pub fn load(source: &SourceImage) -> Result<Frame> {
        let image = image::load_from_memory(source.bytes()).map_err(|e| FrameError::DecodeFailed {
            name: source.name().to_string(),
            reason: e.to_string(),
        })?;

        let rgb_image = match image {
            image::DynamicImage::ImageRgb8(img) => img,
            _ => image.to_rgb8(),
        };

        debug!("Decoded '{}' ({}x{})", source.name(), rgb_image.width(), rgb_image.height());
        Ok(Frame::new(rgb_image))
    }

    /// Decode every source in order, stopping at the first failure
    pub fn load_all(sources: &[SourceImage]) -> Result<Vec<Frame>> {
        let mut frames = Vec::with_capacity(sources.len());

        for source in sources {
            let frame = match Self::load(source) {
                Ok(frame) => frame,
                Err(e) => {
                    info!("Aborting batch: '{}' could not be decoded", source.name());
                    return Err(e);
                }
            };
            frames.push(frame);
        }

        if let Some(first) = frames.first() {
            info!("Decoded {} frames, reference size {}", frames.len(), first.size());
        }

        Ok(frames)
    }

    /// Check whether a path has an extension the loader can decode
    pub fn is_supported<P: AsRef<Path>>(path: P) -> bool {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) => matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg"),
            None => false,
        }
    }

    /// Gather source images from files and directories
    ///
    /// Files are taken as given, in argument order. Directories contribute
    /// their visible, supported image files sorted by file name. Natural
    /// ordering happens later in the pipeline.
    pub fn collect_sources<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<SourceImage>> {
        let mut sources = Vec::new();

        for path in paths {
            let path = path.as_ref();
            if path.is_dir() {
                for file in Self::list_directory(path)? {
                    sources.push(SourceImage::from_path(&file)?);
                }
            } else {
                sources.push(SourceImage::from_path(path)?);
            }
        }

        info!("Collected {} source images", sources.len());
        Ok(sources)
    }

    fn list_directory(directory: &Path) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(directory).map_err(|e| FrameError::ReadFailed {
            path: directory.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && !is_hidden_file(&path) && Self::is_supported(&path) {
                files.push(path);
            } else {
                debug!("Skipping {:?}", path);
            }
        }

        files.sort();
        Ok(files)
    }
}

fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
