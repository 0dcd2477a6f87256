use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::encoders::types::OutputFormat;
use crate::error::{EncodeError, Result};

static NEXT_SLOT: AtomicU64 = AtomicU64::new(0);

/// Temporary file an encoder writes into before the bytes are read back
///
/// Each invocation claims its own slot. The file is removed when the slot is
/// dropped, whether encoding succeeded, failed, or was never attempted.
#[derive(Debug)]
pub struct StagingSlot {
    path: PathBuf,
}

impl StagingSlot {
    /// Claim a fresh slot for `format` inside `directory`
    pub fn claim<P: AsRef<Path>>(directory: P, format: OutputFormat) -> Result<Self> {
        let directory = directory.as_ref();
        std::fs::create_dir_all(directory).map_err(|e| EncodeError::StagingFailed {
            path: directory.display().to_string(),
            reason: e.to_string(),
        })?;

        let slot = NEXT_SLOT.fetch_add(1, Ordering::Relaxed);
        let file_name = format!("animation-{}-{}.{}", std::process::id(), slot, format.extension());
        let path = directory.join(file_name);

        debug!("Claimed staging slot {:?}", path);
        Ok(Self { path })
    }

    /// Location the encoder should write to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the finished artifact back into memory and release the slot
    pub fn read_back(self) -> Result<Vec<u8>> {
        let bytes = std::fs::read(&self.path).map_err(|e| EncodeError::StagingFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        if bytes.is_empty() {
            return Err(EncodeError::EncodingFailed {
                reason: "encoder produced an empty file".to_string(),
            }
            .into());
        }

        Ok(bytes)
    }
}

impl Drop for StagingSlot {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!("Released staging slot {:?}", self.path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove staging file {:?}: {}", self.path, e),
        }
    }
}
