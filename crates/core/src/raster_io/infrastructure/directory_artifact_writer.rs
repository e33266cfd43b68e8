use std::fs;
use std::path::PathBuf;

use crate::error::{Result, SeamBlendError};
use crate::raster_io::domain::artifact_writer::ArtifactWriter;

/// Writes artifacts as files inside one output directory.
///
/// The directory is created on first write, so a run that fails early
/// leaves nothing behind.
pub struct DirectoryArtifactWriter {
    root: PathBuf,
}

impl DirectoryArtifactWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArtifactWriter for DirectoryArtifactWriter {
    fn write(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.root).map_err(|source| SeamBlendError::Persistence {
            path: self.root.clone(),
            source,
        })?;
        let path = self.root.join(name);
        fs::write(&path, bytes).map_err(|source| SeamBlendError::Persistence {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
