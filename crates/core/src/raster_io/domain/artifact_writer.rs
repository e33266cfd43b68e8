use std::path::PathBuf;

use crate::error::Result;

/// Durable storage for encoded pipeline artifacts.
pub trait ArtifactWriter: Send + Sync {
    /// Stores `bytes` under `name` and returns where they ended up.
    fn write(&self, name: &str, bytes: &[u8]) -> Result<PathBuf>;
}
