use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::blurring::infrastructure::blurrer_factory::BlurBackend;
use crate::error::{Result, SeamBlendError};
use crate::geometry::quadrant::Quadrant;
use crate::shared::constants::{
    DEFAULT_BLUR_OFFSET, DEFAULT_BLUR_RADIUS, DEFAULT_MIN_DIMENSION, DEFAULT_OUTPUT_DIR,
    DEFAULT_RESULT_FILENAME, DEFAULT_WORKER_THREADS,
};

/// Tunables for one seam-blend run.
///
/// Every field has a default, so a JSON file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeamBlendConfig {
    pub min_dimension: u32,
    pub blur_offset: u32,
    pub blur_radius: u32,
    pub output_dir: PathBuf,
    pub result_filename: String,
    pub worker_threads: usize,
    pub blur_backend: BlurBackend,
}

impl Default for SeamBlendConfig {
    fn default() -> Self {
        Self {
            min_dimension: DEFAULT_MIN_DIMENSION,
            blur_offset: DEFAULT_BLUR_OFFSET,
            blur_radius: DEFAULT_BLUR_RADIUS,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            result_filename: DEFAULT_RESULT_FILENAME.to_string(),
            worker_threads: DEFAULT_WORKER_THREADS,
            blur_backend: BlurBackend::Gaussian,
        }
    }
}

impl SeamBlendConfig {
    /// Reads a JSON config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            SeamBlendError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SeamBlendError::Config(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SeamBlendError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_dimension < 2 {
            return Err(SeamBlendError::Config(format!(
                "min_dimension must be at least 2, got {}",
                self.min_dimension
            )));
        }
        if self.worker_threads == 0 {
            return Err(SeamBlendError::Config(
                "worker_threads must be at least 1".to_string(),
            ));
        }
        let name = self.result_filename.trim();
        if name.is_empty() {
            return Err(SeamBlendError::Config(
                "result_filename must not be empty".to_string(),
            ));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(SeamBlendError::Config(format!(
                "result_filename must be a bare file name, got '{name}'"
            )));
        }
        if Quadrant::ALL
            .iter()
            .any(|q| q.segment_filename() == self.result_filename)
        {
            return Err(SeamBlendError::Config(format!(
                "result_filename '{}' collides with a segment file",
                self.result_filename
            )));
        }
        Ok(())
    }

    pub fn result_path(&self) -> PathBuf {
        self.output_dir.join(&self.result_filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SeamBlendConfig::default();
        assert_eq!(config.min_dimension, 100);
        assert_eq!(config.blur_offset, 20);
        assert_eq!(config.blur_radius, 10);
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.result_filename, "result.png");
        assert_eq!(config.worker_threads, 4);
        assert_eq!(config.blur_backend, BlurBackend::Gaussian);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SeamBlendConfig::from_json(r#"{"blur_offset": 8}"#).unwrap();
        assert_eq!(config.blur_offset, 8);
        assert_eq!(config.blur_radius, 10);
        assert_eq!(config.result_filename, "result.png");
    }

    #[test]
    fn test_backend_is_lowercase_in_json() {
        let config = SeamBlendConfig::from_json(r#"{"blur_backend": "imageops"}"#).unwrap();
        assert_eq!(config.blur_backend, BlurBackend::ImageOps);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SeamBlendConfig {
            blur_radius: 3,
            ..SeamBlendConfig::default()
        };
        let back = SeamBlendConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = SeamBlendConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, SeamBlendError::Config(_)));
    }

    #[test]
    fn test_min_dimension_below_two_rejected() {
        let config = SeamBlendConfig {
            min_dimension: 1,
            ..SeamBlendConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = SeamBlendConfig {
            worker_threads: 0,
            ..SeamBlendConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_result_name_colliding_with_segment_rejected() {
        let config = SeamBlendConfig {
            result_filename: "3.png".to_string(),
            ..SeamBlendConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_result_name_with_separator_rejected() {
        let config = SeamBlendConfig {
            result_filename: "nested/result.png".to_string(),
            ..SeamBlendConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seamblend.json");
        fs::write(&path, r#"{"min_dimension": 64, "output_dir": "out"}"#).unwrap();
        let config = SeamBlendConfig::load(&path).unwrap();
        assert_eq!(config.min_dimension, 64);
        assert_eq!(config.result_path(), PathBuf::from("out").join("result.png"));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = SeamBlendConfig::load(Path::new("/nonexistent/seamblend.json")).unwrap_err();
        assert!(matches!(err, SeamBlendError::Config(_)));
    }
}
