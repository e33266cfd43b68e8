use std::path::PathBuf;

use thiserror::Error;

use crate::shared::rect::Rect;

pub type Result<T> = std::result::Result<T, SeamBlendError>;

#[derive(Error, Debug)]
pub enum SeamBlendError {
    #[error("failed to decode image: {0}")]
    Decode(String),
    #[error("image is {width}x{height}, both dimensions must be at least {min}px")]
    TooSmall { width: u32, height: u32, min: u32 },
    #[error("region {rect} does not fit inside a {width}x{height} image")]
    InvalidRegion { rect: Rect, width: u32, height: u32 },
    #[error("expected {expected} channels, got {actual}")]
    ChannelMismatch { expected: u8, actual: u8 },
    #[error("failed to encode image: {0}")]
    Encode(String),
    #[error("failed to write {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("strip blur failed: {0}")]
    Blur(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("worker failed: {0}")]
    Worker(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_small_message_names_dimensions() {
        let err = SeamBlendError::TooSmall {
            width: 50,
            height: 40,
            min: 100,
        };
        assert_eq!(
            err.to_string(),
            "image is 50x40, both dimensions must be at least 100px"
        );
    }

    #[test]
    fn test_invalid_region_message() {
        let err = SeamBlendError::InvalidRegion {
            rect: Rect::new(90, 0, 20, 10),
            width: 100,
            height: 100,
        };
        assert_eq!(
            err.to_string(),
            "region 20x10+90+0 does not fit inside a 100x100 image"
        );
    }

    #[test]
    fn test_persistence_keeps_io_source() {
        use std::error::Error as _;
        let err = SeamBlendError::Persistence {
            path: PathBuf::from("out/1.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("failed to write out/1.png"));
    }
}
