//! Splits an image into a 2x2 grid of quadrants, blurs the strips along the
//! internal seams and stitches the quadrants back together.

pub mod blurring;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod raster_io;
pub mod shared;
pub mod tiling;

pub use error::{Result, SeamBlendError};
pub use pipeline::seam_blend_use_case::{SeamBlendOutcome, SeamBlendUseCase};
pub use shared::config::SeamBlendConfig;
