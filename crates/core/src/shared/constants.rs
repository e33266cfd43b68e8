/// Smallest accepted width or height of a source image, in pixels.
pub const DEFAULT_MIN_DIMENSION: u32 = 100;

/// Maximum thickness of a seam blur strip, in pixels.
pub const DEFAULT_BLUR_OFFSET: u32 = 20;

/// Gaussian radius applied inside each blur strip (kernel size `2r + 1`).
pub const DEFAULT_BLUR_RADIUS: u32 = 10;

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_RESULT_FILENAME: &str = "result.png";

/// One worker per quadrant.
pub const DEFAULT_WORKER_THREADS: usize = 4;

pub const RGBA_CHANNELS: u8 = 4;

/// Opaque white, the compositor's canvas colour.
pub const CANVAS_FILL: [u8; 4] = [255, 255, 255, 255];
