use crate::error::Result;
use crate::shared::raster::Raster;

/// Domain interface for blurring a whole strip raster in place.
///
/// Implementations must keep the raster's dimensions and only read pixels
/// inside it. They are shared across quadrant workers, hence `Sync`.
pub trait StripBlurrer: Send + Sync {
    fn blur(&self, strip: &mut Raster) -> Result<()>;
}
