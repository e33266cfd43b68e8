use crate::blurring::domain::strip_blurrer::StripBlurrer;
use crate::error::Result;
use crate::shared::constants::DEFAULT_BLUR_RADIUS;
use crate::shared::raster::Raster;

use super::gaussian;

/// CPU strip blurrer using a precomputed separable Gaussian kernel.
pub struct GaussianStripBlurrer {
    kernel: Vec<f32>,
}

impl GaussianStripBlurrer {
    pub fn new(radius: u32) -> Self {
        Self {
            kernel: gaussian::gaussian_kernel_1d(gaussian::kernel_size_for_radius(radius)),
        }
    }
}

impl Default for GaussianStripBlurrer {
    fn default() -> Self {
        Self::new(DEFAULT_BLUR_RADIUS)
    }
}

impl StripBlurrer for GaussianStripBlurrer {
    fn blur(&self, strip: &mut Raster) -> Result<()> {
        let width = strip.width() as usize;
        let height = strip.height() as usize;
        let channels = strip.channels() as usize;
        gaussian::separable_blur(strip.data_mut(), width, height, channels, &self.kernel);
        Ok(())
    }
}
