use crate::blurring::domain::strip_blurrer::StripBlurrer;
use crate::error::{Result, SeamBlendError};
use crate::shared::constants::RGBA_CHANNELS;
use crate::shared::raster::Raster;

use super::gaussian;

/// Strip blurrer backed by `image::imageops::blur`.
///
/// Goes through an `RgbaImage`, so only 4-channel strips are accepted.
pub struct ImageOpsStripBlurrer {
    sigma: f32,
}

impl ImageOpsStripBlurrer {
    pub fn new(radius: u32) -> Self {
        Self {
            sigma: gaussian::sigma_for_radius(radius),
        }
    }
}

impl StripBlurrer for ImageOpsStripBlurrer {
    fn blur(&self, strip: &mut Raster) -> Result<()> {
        if strip.channels() != RGBA_CHANNELS {
            return Err(SeamBlendError::Blur(format!(
                "imageops backend needs RGBA, got {} channels",
                strip.channels()
            )));
        }
        let img = image::RgbaImage::from_raw(strip.width(), strip.height(), strip.data().to_vec())
            .ok_or_else(|| SeamBlendError::Blur("strip buffer does not match its dimensions".into()))?;

        let blurred = image::imageops::blur(&img, self.sigma);
        if blurred.dimensions() != (strip.width(), strip.height()) {
            return Err(SeamBlendError::Blur(format!(
                "blur changed strip size to {:?}",
                blurred.dimensions()
            )));
        }
        strip.data_mut().copy_from_slice(blurred.as_raw());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_spreads_bright_column() {
        let mut strip = Raster::filled(20, 10, [0, 0, 0, 255]);
        for y in 0..10 {
            let i = ((y * 20 + 10) * 4) as usize;
            strip.data_mut()[i..i + 3].copy_from_slice(&[255, 255, 255]);
        }

        ImageOpsStripBlurrer::new(3).blur(&mut strip).unwrap();

        assert!(strip.pixel(10, 5)[0] < 255);
        assert!(strip.pixel(11, 5)[0] > 0);
    }

    #[test]
    fn test_rejects_non_rgba_strip() {
        let mut strip = Raster::new(vec![0; 4 * 4 * 3], 4, 4, 3);
        let err = ImageOpsStripBlurrer::new(3).blur(&mut strip).unwrap_err();
        assert!(matches!(err, SeamBlendError::Blur(_)));
    }

    #[test]
    fn test_keeps_dimensions() {
        let mut strip = Raster::filled(5, 40, [10, 20, 30, 255]);
        ImageOpsStripBlurrer::new(10).blur(&mut strip).unwrap();
        assert_eq!((strip.width(), strip.height()), (5, 40));
    }
}
