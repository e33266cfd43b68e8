use std::io::Cursor;

use image::{ExtendedColorType, ImageEncoder};

use crate::error::{Result, SeamBlendError};
use crate::raster_io::domain::raster_codec::RasterCodec;
use crate::shared::constants::RGBA_CHANNELS;
use crate::shared::raster::Raster;

/// Decodes with the `image` crate's format sniffing and encodes PNG.
pub struct ImageCodec;

impl ImageCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterCodec for ImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Raster> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| SeamBlendError::Decode(e.to_string()))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(SeamBlendError::Decode(format!(
                "unreadable dimensions {width}x{height}"
            )));
        }
        Ok(Raster::new(img.into_raw(), width, height, RGBA_CHANNELS))
    }

    fn encode(&self, raster: &Raster) -> Result<Vec<u8>> {
        if raster.channels() != RGBA_CHANNELS {
            return Err(SeamBlendError::ChannelMismatch {
                expected: RGBA_CHANNELS,
                actual: raster.channels(),
            });
        }
        let mut out = Cursor::new(Vec::new());
        image::codecs::png::PngEncoder::new(&mut out)
            .write_image(
                raster.data(),
                raster.width(),
                raster.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| SeamBlendError::Encode(e.to_string()))?;
        Ok(out.into_inner())
    }
}
