use crate::error::Result;
use crate::shared::raster::Raster;

/// Converts between encoded image bytes and RGBA rasters.
pub trait RasterCodec: Send + Sync {
    /// Decodes any supported format into a 4-channel raster.
    fn decode(&self, bytes: &[u8]) -> Result<Raster>;

    /// Encodes a raster in the single output format.
    fn encode(&self, raster: &Raster) -> Result<Vec<u8>>;
}
