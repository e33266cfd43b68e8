pub mod artifact_writer;
pub mod raster_codec;
