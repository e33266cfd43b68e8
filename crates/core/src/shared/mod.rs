pub mod config;
pub mod constants;
pub mod raster;
pub mod rect;
