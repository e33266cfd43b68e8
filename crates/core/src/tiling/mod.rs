pub mod compositor;
pub mod quadrant_tile;
pub mod segmenter;
