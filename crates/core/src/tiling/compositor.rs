use ndarray::s;

use crate::error::{Result, SeamBlendError};
use crate::shared::constants::CANVAS_FILL;
use crate::shared::raster::Raster;
use crate::shared::rect::Rect;
use crate::tiling::quadrant_tile::QuadrantTile;

/// Overwrites the pixels of `canvas` at `(left, top)` with `patch`.
///
/// Straight copy, no alpha blending.
pub fn paste(canvas: &mut Raster, patch: &Raster, left: u32, top: u32) -> Result<()> {
    if patch.channels() != canvas.channels() {
        return Err(SeamBlendError::ChannelMismatch {
            expected: canvas.channels(),
            actual: patch.channels(),
        });
    }
    let rect = Rect::new(left, top, patch.width(), patch.height());
    if !rect.fits_within(canvas.width(), canvas.height()) {
        return Err(SeamBlendError::InvalidRegion {
            rect,
            width: canvas.width(),
            height: canvas.height(),
        });
    }

    let (x0, y0) = (left as usize, top as usize);
    let (x1, y1) = (x0 + patch.width() as usize, y0 + patch.height() as usize);
    canvas
        .as_ndarray_mut()
        .slice_mut(s![y0..y1, x0..x1, ..])
        .assign(&patch.as_ndarray());
    Ok(())
}

/// Builds a `width x height` opaque-white canvas and pastes every tile at
/// its planned offset.
pub fn compose(width: u32, height: u32, tiles: &[QuadrantTile]) -> Result<Raster> {
    let mut canvas = Raster::filled(width, height, CANVAS_FILL);
    for tile in tiles {
        let rect = tile.rect();
        paste(&mut canvas, tile.raster(), rect.left, rect.top)?;
    }
    Ok(canvas)
}
