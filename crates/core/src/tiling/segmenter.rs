use ndarray::s;

use crate::error::{Result, SeamBlendError};
use crate::geometry::quadrant_plan::QuadrantPlan;
use crate::shared::raster::Raster;
use crate::shared::rect::Rect;
use crate::tiling::quadrant_tile::QuadrantTile;

/// Copies the pixels under `rect` into a new, independently owned raster.
pub fn extract(source: &Raster, rect: Rect) -> Result<Raster> {
    if !rect.fits_within(source.width(), source.height()) {
        return Err(SeamBlendError::InvalidRegion {
            rect,
            width: source.width(),
            height: source.height(),
        });
    }

    let (x0, y0) = (rect.left as usize, rect.top as usize);
    let (x1, y1) = (x0 + rect.width as usize, y0 + rect.height as usize);
    let view = source.as_ndarray();
    let data: Vec<u8> = view.slice(s![y0..y1, x0..x1, ..]).iter().copied().collect();

    Ok(Raster::new(data, rect.width, rect.height, source.channels()))
}

/// Extracts every tile of `plan` from `source`, in quadrant order.
pub fn segment(source: &Raster, plan: &QuadrantPlan) -> Result<Vec<QuadrantTile>> {
    plan.tiles()
        .iter()
        .map(|&(quadrant, rect)| Ok(QuadrantTile::new(quadrant, rect, extract(source, rect)?)))
        .collect()
}
