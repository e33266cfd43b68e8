use crate::geometry::quadrant::Quadrant;
use crate::shared::raster::Raster;
use crate::shared::rect::Rect;

/// A quadrant's pixels together with where they came from in the source.
///
/// The blurrer mutates the pixels in place; dimensions never change, so the
/// compositor can paste the raster straight back at `rect`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadrantTile {
    quadrant: Quadrant,
    rect: Rect,
    raster: Raster,
}

impl QuadrantTile {
    pub fn new(quadrant: Quadrant, rect: Rect, raster: Raster) -> Self {
        debug_assert_eq!(
            (raster.width(), raster.height()),
            (rect.width, rect.height),
            "tile raster must match its rect"
        );
        Self {
            quadrant,
            rect,
            raster,
        }
    }

    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn raster_mut(&mut self) -> &mut Raster {
        &mut self.raster
    }
}
