use crate::blurring::domain::strip_blurrer::StripBlurrer;
use crate::error::Result;
use crate::geometry::quadrant::Edge;
use crate::geometry::quadrant_plan::strip_for_edge;
use crate::shared::raster::Raster;
use crate::shared::rect::Rect;
use crate::tiling::{compositor, segmenter};

/// What happened to one edge of one tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EdgeOutcome {
    Blurred { edge: Edge, strip: Rect },
    Skipped { edge: Edge, reason: String },
}

impl EdgeOutcome {
    pub fn edge(&self) -> Edge {
        match self {
            EdgeOutcome::Blurred { edge, .. } | EdgeOutcome::Skipped { edge, .. } => *edge,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, EdgeOutcome::Skipped { .. })
    }
}

/// Softens the seam-facing edges of a tile.
///
/// Each edge's strip is cut out, blurred on its own and pasted back, so
/// pixels outside the strips are never touched. Edges are processed in the
/// order given; at a shared corner the later edge reads the earlier result.
pub struct SeamBlurrer {
    blurrer: Box<dyn StripBlurrer>,
    blur_offset: u32,
}

impl SeamBlurrer {
    pub fn new(blurrer: Box<dyn StripBlurrer>, blur_offset: u32) -> Self {
        Self {
            blurrer,
            blur_offset,
        }
    }

    /// Blurs every edge in `edges`. Failures are logged and reported as
    /// [`EdgeOutcome::Skipped`]; the tile keeps its original pixels there.
    pub fn blur_edges(&self, raster: &mut Raster, edges: &[Edge]) -> Vec<EdgeOutcome> {
        edges
            .iter()
            .map(|&edge| self.blur_edge(raster, edge))
            .collect()
    }

    fn blur_edge(&self, raster: &mut Raster, edge: Edge) -> EdgeOutcome {
        let Some(rect) = strip_for_edge(raster.width(), raster.height(), edge, self.blur_offset)
        else {
            log::warn!(
                "Edge blur skipped for {edge} edge of {}x{} tile: strip would be empty",
                raster.width(),
                raster.height()
            );
            return EdgeOutcome::Skipped {
                edge,
                reason: "empty strip".to_string(),
            };
        };

        match self.blur_strip(raster, rect) {
            Ok(()) => EdgeOutcome::Blurred {
                edge,
                strip: rect,
            },
            Err(e) => {
                log::warn!("Edge blur skipped for {edge} strip {rect}: {e}");
                EdgeOutcome::Skipped {
                    edge,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Blurs a copy and only pastes it back on success, so a failing
    /// backend leaves the tile untouched.
    fn blur_strip(&self, raster: &mut Raster, rect: Rect) -> Result<()> {
        let mut strip = segmenter::extract(raster, rect)?;
        self.blurrer.blur(&mut strip)?;
        compositor::paste(raster, &strip, rect.left, rect.top)
    }
}
