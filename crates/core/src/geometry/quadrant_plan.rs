use crate::geometry::quadrant::{Edge, Quadrant};
use crate::shared::rect::Rect;

/// Placement of the four quadrants inside a `width x height` source.
///
/// Widths and heights on the right/bottom are derived by subtraction so the
/// tiles cover the source exactly; odd remainders go right and down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadrantPlan {
    width: u32,
    height: u32,
    tiles: [(Quadrant, Rect); 4],
}

impl QuadrantPlan {
    pub fn new(width: u32, height: u32) -> Self {
        let half_w = width / 2;
        let half_h = height / 2;
        let rest_w = width - half_w;
        let rest_h = height - half_h;
        Self {
            width,
            height,
            tiles: [
                (Quadrant::TopLeft, Rect::new(0, 0, half_w, half_h)),
                (Quadrant::TopRight, Rect::new(half_w, 0, rest_w, half_h)),
                (Quadrant::BottomRight, Rect::new(half_w, half_h, rest_w, rest_h)),
                (Quadrant::BottomLeft, Rect::new(0, half_h, half_w, rest_h)),
            ],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tiles in [`Quadrant::ALL`] order.
    pub fn tiles(&self) -> &[(Quadrant, Rect); 4] {
        &self.tiles
    }

    pub fn rect(&self, quadrant: Quadrant) -> Rect {
        self.tiles[quadrant.index() - 1].1
    }
}

/// Thickness of the blur strip along `edge` of a `width x height` tile:
/// at most `blur_offset`, and never more than a third of the tile.
pub fn strip_thickness(width: u32, height: u32, edge: Edge, blur_offset: u32) -> u32 {
    let extent = if edge.is_vertical() { width } else { height };
    blur_offset.min(extent / 3)
}

/// The strip flush against `edge`, or `None` when it would be empty.
pub fn strip_for_edge(width: u32, height: u32, edge: Edge, blur_offset: u32) -> Option<Rect> {
    let t = strip_thickness(width, height, edge, blur_offset);
    let rect = match edge {
        Edge::Left => Rect::new(0, 0, t, height),
        Edge::Right => Rect::new(width - t, 0, t, height),
        Edge::Top => Rect::new(0, 0, width, t),
        Edge::Bottom => Rect::new(0, height - t, width, t),
    };
    (!rect.is_empty()).then_some(rect)
}
