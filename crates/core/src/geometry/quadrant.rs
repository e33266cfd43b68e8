use std::fmt;

use serde::Serialize;

/// One side of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Left and right strips are measured across the width.
    pub fn is_vertical(self) -> bool {
        matches!(self, Edge::Left | Edge::Right)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Left => write!(f, "left"),
            Edge::Right => write!(f, "right"),
            Edge::Top => write!(f, "top"),
            Edge::Bottom => write!(f, "bottom"),
        }
    }
}

/// The seam-facing edges of a quadrant, in the order they are blurred.
pub type EdgeSet = [Edge; 2];

/// One tile of the fixed 2x2 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Quadrant {
    /// Clockwise from the top-left; this order drives segment numbering.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomRight,
        Quadrant::BottomLeft,
    ];

    /// 1-based position in [`Quadrant::ALL`].
    pub fn index(self) -> usize {
        match self {
            Quadrant::TopLeft => 1,
            Quadrant::TopRight => 2,
            Quadrant::BottomRight => 3,
            Quadrant::BottomLeft => 4,
        }
    }

    /// Edges facing the other three quadrants. The outer image boundary is
    /// never blurred. When both strips cover a corner the second edge wins.
    pub fn seam_edges(self) -> EdgeSet {
        match self {
            Quadrant::TopLeft => [Edge::Right, Edge::Bottom],
            Quadrant::TopRight => [Edge::Left, Edge::Bottom],
            Quadrant::BottomRight => [Edge::Left, Edge::Top],
            Quadrant::BottomLeft => [Edge::Right, Edge::Top],
        }
    }

    pub fn segment_filename(self) -> String {
        format!("{}.png", self.index())
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quadrant::TopLeft => write!(f, "top-left"),
            Quadrant::TopRight => write!(f, "top-right"),
            Quadrant::BottomRight => write!(f, "bottom-right"),
            Quadrant::BottomLeft => write!(f, "bottom-left"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Quadrant::TopLeft, [Edge::Right, Edge::Bottom])]
    #[case(Quadrant::TopRight, [Edge::Left, Edge::Bottom])]
    #[case(Quadrant::BottomRight, [Edge::Left, Edge::Top])]
    #[case(Quadrant::BottomLeft, [Edge::Right, Edge::Top])]
    fn test_seam_edges_in_blur_order(#[case] quadrant: Quadrant, #[case] expected: EdgeSet) {
        assert_eq!(quadrant.seam_edges(), expected);
    }

    #[test]
    fn test_indices_follow_all_order() {
        for (i, q) in Quadrant::ALL.iter().enumerate() {
            assert_eq!(q.index(), i + 1);
        }
    }

    #[test]
    fn test_segment_filenames() {
        let names: Vec<_> = Quadrant::ALL.iter().map(|q| q.segment_filename()).collect();
        assert_eq!(names, ["1.png", "2.png", "3.png", "4.png"]);
    }

    #[test]
    fn test_each_quadrant_has_one_vertical_and_one_horizontal_seam() {
        for q in Quadrant::ALL {
            let [a, b] = q.seam_edges();
            assert!(a.is_vertical());
            assert!(!b.is_vertical());
        }
    }
}
