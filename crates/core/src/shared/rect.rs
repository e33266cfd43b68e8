use std::fmt;

/// Axis-aligned rectangle in source-image pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> u64 {
        self.left as u64 + self.width as u64
    }

    pub fn bottom(&self) -> u64 {
        self.top as u64 + self.height as u64
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True when the rectangle is non-empty and lies inside a
    /// `width x height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        !self.is_empty() && self.right() <= width as u64 && self.bottom() <= height as u64
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && (x as u64) < self.right() && y >= self.top && (y as u64) < self.bottom()
    }

    #[cfg(test)]
    pub(crate) fn intersection_area(&self, other: &Rect) -> u64 {
        let ix1 = self.left.max(other.left) as u64;
        let iy1 = self.top.max(other.top) as u64;
        let ix2 = self.right().min(other.right());
        let iy2 = self.bottom().min(other.bottom());
        ix2.saturating_sub(ix1) * iy2.saturating_sub(iy1)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}+{}+{}",
            self.width, self.height, self.left, self.top
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_edges_and_area() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.area(), 1200);
    }

    #[test]
    fn test_display_uses_geometry_notation() {
        assert_eq!(Rect::new(5, 6, 7, 8).to_string(), "7x8+5+6");
    }

    // ── Bounds ───────────────────────────────────────────────────────

    #[rstest]
    #[case::exact_fit(Rect::new(0, 0, 100, 100), true)]
    #[case::inner(Rect::new(10, 10, 20, 20), true)]
    #[case::overflow_right(Rect::new(50, 0, 51, 10), false)]
    #[case::overflow_bottom(Rect::new(0, 90, 10, 11), false)]
    #[case::zero_width(Rect::new(0, 0, 0, 10), false)]
    #[case::zero_height(Rect::new(0, 0, 10, 0), false)]
    #[case::far_outside(Rect::new(u32::MAX, 0, 1, 1), false)]
    fn test_fits_within(#[case] rect: Rect, #[case] expected: bool) {
        assert_eq!(rect.fits_within(100, 100), expected);
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains(10, 10));
        assert!(r.contains(14, 14));
        assert!(!r.contains(15, 14));
        assert!(!r.contains(14, 15));
        assert!(!r.contains(9, 10));
    }

    // ── Intersection ─────────────────────────────────────────────────

    #[test]
    fn test_intersection_partial_overlap() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 0, 100, 100);
        assert_eq!(a.intersection_area(&b), 5000);
    }

    #[test]
    fn test_intersection_touching_edges_is_zero() {
        let a = Rect::new(0, 0, 50, 50);
        let b = Rect::new(50, 0, 50, 50);
        assert_eq!(a.intersection_area(&b), 0);
    }

    #[test]
    fn test_intersection_disjoint_is_zero() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(100, 100, 10, 10);
        assert_eq!(a.intersection_area(&b), 0);
    }
}
