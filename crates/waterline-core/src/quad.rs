use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Detected marker corners in pixel coordinates.
///
/// The corner order is a contract with the upstream fiducial detector:
/// bottom-left, bottom-right, top-right, top-left. It is not validated here;
/// consumers assume it holds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    pub bottom_left: Point2<i32>,
    pub bottom_right: Point2<i32>,
    pub top_right: Point2<i32>,
    pub top_left: Point2<i32>,
}

impl Quad {
    /// Build from the flat detector layout
    /// `[BLx, BLy, BRx, BRy, TRx, TRy, TLx, TLy]`.
    pub fn from_flat(c: [i32; 8]) -> Self {
        Self {
            bottom_left: Point2::new(c[0], c[1]),
            bottom_right: Point2::new(c[2], c[3]),
            top_right: Point2::new(c[4], c[5]),
            top_left: Point2::new(c[6], c[7]),
        }
    }

    /// Corners in the fixed BL, BR, TR, TL order.
    pub fn points(&self) -> [Point2<i32>; 4] {
        [
            self.bottom_left,
            self.bottom_right,
            self.top_right,
            self.top_left,
        ]
    }

    /// Truncating integer mean of the four corners.
    pub fn centroid(&self) -> Point2<i32> {
        let [bl, br, tr, tl] = self.points();
        Point2::new(
            (bl.x + br.x + tr.x + tl.x) / 4,
            (bl.y + br.y + tr.y + tl.y) / 4,
        )
    }

    /// Pixel length of the left edge (bottom-left to top-left).
    pub fn left_edge_len(&self) -> f64 {
        let dx = (self.bottom_left.x - self.top_left.x) as f64;
        let dy = (self.bottom_left.y - self.top_left.y) as f64;
        dx.hypot(dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_layout_order() {
        let q = Quad::from_flat([100, 200, 300, 200, 300, 100, 100, 100]);
        assert_eq!(q.bottom_left, Point2::new(100, 200));
        assert_eq!(q.bottom_right, Point2::new(300, 200));
        assert_eq!(q.top_right, Point2::new(300, 100));
        assert_eq!(q.top_left, Point2::new(100, 100));
    }

    #[test]
    fn centroid_truncates() {
        let q = Quad::from_flat([0, 0, 1, 0, 1, 1, 0, 1]);
        // Mean is (0.5, 0.5); integer division truncates to (0, 0).
        assert_eq!(q.centroid(), Point2::new(0, 0));

        let q = Quad::from_flat([100, 200, 300, 200, 300, 100, 100, 100]);
        assert_eq!(q.centroid(), Point2::new(200, 150));
    }

    #[test]
    fn centroid_of_degenerate_quad() {
        let q = Quad::from_flat([7, 9, 7, 9, 7, 9, 7, 9]);
        assert_eq!(q.centroid(), Point2::new(7, 9));
    }

    #[test]
    fn left_edge_length() {
        let q = Quad::from_flat([100, 200, 300, 200, 300, 100, 100, 100]);
        assert_eq!(q.left_edge_len(), 100.0);

        let slanted = Quad::from_flat([3, 4, 10, 4, 10, 0, 0, 0]);
        assert_eq!(slanted.left_edge_len(), 5.0);
    }
}
