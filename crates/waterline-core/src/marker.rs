use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::{FrameRotation, GeometryError, Quad};

/// Physical and pixel calibration of one detected marker.
///
/// The marker has a known physical edge length and a known elevation above
/// the reference datum; together with the detected corner pixels this yields
/// the meter-to-pixel scale for everything below it. Values are immutable:
/// [`MarkerGeometry::rotated`] produces a new geometry with a freshly
/// computed centroid, so derived fields can never go stale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerGeometry {
    corners: Quad,
    marker_size_m: f64,
    distance_to_stripes_m: f64,
    marker_height_m: f64,
    pixels_per_meter: f64,
    center: Point2<i32>,
}

impl MarkerGeometry {
    /// Calibrate from detected corners and physical constants.
    ///
    /// The scale factor is the pixel length of the left edge divided by the
    /// marker's physical edge length. Corner *ordering* is the detector's
    /// contract and is not validated; the physical constants are.
    pub fn new(
        corners: Quad,
        marker_size_m: f64,
        distance_to_stripes_m: f64,
        marker_height_m: f64,
    ) -> Result<Self, GeometryError> {
        if !marker_size_m.is_finite() || marker_size_m <= 0.0 {
            return Err(GeometryError::NonPositiveMarkerSize(marker_size_m));
        }
        if !distance_to_stripes_m.is_finite() || distance_to_stripes_m <= 0.0 {
            return Err(GeometryError::NonPositiveStripeDistance(distance_to_stripes_m));
        }
        if !marker_height_m.is_finite() || marker_height_m <= 0.0 {
            return Err(GeometryError::NonPositiveMarkerHeight(marker_height_m));
        }

        let edge = corners.left_edge_len();
        if edge <= 0.0 {
            return Err(GeometryError::DegenerateLeftEdge);
        }

        Ok(Self {
            corners,
            marker_size_m,
            distance_to_stripes_m,
            marker_height_m,
            pixels_per_meter: edge / marker_size_m,
            center: corners.centroid(),
        })
    }

    #[inline]
    pub fn corners(&self) -> &Quad {
        &self.corners
    }

    /// Centroid of the current corners in pixels.
    #[inline]
    pub fn center(&self) -> Point2<i32> {
        self.center
    }

    #[inline]
    pub fn pixels_per_meter(&self) -> f64 {
        self.pixels_per_meter
    }

    #[inline]
    pub fn marker_height_m(&self) -> f64 {
        self.marker_height_m
    }

    #[inline]
    pub fn distance_to_stripes_m(&self) -> f64 {
        self.distance_to_stripes_m
    }

    /// Geometry after mapping the corners through a frame rotation.
    ///
    /// The centroid is recomputed from the mapped corners; the scale factor
    /// is kept, since a rotation preserves pixel lengths.
    pub fn rotated(&self, rotation: &FrameRotation) -> Self {
        let corners = Quad {
            bottom_left: rotation.apply_pixel(self.corners.bottom_left),
            bottom_right: rotation.apply_pixel(self.corners.bottom_right),
            top_right: rotation.apply_pixel(self.corners.top_right),
            top_left: rotation.apply_pixel(self.corners.top_left),
        };
        Self {
            corners,
            center: corners.centroid(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_quad() -> Quad {
        Quad::from_flat([100, 200, 300, 200, 300, 100, 100, 100])
    }

    #[test]
    fn scale_from_left_edge() {
        let m = MarkerGeometry::new(reference_quad(), 1.0, 0.5, 2.0).unwrap();
        assert_eq!(m.pixels_per_meter(), 100.0);
        assert_eq!(m.center(), Point2::new(200, 150));
    }

    #[test]
    fn rejects_non_physical_constants() {
        let q = reference_quad();
        assert_eq!(
            MarkerGeometry::new(q, 0.0, 0.5, 2.0),
            Err(GeometryError::NonPositiveMarkerSize(0.0))
        );
        assert_eq!(
            MarkerGeometry::new(q, 1.0, -0.5, 2.0),
            Err(GeometryError::NonPositiveStripeDistance(-0.5))
        );
        assert_eq!(
            MarkerGeometry::new(q, 1.0, 0.5, 0.0),
            Err(GeometryError::NonPositiveMarkerHeight(0.0))
        );
    }

    #[test]
    fn rejects_degenerate_left_edge() {
        let q = Quad::from_flat([50, 80, 90, 80, 90, 80, 50, 80]);
        assert_eq!(
            MarkerGeometry::new(q, 1.0, 0.5, 2.0),
            Err(GeometryError::DegenerateLeftEdge)
        );
    }

    #[test]
    fn rotation_by_full_turn_keeps_center() {
        let m = MarkerGeometry::new(reference_quad(), 1.0, 0.5, 2.0).unwrap();
        let rot = FrameRotation::about_frame_center(360.0, 640, 480);
        let r = m.rotated(&rot);
        assert_eq!(r.center(), m.center());
        assert_eq!(r.pixels_per_meter(), m.pixels_per_meter());
    }

    #[test]
    fn rotation_recomputes_center_from_mapped_corners() {
        let m = MarkerGeometry::new(reference_quad(), 1.0, 0.5, 2.0).unwrap();
        let rot = FrameRotation::about(90.0, Point2::new(0.0, 0.0));
        let r = m.rotated(&rot);
        assert_eq!(r.center(), r.corners().centroid());
        assert_ne!(r.center(), m.center());
    }
}
