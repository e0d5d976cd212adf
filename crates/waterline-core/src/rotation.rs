use nalgebra::{Matrix3, Point2, Vector3};

use crate::{sample_bilinear_u8, GrayImage, GrayImageView};

/// Planar rotation about a fixed pixel center, as a homogeneous 2D affine map.
///
/// A positive angle rotates counter-clockwise in the usual image convention
/// (y axis pointing down). Both the forward map and its inverse are built at
/// construction; the inverse is the rotation by the negated angle, so no
/// matrix inversion is needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameRotation {
    forward: Matrix3<f64>,
    inverse: Matrix3<f64>,
}

fn rotation_about(angle_degrees: f64, center: Point2<f64>) -> Matrix3<f64> {
    let theta = angle_degrees.to_radians();
    let a = theta.cos();
    let b = theta.sin();
    let (cx, cy) = (center.x, center.y);
    Matrix3::new(
        a,
        b,
        (1.0 - a) * cx - b * cy,
        -b,
        a,
        b * cx + (1.0 - a) * cy,
        0.0,
        0.0,
        1.0,
    )
}

impl FrameRotation {
    /// Rotation by `angle_degrees` about `center`.
    pub fn about(angle_degrees: f64, center: Point2<f64>) -> Self {
        Self {
            forward: rotation_about(angle_degrees, center),
            inverse: rotation_about(-angle_degrees, center),
        }
    }

    /// Rotation about the center pixel of a `width` x `height` frame.
    pub fn about_frame_center(angle_degrees: f64, width: usize, height: usize) -> Self {
        let cx = (width as i32 / 2 - 1) as f64;
        let cy = (height as i32 / 2 - 1) as f64;
        Self::about(angle_degrees, Point2::new(cx, cy))
    }

    /// Forward map of a point.
    #[inline]
    pub fn apply(&self, p: Point2<f64>) -> Point2<f64> {
        let v = self.forward * Vector3::new(p.x, p.y, 1.0);
        Point2::new(v[0], v[1])
    }

    /// Forward map of an integer pixel, rounded to the nearest pixel.
    #[inline]
    pub fn apply_pixel(&self, p: Point2<i32>) -> Point2<i32> {
        let q = self.apply(Point2::new(p.x as f64, p.y as f64));
        Point2::new(q.x.round() as i32, q.y.round() as i32)
    }

    /// Rotate a frame. Each destination pixel is sampled bilinearly at its
    /// inverse-mapped source position; samples outside the frame read zero.
    pub fn warp(&self, src: &GrayImageView<'_>) -> GrayImage {
        let mut out = GrayImage::new(src.width, src.height);
        for y in 0..src.height {
            for x in 0..src.width {
                let v = self.inverse * Vector3::new(x as f64, y as f64, 1.0);
                out.data[y * src.width + x] = sample_bilinear_u8(src, v[0] as f32, v[1] as f32);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_angle_is_identity_on_points() {
        let rot = FrameRotation::about(0.0, Point2::new(10.0, 20.0));
        let p = rot.apply(Point2::new(3.0, 4.0));
        assert_relative_eq!(p.x, 3.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn full_turn_is_identity_within_rounding() {
        let rot = FrameRotation::about(360.0, Point2::new(99.0, 99.0));
        let p = rot.apply(Point2::new(250.0, 40.0));
        assert_relative_eq!(p.x, 250.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 40.0, epsilon = 1e-9);
    }

    #[test]
    fn quarter_turn_about_origin() {
        // CCW with y down: (1, 0) -> (0, -1).
        let rot = FrameRotation::about(90.0, Point2::new(0.0, 0.0));
        let p = rot.apply(Point2::new(1.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn inverse_undoes_forward() {
        let rot = FrameRotation::about(37.5, Point2::new(55.0, 81.0));
        let p = Point2::new(120.0, 33.0);
        let q = rot.apply(p);
        let back = FrameRotation::about(-37.5, Point2::new(55.0, 81.0)).apply(q);
        assert_relative_eq!(back.x, p.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-9);
    }

    #[test]
    fn warp_by_zero_copies_the_frame() {
        let mut src = GrayImage::new(8, 6);
        for (i, v) in src.data.iter_mut().enumerate() {
            *v = (i * 7 % 251) as u8;
        }
        let rot = FrameRotation::about_frame_center(0.0, 8, 6);
        let out = rot.warp(&src.view());
        assert_eq!(out, src);
    }

    #[test]
    fn warp_quarter_turn_moves_pixels() {
        // 3x3 frame, center pixel (0, 0) per the (w/2 - 1, h/2 - 1) rule.
        let mut src = GrayImage::new(3, 3);
        src.data[2 * 3] = 200; // pixel (0, 2)
        let rot = FrameRotation::about_frame_center(90.0, 3, 3);
        let out = rot.warp(&src.view());
        // CCW quarter turn about (0, 0) with y down maps (0, 2) -> (2, 0).
        assert_eq!(out.get(2, 0), 200);
        assert_eq!(out.get(0, 2), 0);
    }
}
