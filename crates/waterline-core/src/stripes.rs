use serde::{Deserialize, Serialize};

use crate::{GeometryError, MarkerGeometry};

/// Calibration of the stripe band painted below a marker.
///
/// Physical values are fixed at construction. The pixel row where the band
/// starts depends on the marker's *current* corner positions, so it is
/// computed on demand from the marker passed in rather than cached; after a
/// rotation the caller simply queries it again with the rotated marker.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StripeGeometry {
    stripe_height_m: f64,
    stripe_start_m: f64,
    stripe_count: u32,
    stripe_pixel_height: i32,
    distance_to_stripes_m: f64,
    pixels_per_meter: f64,
}

impl StripeGeometry {
    /// Derive the stripe band calibration from a marker.
    ///
    /// `stripe_count` is the calibrated number of stripes under the marker,
    /// i.e. the submersion ceiling.
    pub fn new(
        marker: &MarkerGeometry,
        stripe_height_m: f64,
        stripe_count: u32,
    ) -> Result<Self, GeometryError> {
        if !stripe_height_m.is_finite() || stripe_height_m <= 0.0 {
            return Err(GeometryError::NonPositiveStripeHeight(stripe_height_m));
        }
        if stripe_count == 0 {
            return Err(GeometryError::ZeroStripeCount);
        }

        let pixels_per_meter = marker.pixels_per_meter();
        let stripe_pixel_height = (stripe_height_m * pixels_per_meter).round() as i32;
        if stripe_pixel_height < 1 {
            return Err(GeometryError::StripeBelowPixelScale {
                stripe_height_m,
                pixels_per_meter,
            });
        }

        Ok(Self {
            stripe_height_m,
            stripe_start_m: marker.marker_height_m() - marker.distance_to_stripes_m(),
            stripe_count,
            stripe_pixel_height,
            distance_to_stripes_m: marker.distance_to_stripes_m(),
            pixels_per_meter,
        })
    }

    #[inline]
    pub fn stripe_height_m(&self) -> f64 {
        self.stripe_height_m
    }

    /// Height of the topmost stripe above the datum.
    #[inline]
    pub fn stripe_start_m(&self) -> f64 {
        self.stripe_start_m
    }

    #[inline]
    pub fn stripe_count(&self) -> u32 {
        self.stripe_count
    }

    /// Expected height of one stripe in pixels.
    #[inline]
    pub fn stripe_pixel_height(&self) -> i32 {
        self.stripe_pixel_height
    }

    /// Pixel row where the stripe band starts, for the marker's current
    /// corner positions.
    #[inline]
    pub fn stripe_pixel_start(&self, marker: &MarkerGeometry) -> i32 {
        marker.center().y + (self.distance_to_stripes_m * self.pixels_per_meter).round() as i32
    }
}
