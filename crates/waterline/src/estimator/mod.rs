//! The estimation pipeline.
//!
//! Fixed stage order: grayscale, tilt-correcting rotation (frame and marker
//! corners through the same affine), bottom-of-gauge scan, stripe-band crop,
//! Gaussian blur, binarization + row voting, run-length stripe counting.
//! Every stage is a pure transformation; the pipeline holds no state between
//! calls.

mod error;
mod params;
mod preprocess;
mod runs;
mod segment;

pub use error::EstimateError;
pub use params::{EstimatorParams, GaugeCalibration};

use image::RgbImage;
use serde::{Deserialize, Serialize};
use waterline_core::{FrameRotation, GrayImage, MarkerGeometry, Quad, StripeGeometry};

/// A resolved water level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaterLevel {
    /// Height of the waterline above the datum, in meters.
    pub meters: f64,
    /// Stripes counted above the waterline, including a terminal partial
    /// stripe.
    pub visible_stripes: u32,
}

/// Estimate the water level from a single frame.
///
/// `rotation_degrees` is the marker tilt reported by the fiducial detector;
/// the frame is rotated by `360 - rotation_degrees` about its own center so
/// the stripe band becomes horizontal. Returns an [`EstimateError`] marked
/// indeterminate when the frame does not yield a clean stripe pattern; the
/// caller decides whether to skip the frame or hold the last known level.
pub fn estimate_water_level(
    frame: &RgbImage,
    marker: &MarkerGeometry,
    stripes: &StripeGeometry,
    rotation_degrees: f64,
    params: &EstimatorParams,
) -> Result<WaterLevel, EstimateError> {
    let gray = preprocess::grayscale(frame);

    let rotation =
        FrameRotation::about_frame_center(360.0 - rotation_degrees, gray.width, gray.height);
    let rotated = rotation.warp(&gray.view());
    let marker = marker.rotated(&rotation);

    let image_bottom = bottom_of_gauge(&rotated, marker.center().x);
    let stripe_top = stripes.stripe_pixel_start(&marker);
    log::debug!(
        "marker center {:?}, stripe band rows {stripe_top}..{image_bottom}",
        (marker.center().x, marker.center().y)
    );

    let band = crop_stripe_band(&rotated, marker.corners(), stripe_top, image_bottom)
        .ok_or(EstimateError::EmptyStripeBand)?;

    let blurred = preprocess::gaussian_blur_5x5(&band);
    let bin = segment::binarize(&blurred, params.intensity_threshold);
    let profile = segment::row_profile(&bin, params.row_white_fraction);

    let count = runs::count_stripes(&profile, stripes.stripe_pixel_height(), params.run_tolerance)?;
    log::debug!("{count} stripe(s) visible of {} calibrated", stripes.stripe_count());

    if count >= stripes.stripe_count() {
        return Err(EstimateError::AllStripesSubmerged { count });
    }

    Ok(WaterLevel {
        meters: stripes.stripe_start_m() - stripes.stripe_height_m() * f64::from(count),
        visible_stripes: count,
    })
}

/// One-call convenience for callers holding raw detector output: builds the
/// marker and stripe calibration from the flat corner layout
/// `[BLx, BLy, BRx, BRy, TRx, TRy, TLx, TLy]`, then runs
/// [`estimate_water_level`].
///
/// Calibration failures surface as [`EstimateError::Geometry`], which is not
/// indeterminate: the rig configuration is wrong, not the frame.
pub fn estimate_from_corners(
    frame: &RgbImage,
    corners: [i32; 8],
    calibration: &GaugeCalibration,
    rotation_degrees: f64,
    params: &EstimatorParams,
) -> Result<WaterLevel, EstimateError> {
    let marker = MarkerGeometry::new(
        Quad::from_flat(corners),
        calibration.marker_size_m,
        calibration.distance_to_stripes_m,
        calibration.marker_height_m,
    )?;
    let stripes =
        StripeGeometry::new(&marker, calibration.stripe_height_m, calibration.stripe_count)?;
    estimate_water_level(frame, &marker, &stripes, rotation_degrees, params)
}

/// Lowest visible extent of the gauge: scanning the column at the marker's
/// center x from the last row upward, the first non-zero pixel row. A fully
/// dark (or out-of-frame) column yields the frame's row count.
fn bottom_of_gauge(frame: &GrayImage, center_x: i32) -> i32 {
    for row in (0..frame.height as i32).rev() {
        if frame.get(center_x, row) != 0 {
            return row;
        }
    }
    frame.height as i32
}

/// Crop to the middle third between the marker's bottom corners and the rows
/// between the stripe start and the gauge bottom. The outer thirds are
/// dropped to avoid edge artifacts on the gauge.
fn crop_stripe_band(
    frame: &GrayImage,
    corners: &Quad,
    stripe_top: i32,
    image_bottom: i32,
) -> Option<GrayImage> {
    let width = corners.bottom_right.x - corners.bottom_left.x;
    let left = corners.bottom_left.x + width / 3;
    let right = corners.bottom_left.x + (width / 3) * 2;
    frame.crop(left, stripe_top, right, image_bottom)
}
