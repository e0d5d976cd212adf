use serde::{Deserialize, Serialize};

/// Configuration for the water-level estimator.
///
/// These constants are empirical and depend on lighting and stripe
/// contrast; the defaults were tuned on the reference rig.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimatorParams {
    /// Binarization cut on the 0..=255 intensity scale. Pixels strictly
    /// above it count as white.
    pub intensity_threshold: u8,
    /// Minimum fraction of white columns for a row to classify as white.
    pub row_white_fraction: f32,
    /// Relative tolerance when matching a run of rows against the previous
    /// stripe height. A run within `run_tolerance * previous_height` rows is
    /// accepted as one stripe.
    pub run_tolerance: f32,
}

/// Physical rig constants for one marker-and-gauge installation.
///
/// Typically deserialized from the rig's configuration file and combined
/// with per-frame detector output by
/// [`estimate_from_corners`](crate::estimate_from_corners).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GaugeCalibration {
    /// Physical edge length of the square marker, in meters.
    pub marker_size_m: f64,
    /// Vertical distance from the marker center to the top of the stripe
    /// band, in meters.
    pub distance_to_stripes_m: f64,
    /// Elevation of the marker center above the reference datum, in meters.
    pub marker_height_m: f64,
    /// Physical height of one painted stripe, in meters.
    pub stripe_height_m: f64,
    /// Calibrated number of stripes under the marker.
    pub stripe_count: u32,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            intensity_threshold: 150,
            row_white_fraction: 0.45,
            run_tolerance: 0.3,
        }
    }
}
