//! Per-frame water-level estimation from a striped gauge below a fiducial
//! marker.
//!
//! The marker's known physical size and elevation give a meter-to-pixel
//! scale; the stripes painted below it have a known physical height. One call
//! to [`estimate_water_level`] undoes the marker tilt, crops the stripe band,
//! reduces it to a one-dimensional brightness profile and counts the stripes
//! still visible above the waterline.
//!
//! The estimator holds no state between calls. Independent frames (one per
//! camera, or one per marker) can be processed in parallel on separate
//! buffers with no coordination.

pub mod estimator;

pub use estimator::{
    estimate_from_corners, estimate_water_level, EstimateError, EstimatorParams,
    GaugeCalibration, WaterLevel,
};
