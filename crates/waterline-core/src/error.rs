/// Rejected calibration inputs.
///
/// All geometry constructors validate their physical constants up front so
/// that the pipeline never computes with garbage scale factors.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    #[error("marker size must be positive, got {0} m")]
    NonPositiveMarkerSize(f64),
    #[error("distance from marker center to the first stripe must be positive, got {0} m")]
    NonPositiveStripeDistance(f64),
    #[error("marker center height must be positive, got {0} m")]
    NonPositiveMarkerHeight(f64),
    #[error("stripe height must be positive, got {0} m")]
    NonPositiveStripeHeight(f64),
    #[error("calibrated stripe count must be at least 1")]
    ZeroStripeCount,
    #[error("marker left edge has zero pixel length; cannot derive scale")]
    DegenerateLeftEdge,
    #[error("stripe height {stripe_height_m} m is below one pixel at {pixels_per_meter:.2} px/m")]
    StripeBelowPixelScale {
        stripe_height_m: f64,
        pixels_per_meter: f64,
    },
}
