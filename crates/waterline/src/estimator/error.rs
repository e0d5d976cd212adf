use waterline_core::GeometryError;

/// Errors returned by the water-level estimator.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq)]
pub enum EstimateError {
    /// The cropped stripe band is empty: the stripe start row lies at or
    /// below the detected bottom of the gauge, or the band falls outside
    /// the frame.
    #[error("stripe band is empty after cropping")]
    EmptyStripeBand,
    /// A run of rows deviated too far from the previous stripe height while
    /// rows for further stripes remained; the signal does not match a clean
    /// stripe pattern.
    #[error("run of {actual} rows deviates too far from expected stripe height {expected}")]
    StripePatternMismatch { expected: i32, actual: i32 },
    /// Every calibrated stripe was accounted for, so no waterline can be
    /// resolved (full submersion or an ambiguous boundary).
    #[error("all {count} calibrated stripes visible or submerged; waterline not resolvable")]
    AllStripesSubmerged { count: u32 },
    /// The rig calibration was rejected while building the marker or stripe
    /// geometry, as reported by
    /// [`estimate_from_corners`](crate::estimate_from_corners).
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl EstimateError {
    /// Whether the frame was merely indeterminate, as opposed to the inputs
    /// being invalid. Indeterminate frames are expected in operation; the
    /// caller typically skips the frame or holds the last known level.
    pub fn is_indeterminate(&self) -> bool {
        !matches!(self, Self::Geometry(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indeterminate_vs_invalid_input() {
        assert!(EstimateError::EmptyStripeBand.is_indeterminate());
        assert!(EstimateError::AllStripesSubmerged { count: 5 }.is_indeterminate());
        assert!(!EstimateError::Geometry(GeometryError::ZeroStripeCount).is_indeterminate());
    }
}
