use super::EstimateError;

/// Count visible stripes in a 1-D row profile by run-length matching.
///
/// Scans maximal runs of equal labels from top to bottom. A run is accepted
/// as one stripe when its height stays within `tolerance` (relative) of the
/// previously accepted stripe height, which starts at `expected_height` and
/// adapts as runs are accepted. When a run deviates and too few rows remain
/// past the last accepted stripe to hold another full one, the run is the
/// terminal partial stripe and counting ends; a deviation with room left
/// means the profile does not look like a stripe pattern at all.
pub fn count_stripes(
    profile: &[u8],
    expected_height: i32,
    tolerance: f32,
) -> Result<u32, EstimateError> {
    let rows = profile.len();
    let mut previous_height = i64::from(expected_height);
    let mut previous_end = 0i64;
    let mut count = 0u32;

    let mut i = 0usize;
    while i < rows {
        let run_start = i;
        let label = profile[i];
        while i < rows && profile[i] == label {
            i += 1;
        }
        let run_height = (i - run_start) as i64;

        if ((previous_height - run_height).abs() as f32)
            < previous_height as f32 * tolerance
        {
            previous_height = run_height;
            previous_end = i as i64;
            count += 1;
        } else if previous_end + previous_height > rows as i64 {
            // No room for another full stripe below the last accepted one:
            // this run is the final, partially submerged stripe.
            count += 1;
            break;
        } else {
            log::debug!(
                "run of {run_height} rows at row {run_start} deviates from expected {previous_height} with {} rows left",
                rows as i64 - previous_end
            );
            return Err(EstimateError::StripePatternMismatch {
                expected: previous_height as i32,
                actual: run_height as i32,
            });
        }
    }

    Ok(count)
}
