use waterline_core::GrayImage;

/// Binarize: pixels strictly above `threshold` become 255, the rest 0.
pub fn binarize(src: &GrayImage, threshold: u8) -> GrayImage {
    let mut out = src.clone();
    for v in &mut out.data {
        *v = if *v > threshold { 255 } else { 0 };
    }
    out
}

/// Collapse a binarized band into one label per row.
///
/// A row whose fraction of white columns reaches `min_white_fraction` labels
/// as 255, otherwise 0. The 2-D stripe pattern becomes a 1-D signal the
/// run-length counter can scan, with per-row voting absorbing local noise.
pub fn row_profile(bin: &GrayImage, min_white_fraction: f32) -> Vec<u8> {
    let needed = bin.width as f32 * min_white_fraction;
    (0..bin.height)
        .map(|y| {
            let white = bin.row(y).iter().filter(|&&v| v == 255).count();
            if white as f32 >= needed {
                255
            } else {
                0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binarize_cut_is_strict() {
        let mut img = GrayImage::new(3, 1);
        img.data.copy_from_slice(&[149, 150, 151]);
        let bin = binarize(&img, 150);
        assert_eq!(bin.data, vec![0, 0, 255]);
    }

    #[test]
    fn row_vote_threshold_is_inclusive() {
        // 20 columns at 45% -> exactly 9 white columns reach the cut.
        let mut img = GrayImage::new(20, 2);
        for x in 0..9 {
            img.data[x] = 255; // row 0: 9 white
            img.data[20 + x] = 255;
        }
        img.data[20 + 8] = 0; // row 1: 8 white
        let profile = row_profile(&img, 0.45);
        assert_eq!(profile, vec![255, 0]);
    }

    #[test]
    fn profile_has_one_label_per_row() {
        let img = GrayImage::new(5, 7);
        assert_eq!(row_profile(&img, 0.45).len(), 7);
    }
}
