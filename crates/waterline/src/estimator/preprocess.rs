use image::RgbImage;
use waterline_core::GrayImage;

/// Collapse an RGB frame to single-channel intensity using the BT.601 luma
/// weights.
pub fn grayscale(frame: &RgbImage) -> GrayImage {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let mut out = GrayImage::new(width, height);
    for (dst, px) in out.data.iter_mut().zip(frame.pixels()) {
        let [r, g, b] = px.0;
        let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
        *dst = luma.round().min(255.0) as u8;
    }
    out
}

/// Normalised 5-tap Gaussian filter `[1, 4, 6, 4, 1] / 16`.
const GAUSSIAN_5TAP: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// 5x5 Gaussian smoothing as two separable passes with clamp-to-edge
/// borders.
pub fn gaussian_blur_5x5(src: &GrayImage) -> GrayImage {
    let width = src.width as i32;
    let height = src.height as i32;

    let mut horizontal = vec![0f32; src.data.len()];
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0f32;
            for (k, tap) in GAUSSIAN_5TAP.iter().enumerate() {
                let sx = (x + k as i32 - 2).clamp(0, width - 1);
                acc += tap * src.data[(y * width + sx) as usize] as f32;
            }
            horizontal[(y * width + x) as usize] = acc;
        }
    }

    let mut out = GrayImage::new(src.width, src.height);
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0f32;
            for (k, tap) in GAUSSIAN_5TAP.iter().enumerate() {
                let sy = (y + k as i32 - 2).clamp(0, height - 1);
                acc += tap * horizontal[(sy * width + x) as usize];
            }
            out.data[(y * width + x) as usize] = acc.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn grayscale_uses_luma_weights() {
        let mut frame = RgbImage::new(2, 1);
        frame.put_pixel(0, 0, Rgb([255, 255, 255]));
        frame.put_pixel(1, 0, Rgb([255, 0, 0]));
        let gray = grayscale(&frame);
        assert_eq!(gray.get(0, 0), 255);
        assert_eq!(gray.get(1, 0), 76); // 0.299 * 255
    }

    #[test]
    fn blur_preserves_constant_image() {
        let mut img = GrayImage::new(10, 7);
        img.data.fill(200);
        let blurred = gaussian_blur_5x5(&img);
        assert!(blurred.data.iter().all(|&v| v == 200));
    }

    #[test]
    fn blur_keeps_a_sharp_band_edge_within_threshold() {
        // White rows above black rows: the smoothed edge must still cross
        // the default binarization cut at the original boundary.
        let mut img = GrayImage::new(4, 10);
        for y in 0..5usize {
            for x in 0..4usize {
                img.data[y * 4 + x] = 255;
            }
        }
        let blurred = gaussian_blur_5x5(&img);
        assert!(blurred.get(0, 4) > 150); // last white row: 11/16 of 255
        assert!(blurred.get(0, 5) <= 150); // first black row: 5/16 of 255
    }
}
