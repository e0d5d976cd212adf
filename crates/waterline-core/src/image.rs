/// Borrowed view of a row-major 8-bit grayscale buffer, `len = w*h`.
#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8],
}

/// Owned row-major 8-bit grayscale buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayImage {
    /// All-zero image of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height],
        }
    }

    #[inline]
    pub fn view(&self) -> GrayImageView<'_> {
        GrayImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    /// Pixel value with zero padding outside the image bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> u8 {
        get_gray(&self.view(), x, y)
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    /// Copy of the rectangle `[left, right) x [top, bottom)`, clamped to the
    /// image bounds. Returns `None` when the clamped rectangle is empty.
    pub fn crop(&self, left: i32, top: i32, right: i32, bottom: i32) -> Option<GrayImage> {
        let left = left.clamp(0, self.width as i32) as usize;
        let right = right.clamp(0, self.width as i32) as usize;
        let top = top.clamp(0, self.height as i32) as usize;
        let bottom = bottom.clamp(0, self.height as i32) as usize;
        if right <= left || bottom <= top {
            return None;
        }

        let width = right - left;
        let height = bottom - top;
        let mut data = Vec::with_capacity(width * height);
        for y in top..bottom {
            data.extend_from_slice(&self.row(y)[left..right]);
        }
        Some(GrayImage {
            width,
            height,
            data,
        })
    }
}

#[inline]
fn get_gray(src: &GrayImageView<'_>, x: i32, y: i32) -> u8 {
    if x < 0 || y < 0 || x >= src.width as i32 || y >= src.height as i32 {
        return 0;
    }
    src.data[y as usize * src.width + x as usize]
}

#[inline]
pub fn sample_bilinear(src: &GrayImageView<'_>, x: f32, y: f32) -> f32 {
    let x0 = x.floor() as i32;
    let y0 = y.floor() as i32;
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let p00 = get_gray(src, x0, y0) as f32;
    let p10 = get_gray(src, x0 + 1, y0) as f32;
    let p01 = get_gray(src, x0, y0 + 1) as f32;
    let p11 = get_gray(src, x0 + 1, y0 + 1) as f32;

    let a = p00 + fx * (p10 - p00);
    let b = p01 + fx * (p11 - p01);
    a + fy * (b - a)
}

#[inline]
pub fn sample_bilinear_u8(src: &GrayImageView<'_>, x: f32, y: f32) -> u8 {
    sample_bilinear(src, x, y).clamp(0.0, 255.0).round() as u8
}
