use super::BBox;

/// Owned single-channel 8-bit raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImage {
    /// Create an image filled with the given intensity
    pub fn new(width: usize, height: usize, fill: u8) -> Self {
        Self {
            width,
            height,
            data: vec![fill; width * height],
        }
    }

    /// Wrap an existing row-major pixel buffer
    ///
    /// # Panics
    /// If the buffer length does not match `width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), width * height, "pixel buffer length mismatch");
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// True if the image has no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel at (x, y); out-of-bounds reads return 0
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[y * self.width + x]
    }

    /// Set pixel at (x, y); out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.data[y * self.width + x] = value;
    }

    /// Pixel at (x, y) with coordinates clamped into the image extent
    ///
    /// Replicates the border pixel for reads outside the image, which is the
    /// border policy the filter stage relies on.
    pub fn get_replicate(&self, x: isize, y: isize) -> u8 {
        let cx = x.clamp(0, self.width as isize - 1) as usize;
        let cy = y.clamp(0, self.height as isize - 1) as usize;
        self.data[cy * self.width + cx]
    }

    /// Raw row-major pixel buffer
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Copy the sub-raster bounded by `bbox` into a new image
    ///
    /// The result owns its pixels, so the source may be dropped or mutated
    /// afterwards. The box must lie fully inside the image extent.
    pub fn crop(&self, bbox: &BBox) -> GrayImage {
        debug_assert!(bbox.right() <= self.width && bbox.bottom() <= self.height);
        let mut data = Vec::with_capacity(bbox.w * bbox.h);
        for y in bbox.y..bbox.bottom() {
            data.extend_from_slice(&self.data[y * self.width + bbox.x..y * self.width + bbox.right()]);
        }
        GrayImage {
            width: bbox.w,
            height: bbox.h,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_image() {
        let mut img = GrayImage::new(8, 4, 255);
        assert_eq!(img.width(), 8);
        assert_eq!(img.height(), 4);
        assert_eq!(img.get(3, 2), 255);

        img.set(3, 2, 17);
        assert_eq!(img.get(3, 2), 17);

        img.set(100, 100, 1); // out of bounds, should not panic
        assert_eq!(img.get(100, 100), 0);
    }

    #[test]
    fn test_from_raw() {
        let img = GrayImage::from_raw(2, 2, vec![1, 2, 3, 4]);
        assert_eq!(img.get(1, 1), 4);
    }

    #[test]
    #[should_panic(expected = "pixel buffer length mismatch")]
    fn test_from_raw_length_mismatch() {
        GrayImage::from_raw(2, 2, vec![0; 5]);
    }

    #[test]
    fn test_replicate_border() {
        let mut img = GrayImage::new(3, 3, 0);
        img.set(0, 0, 10);
        img.set(2, 2, 20);
        assert_eq!(img.get_replicate(-5, -5), 10);
        assert_eq!(img.get_replicate(7, 7), 20);
    }

    #[test]
    fn test_crop_is_a_copy() {
        let mut img = GrayImage::new(10, 10, 0);
        img.set(4, 4, 99);
        let crop = img.crop(&BBox::new(3, 3, 4, 4));
        assert_eq!(crop.width(), 4);
        assert_eq!(crop.height(), 4);
        assert_eq!(crop.get(1, 1), 99);

        img.set(4, 4, 0); // mutating the source must not affect the crop
        assert_eq!(crop.get(1, 1), 99);
    }
}
