use crate::models::GrayImage;

/// Resize a grayscale image by a uniform scale factor, bilinear sampling
///
/// Output dimensions are `round(dim * scale)`, clamped to at least 1.
pub fn resize_uniform(img: &GrayImage, scale: f32) -> GrayImage {
    if img.is_empty() {
        return img.clone();
    }
    let dst_width = ((img.width() as f32 * scale).round() as usize).max(1);
    let dst_height = ((img.height() as f32 * scale).round() as usize).max(1);
    if dst_width == img.width() && dst_height == img.height() {
        return img.clone();
    }

    let x_ratio = img.width() as f32 / dst_width as f32;
    let y_ratio = img.height() as f32 / dst_height as f32;

    let mut data = Vec::with_capacity(dst_width * dst_height);
    for dy in 0..dst_height {
        // Center-aligned sampling: destination pixel centers map back into
        // source pixel centers.
        let sy = ((dy as f32 + 0.5) * y_ratio - 0.5).max(0.0);
        let y0 = sy.floor() as usize;
        let y1 = (y0 + 1).min(img.height() - 1);
        let fy = sy - y0 as f32;

        for dx in 0..dst_width {
            let sx = ((dx as f32 + 0.5) * x_ratio - 0.5).max(0.0);
            let x0 = sx.floor() as usize;
            let x1 = (x0 + 1).min(img.width() - 1);
            let fx = sx - x0 as f32;

            let top = img.get(x0, y0) as f32 * (1.0 - fx) + img.get(x1, y0) as f32 * fx;
            let bottom = img.get(x0, y1) as f32 * (1.0 - fx) + img.get(x1, y1) as f32 * fx;
            let value = top * (1.0 - fy) + bottom * fy;
            data.push(value.round().clamp(0.0, 255.0) as u8);
        }
    }

    GrayImage::from_raw(dst_width, dst_height, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_scale() {
        let mut img = GrayImage::new(16, 8, 100);
        img.set(3, 3, 7);
        let resized = resize_uniform(&img, 1.0);
        assert_eq!(resized, img);
    }

    #[test]
    fn test_empty_image_passes_through() {
        let img = GrayImage::new(0, 0, 0);
        let resized = resize_uniform(&img, 2.0);
        assert!(resized.is_empty());
    }

    #[test]
    fn test_downscale_dimensions() {
        let img = GrayImage::new(100, 40, 128);
        let resized = resize_uniform(&img, 0.5);
        assert_eq!(resized.width(), 50);
        assert_eq!(resized.height(), 20);
    }

    #[test]
    fn test_uniform_intensity_preserved() {
        let img = GrayImage::new(64, 32, 77);
        let resized = resize_uniform(&img, 0.37);
        assert!(resized.as_bytes().iter().all(|&p| p == 77));
    }

    #[test]
    fn test_upscale_keeps_structure() {
        let mut img = GrayImage::new(4, 4, 255);
        img.set(1, 1, 0);
        img.set(2, 1, 0);
        img.set(1, 2, 0);
        img.set(2, 2, 0);
        let resized = resize_uniform(&img, 4.0);
        assert_eq!(resized.width(), 16);
        // The dark center stays darker than the corners.
        assert!(resized.get(7, 7) < resized.get(0, 0));
    }
}
