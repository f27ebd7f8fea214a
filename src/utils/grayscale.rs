/// Convert RGB bytes to grayscale luminance
/// Y = 0.299*R + 0.587*G + 0.114*B
/// Uses fast integer arithmetic: Y = (76*R + 150*G + 29*B) >> 8

/// Coefficients for grayscale conversion: Y = (76*R + 150*G + 29*B) >> 8
const COEF_R: i32 = 76;
const COEF_G: i32 = 150;
const COEF_B: i32 = 29;

/// Convert an RGB image (3 bytes per pixel, row-major) to grayscale
pub fn rgb_to_grayscale(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    debug_assert_eq!(rgb.len(), pixel_count * 3);

    let mut gray = Vec::with_capacity(pixel_count);
    for i in 0..pixel_count {
        let idx = i * 3;
        let r = rgb[idx] as i32;
        let g = rgb[idx + 1] as i32;
        let b = rgb[idx + 2] as i32;
        let lum = (COEF_R * r + COEF_G * g + COEF_B * b) >> 8;
        gray.push(lum.min(255) as u8);
    }
    gray
}
