use crate::models::GrayImage;

/// Threshold an image with Otsu's method and return the inverted mask
///
/// The filter stage leaves word candidates as dark troughs, so the mask is
/// inverted: a pixel is foreground (255) when its intensity falls below the
/// automatically chosen threshold. Returned as one byte per pixel,
/// row-major.
pub fn otsu_inverted_mask(img: &GrayImage) -> Vec<u8> {
    let threshold = calculate_otsu_threshold(img.as_bytes());
    img.as_bytes()
        .iter()
        .map(|&p| if p < threshold { 255 } else { 0 })
        .collect()
}

/// Calculate Otsu's optimal threshold
///
/// Maximizes the between-class variance over the intensity histogram.
fn calculate_otsu_threshold(gray: &[u8]) -> u8 {
    // Build histogram
    let mut histogram = [0u32; 256];
    for &pixel in gray {
        histogram[pixel as usize] += 1;
    }

    let total_pixels = gray.len() as f64;
    let mut max_variance = 0.0;
    let mut optimal_threshold = 128u8;

    for threshold in 0..=255u8 {
        let mut class1_pixels = 0u32;
        let mut class1_sum = 0u64;
        let mut class2_pixels = 0u32;
        let mut class2_sum = 0u64;

        for intensity in 0..=255u8 {
            let count = histogram[intensity as usize];
            if intensity < threshold {
                class1_pixels += count;
                class1_sum += count as u64 * intensity as u64;
            } else {
                class2_pixels += count;
                class2_sum += count as u64 * intensity as u64;
            }
        }

        if class1_pixels == 0 || class2_pixels == 0 {
            continue;
        }

        let class1_mean = class1_sum as f64 / class1_pixels as f64;
        let class2_mean = class2_sum as f64 / class2_pixels as f64;

        let weight1 = class1_pixels as f64 / total_pixels;
        let weight2 = class2_pixels as f64 / total_pixels;

        let variance = weight1 * weight2 * (class1_mean - class2_mean).powi(2);

        if variance > max_variance {
            max_variance = variance;
            optimal_threshold = threshold;
        }
    }

    optimal_threshold
}
