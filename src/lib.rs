//! wordseg - Scale-space word segmentation for handwritten text
//!
//! A pure Rust library that locates individual words inside a pre-segmented
//! text-line or page image and orders them into reading-order lines. Based
//! on the scale-space technique proposed by R. Manmatha
//! (http://ciir.cs.umass.edu/pubfiles/mm-27.pdf).

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Line clustering and reading-order sorting
pub mod clustering;
/// Word detection pipeline (filter kernel, 2-D filtering, components)
pub mod detector;
/// Error taxonomy for the segmentation core
pub mod error;
/// Core data structures (BBox, Detection, GrayImage)
pub mod models;
/// Image loading and crop-saving helpers for the CLI and tests
pub mod tools;
/// Pixel-level primitives (grayscale, binarization, resize)
pub mod utils;

pub use clustering::{sort_line, sort_multiline};
pub use detector::{DetectorParams, detect_words};
pub use error::Error;
pub use models::{BBox, Detection, GrayImage, Line};

use utils::grayscale::rgb_to_grayscale;
use utils::resize::resize_uniform;

/// Detect word candidates in a prepared grayscale image
///
/// Convenience front door over [`detector::detect_words`]; see there for
/// the full pipeline description. Detections come back sorted by ascending
/// `bbox.x`; feed them to [`sort_multiline`] for reading order.
pub fn detect(img: &GrayImage, params: &DetectorParams) -> Result<Vec<Detection>, Error> {
    detector::detect_words(img, params)
}

/// Normalize an input raster for detection
///
/// Accepts a 1-channel grayscale or 3-channel RGB buffer (8 bits per
/// channel, row-major) and resizes it uniformly so the output height equals
/// `target_height`, preserving aspect ratio.
///
/// # Errors
/// `InvalidInput` when the raster is empty, the buffer length does not
/// match the stated geometry, or `channels` is neither 1 nor 3.
/// `InvalidParameter` when `target_height` is zero.
pub fn prepare_img(
    pixels: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    target_height: usize,
) -> Result<GrayImage, Error> {
    if target_height == 0 {
        return Err(Error::InvalidParameter(
            "target_height must be positive".into(),
        ));
    }
    if width == 0 || height == 0 || pixels.is_empty() {
        return Err(Error::InvalidInput("empty input raster".into()));
    }
    if pixels.len() != width * height * channels {
        return Err(Error::InvalidInput(format!(
            "buffer length {} does not match {}x{}x{}",
            pixels.len(),
            width,
            height,
            channels
        )));
    }

    let gray = match channels {
        1 => GrayImage::from_raw(width, height, pixels.to_vec()),
        3 => GrayImage::from_raw(width, height, rgb_to_grayscale(pixels, width, height)),
        n => {
            return Err(Error::InvalidInput(format!(
                "unsupported channel count {n}, expected 1 or 3"
            )));
        }
    };

    let scale = target_height as f32 / height as f32;
    Ok(resize_uniform(&gray, scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_img_grayscale_passthrough() {
        let pixels = vec![128u8; 40 * 20];
        let img = prepare_img(&pixels, 40, 20, 1, 20).unwrap();
        assert_eq!(img.width(), 40);
        assert_eq!(img.height(), 20);
    }

    #[test]
    fn test_prepare_img_resizes_to_target_height() {
        let pixels = vec![200u8; 100 * 50];
        let img = prepare_img(&pixels, 100, 50, 1, 25).unwrap();
        assert_eq!(img.height(), 25);
        assert_eq!(img.width(), 50);
    }

    #[test]
    fn test_prepare_img_rgb_conversion() {
        let pixels = vec![255u8; 10 * 10 * 3];
        let img = prepare_img(&pixels, 10, 10, 3, 10).unwrap();
        assert!(img.as_bytes().iter().all(|&p| p >= 254));
    }

    #[test]
    fn test_prepare_img_rejects_bad_inputs() {
        assert!(matches!(
            prepare_img(&[0u8; 4], 2, 2, 1, 0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            prepare_img(&[], 0, 0, 1, 50),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            prepare_img(&[0u8; 16], 2, 2, 4, 50),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            prepare_img(&[0u8; 5], 2, 2, 1, 50),
            Err(Error::InvalidInput(_))
        ));
    }
}
