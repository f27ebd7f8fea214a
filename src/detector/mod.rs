//! Word detection pipeline
//!
//! This module contains the algorithmic core of word segmentation:
//! - Anisotropic filter kernel construction
//! - 2-D filtering with replicate borders
//! - Connected component labeling with per-region pixel area

/// Connected component labeling via union-find
pub mod connected_components;
/// 2-D filtering of grayscale rasters
pub mod convolve;
/// Anisotropic derivative-of-Gaussian kernel
pub mod kernel;

use crate::error::Error;
use crate::models::{Detection, GrayImage};
use crate::utils::binarization::otsu_inverted_mask;

/// Tuning parameters for word detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorParams {
    /// Side length of the filter kernel, must be odd
    pub kernel_size: usize,
    /// Standard deviation of the Gaussian underlying the kernel
    pub sigma: f64,
    /// Approximate width/height ratio of words; stretches the kernel
    /// horizontally
    pub theta: f64,
    /// Word candidates covering fewer pixels than this are dropped
    pub min_area: usize,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            kernel_size: 25,
            sigma: 11.0,
            theta: 7.0,
            min_area: 100,
        }
    }
}

/// Detect word candidates in a grayscale image
///
/// Applies the scale-space filter, thresholds the response with Otsu's
/// method (inverted so dark word blobs are foreground), labels connected
/// components, drops those with pixel area below `min_area` and crops the
/// *original* image per surviving bounding box.
///
/// The result is sorted by ascending `bbox.x`. That is a deterministic base
/// order, not reading order; run the detections through
/// [`sort_multiline`](crate::sort_multiline) to obtain lines.
///
/// A blank image yields an empty vector, which is a valid result rather
/// than an error.
pub fn detect_words(img: &GrayImage, params: &DetectorParams) -> Result<Vec<Detection>, Error> {
    if img.is_empty() {
        return Err(Error::InvalidInput("empty input raster".into()));
    }

    let kernel = kernel::build_kernel(params.kernel_size, params.sigma, params.theta)?;
    let filtered = convolve::filter(img, &kernel);
    let mask = otsu_inverted_mask(&filtered);
    let regions = connected_components::find_regions(&mask, img.width(), img.height());

    let mut detections: Vec<Detection> = regions
        .into_iter()
        .filter(|r| r.area >= params.min_area)
        .map(|r| Detection::new(r.bbox, img.crop(&r.bbox)))
        .collect();

    detections.sort_by_key(|d| (d.bbox.x, d.bbox.y));
    Ok(detections)
}
