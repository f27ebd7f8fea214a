//! 2-D filtering of a grayscale raster
//!
//! Border pixels are replicated rather than zero-padded; zero padding would
//! read as a dark frame around the page and the thresholding stage would
//! promote it to spurious word candidates.

use rayon::prelude::*;

use crate::detector::kernel::Kernel;
use crate::models::GrayImage;

/// Correlate `img` with `kernel` and saturate the result back to 8 bits
///
/// Rows are processed in parallel. The kernel built by this crate is
/// symmetric under reflection of each axis, so correlation and convolution
/// coincide.
pub fn filter(img: &GrayImage, kernel: &Kernel) -> GrayImage {
    let width = img.width();
    let height = img.height();
    let half = kernel.half() as isize;

    let mut out = vec![0u8; width * height];
    out.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        for (x, px) in row.iter_mut().enumerate() {
            let mut acc = 0.0f64;
            for krow in 0..kernel.size() {
                let sy = y as isize + krow as isize - half;
                for kcol in 0..kernel.size() {
                    let sx = x as isize + kcol as isize - half;
                    acc += kernel.get(krow, kcol) * img.get_replicate(sx, sy) as f64;
                }
            }
            *px = acc.round().clamp(0.0, 255.0) as u8;
        }
    });

    GrayImage::from_raw(width, height, out)
}
