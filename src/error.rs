use thiserror::Error;

/// Failures surfaced by the segmentation core
///
/// Every error is local to a single image's processing; nothing is corrupted
/// and the caller may continue with the next image. Empty results (no words
/// found, no lines formed) are not errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A tuning parameter is out of range (even kernel size, non-positive
    /// sigma/theta/target height)
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The input raster is unusable (empty, or unsupported channel count)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The kernel weight sum is too close to zero to normalize
    ///
    /// The filter kernel is a signed derivative operator, so pathological
    /// sigma/theta combinations can cancel the weights almost exactly.
    /// Normalizing by such a sum would flood the kernel with huge or
    /// non-finite values, so it is rejected instead.
    #[error("degenerate kernel: weight sum {sum:e} cannot be normalized")]
    DegenerateKernel {
        /// The offending weight sum
        sum: f64,
    },
}
