//! Anisotropic filter kernel construction
//!
//! Builds the second-derivative-of-Gaussian operator from the scale-space
//! word segmentation technique proposed by R. Manmatha
//! (http://ciir.cs.umass.edu/pubfiles/mm-27.pdf). The kernel responds to
//! intensity troughs (ink) and its horizontal axis decays `theta` times
//! slower than its vertical axis, so narrow inter-letter gaps are smoothed
//! over while wider inter-word gaps survive thresholding.

use crate::error::Error;

/// Weight sums closer to zero than this cannot be normalized meaningfully.
const DEGENERATE_SUM_EPS: f64 = 1e-9;

/// Square 2-D filter kernel with odd side length, immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Side length of the kernel
    pub fn size(&self) -> usize {
        self.size
    }

    /// Half the side length, rounded down
    pub fn half(&self) -> usize {
        self.size / 2
    }

    /// Weight at (row, col)
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.weights[row * self.size + col]
    }

    /// Sum of all weights (1.0 within tolerance after normalization)
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// Build the anisotropic filter kernel for the given parameters
///
/// `kernel_size` must be a positive odd integer, `sigma` the standard
/// deviation of the underlying Gaussian, `theta` the approximate
/// width/height ratio of the words to segment. The exponent intentionally
/// divides by `sigma` rather than `sigma²`, matching the reference
/// formulation of the operator.
pub fn build_kernel(kernel_size: usize, sigma: f64, theta: f64) -> Result<Kernel, Error> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(Error::InvalidParameter(format!(
            "kernel_size must be a positive odd integer, got {kernel_size}"
        )));
    }
    if sigma <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "sigma must be positive, got {sigma}"
        )));
    }
    if theta <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "theta must be positive, got {theta}"
        )));
    }

    let half = (kernel_size / 2) as isize;
    let sigma_x = sigma;
    let sigma_y = sigma * theta;

    let mut weights = Vec::with_capacity(kernel_size * kernel_size);
    for row in 0..kernel_size {
        for col in 0..kernel_size {
            let x = (row as isize - half) as f64;
            let y = (col as isize - half) as f64;

            let exp_term = (-x * x / (2.0 * sigma_x) - y * y / (2.0 * sigma_y)).exp();
            let x_term =
                (x * x - sigma_x * sigma_x) / (2.0 * std::f64::consts::PI * sigma_x.powi(5) * sigma_y);
            let y_term =
                (y * y - sigma_y * sigma_y) / (2.0 * std::f64::consts::PI * sigma_y.powi(5) * sigma_x);

            weights.push((x_term + y_term) * exp_term);
        }
    }

    let sum: f64 = weights.iter().sum();
    if !sum.is_finite() || sum.abs() < DEGENERATE_SUM_EPS {
        return Err(Error::DegenerateKernel { sum });
    }
    for w in &mut weights {
        *w /= sum;
    }

    Ok(Kernel {
        size: kernel_size,
        weights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_normalized() {
        for (size, sigma, theta) in [(25, 11.0, 7.0), (25, 25.0, 5.0), (11, 3.0, 2.0)] {
            let kernel = build_kernel(size, sigma, theta).unwrap();
            assert_eq!(kernel.size(), size);
            assert!(
                (kernel.sum() - 1.0).abs() < 1e-9,
                "kernel {size}/{sigma}/{theta} sums to {}",
                kernel.sum()
            );
        }
    }

    #[test]
    fn test_kernel_symmetric() {
        // The operator only depends on x² and y², so it must be symmetric
        // under reflection of either axis.
        let kernel = build_kernel(25, 11.0, 7.0).unwrap();
        let n = kernel.size() - 1;
        for row in 0..kernel.size() {
            for col in 0..kernel.size() {
                let w = kernel.get(row, col);
                assert!((w - kernel.get(n - row, col)).abs() < 1e-12);
                assert!((w - kernel.get(row, n - col)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_even_kernel_size_rejected() {
        assert!(matches!(
            build_kernel(24, 11.0, 7.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            build_kernel(0, 11.0, 7.0),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_degenerate_weight_sum_rejected() {
        // A tiny kernel with a huge sigma: the signed weights cancel almost
        // exactly and normalizing by the sum would blow the kernel up. The
        // builder must report that instead of emitting inf/NaN weights.
        let err = build_kernel(3, 100.0, 50.0).unwrap_err();
        assert!(matches!(err, Error::DegenerateKernel { .. }));
        if let Error::DegenerateKernel { sum } = err {
            assert!(sum.abs() < DEGENERATE_SUM_EPS);
        }
    }

    #[test]
    fn test_non_positive_sigma_theta_rejected() {
        assert!(matches!(
            build_kernel(25, 0.0, 7.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            build_kernel(25, 11.0, -1.0),
            Err(Error::InvalidParameter(_))
        ));
    }
}
