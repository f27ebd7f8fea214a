//! Pixel-level primitives shared by the detection pipeline
//!
//! - Grayscale conversion (RGB to luminance)
//! - Binarization (Otsu's method on the filtered response)
//! - Uniform bilinear resizing

pub mod binarization;
pub mod grayscale;
pub mod resize;
