//! I/O helpers shared by the CLI binary and integration tests
//!
//! The segmentation core only ever sees in-memory rasters; everything that
//! touches the file system lives here.

use std::fs;
use std::path::{Path, PathBuf};

use image::GenericImageView;

use crate::error::Error;
use crate::models::{Detection, GrayImage};

/// Load an image file as RGB bytes along with its dimensions
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, usize, usize), image::ImageError> {
    let img = image::open(path)?;
    let (width, height) = img.dimensions();
    let rgb = img.to_rgb8();
    Ok((rgb.into_raw(), width as usize, height as usize))
}

/// Load an image file and prepare it for detection
///
/// Decodes via the `image` crate, converts to grayscale and resizes to
/// `target_height` (see [`crate::prepare_img`]).
pub fn load_prepared<P: AsRef<Path>>(path: P, target_height: usize) -> Result<GrayImage, Error> {
    let (rgb, width, height) =
        load_rgb(path).map_err(|e| Error::InvalidInput(format!("image decode failed: {e}")))?;
    crate::prepare_img(&rgb, width, height, 3, target_height)
}

/// All image files (`.png`, `.jpg`, `.bmp`) directly inside a directory
///
/// The result is sorted by path so batch runs are deterministic.
pub fn image_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| {
                    matches!(ext.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp")
                })
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Save a detection's crop as a grayscale PNG
pub fn save_crop(det: &Detection, path: &Path) -> Result<(), image::ImageError> {
    let crop = &det.crop;
    image::save_buffer(
        path,
        crop.as_bytes(),
        crop.width() as u32,
        crop.height() as u32,
        image::ColorType::L8,
    )
}
