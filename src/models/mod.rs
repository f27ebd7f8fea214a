pub mod bbox;
pub mod detection;
pub mod image;

pub use bbox::BBox;
pub use detection::{Detection, Line};
pub use image::GrayImage;
