use super::{BBox, GrayImage};

/// A segmented word candidate: its bounding box plus an owned pixel crop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Location of the word in the source image
    pub bbox: BBox,
    /// Sub-raster of the *original* (unfiltered) image bounded by `bbox`
    pub crop: GrayImage,
}

impl Detection {
    /// Create a detection from a box and its crop
    pub fn new(bbox: BBox, crop: GrayImage) -> Self {
        Self { bbox, crop }
    }

    /// Vertical center of the detection, used for line clustering
    pub fn center_y(&self) -> f32 {
        self.bbox.center_y()
    }
}

/// One text line: detections ordered left-to-right by `bbox.x`
pub type Line = Vec<Detection>;
