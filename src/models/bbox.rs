/// Axis-aligned bounding box in integer pixel coordinates, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    /// Left edge
    pub x: usize,
    /// Top edge
    pub y: usize,
    /// Width, always > 0
    pub w: usize,
    /// Height, always > 0
    pub h: usize,
}

impl BBox {
    /// Create a new bounding box
    pub fn new(x: usize, y: usize, w: usize, h: usize) -> Self {
        Self { x, y, w, h }
    }

    /// Vertical center of the box
    pub fn center_y(&self) -> f32 {
        self.y as f32 + self.h as f32 / 2.0
    }

    /// Exclusive right edge
    pub fn right(&self) -> usize {
        self.x + self.w
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> usize {
        self.y + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_y() {
        let bbox = BBox::new(10, 100, 40, 25);
        assert_eq!(bbox.center_y(), 112.5);
        assert_eq!(bbox.right(), 50);
        assert_eq!(bbox.bottom(), 125);
    }
}
