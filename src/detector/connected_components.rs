//! Connected component extraction for word candidate regions
//!
//! Labels 8-connected foreground regions of a binary mask and reports each
//! region's bounding box together with its true pixel area. The pixel area
//! is what the size filter uses: a sparse diagonal blob can span a large
//! bounding box while covering few pixels, and it should still be dropped.

use std::collections::BTreeMap;

use crate::models::BBox;

/// Union-Find data structure
pub struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    /// Create a forest of `n` singletons
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
        }
    }

    /// Find the root of `x` with path compression
    pub fn find(&mut self, x: u32) -> u32 {
        if self.parent[x as usize] != x {
            self.parent[x as usize] = self.find(self.parent[x as usize]);
        }
        self.parent[x as usize]
    }

    /// Merge the sets containing `x` and `y`
    pub fn union(&mut self, x: u32, y: u32) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x != root_y {
            self.parent[root_x as usize] = root_y;
        }
    }
}

/// One labeled foreground region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Tight axis-aligned bounding box
    pub bbox: BBox,
    /// Number of foreground pixels in the region
    pub area: usize,
}

/// Foreground connected regions of a binary mask
///
/// `mask` is row-major with one byte per pixel, non-zero = foreground.
pub fn find_regions(mask: &[u8], width: usize, height: usize) -> Vec<Region> {
    let mut labels = vec![0u32; width * height];
    let mut next_label = 1u32;
    let mut uf = UnionFind::new(width * height);

    let fg = |x: usize, y: usize| mask[y * width + x] != 0;

    // First pass: label components
    for y in 0..height {
        for x in 0..width {
            if !fg(x, y) {
                continue;
            }

            let idx = y * width + x;
            let mut neighbor_labels = Vec::new();

            // Check left (4-connectivity)
            if x > 0 && fg(x - 1, y) {
                neighbor_labels.push(labels[y * width + x - 1]);
            }
            // Check above (4-connectivity)
            if y > 0 && fg(x, y - 1) {
                neighbor_labels.push(labels[(y - 1) * width + x]);
            }
            // Check upper-left diagonal (8-connectivity keeps slanted
            // strokes in one region)
            if x > 0 && y > 0 && fg(x - 1, y - 1) {
                neighbor_labels.push(labels[(y - 1) * width + x - 1]);
            }
            // Check upper-right diagonal (8-connectivity)
            if x + 1 < width && y > 0 && fg(x + 1, y - 1) {
                neighbor_labels.push(labels[(y - 1) * width + x + 1]);
            }

            match neighbor_labels.iter().min() {
                None => {
                    labels[idx] = next_label;
                    next_label += 1;
                }
                Some(&min_label) => {
                    labels[idx] = min_label;
                    for &l in &neighbor_labels {
                        if l != min_label {
                            uf.union(min_label, l);
                        }
                    }
                }
            }
        }
    }

    // Second pass: accumulate extents and pixel counts per root. Keyed by
    // root label in a BTreeMap so the output order is a pure function of
    // the mask; labels follow raster order, which keeps the whole pipeline
    // deterministic even when two regions share a bbox top-left.
    struct Extent {
        min_x: usize,
        min_y: usize,
        max_x: usize,
        max_y: usize,
        area: usize,
    }
    let mut extents: BTreeMap<u32, Extent> = BTreeMap::new();

    for y in 0..height {
        for x in 0..width {
            let label = labels[y * width + x];
            if label == 0 {
                continue;
            }
            let root = uf.find(label);

            let entry = extents.entry(root).or_insert(Extent {
                min_x: x,
                min_y: y,
                max_x: x,
                max_y: y,
                area: 0,
            });
            entry.min_x = entry.min_x.min(x);
            entry.min_y = entry.min_y.min(y);
            entry.max_x = entry.max_x.max(x);
            entry.max_y = entry.max_y.max(y);
            entry.area += 1;
        }
    }

    extents
        .values()
        .map(|e| Region {
            bbox: BBox::new(e.min_x, e.min_y, e.max_x - e.min_x + 1, e.max_y - e.min_y + 1),
            area: e.area,
        })
        .collect()
}
