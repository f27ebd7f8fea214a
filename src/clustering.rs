//! Reading-order line clustering
//!
//! Detections come out of the detector with no notion of the text line they
//! belong to. Words on one line still differ in `bbox.y` because of
//! ascenders and descenders, so grouping tolerates vertical jitter: two
//! consecutive detections (by vertical center) join the same line while the
//! gap between their centers stays below a fraction of the line's running
//! mean word height.

use crate::models::{Detection, Line};

/// A gap between consecutive vertical centers larger than this fraction of
/// the open group's mean box height starts a new line.
const VERTICAL_GAP_FACTOR: f32 = 0.8;

/// Cluster detections into reading-order lines
///
/// Lines are ordered top-to-bottom by mean vertical center; within a line,
/// detections are ordered left-to-right by `bbox.x`. Groups with fewer than
/// `min_words_per_line` detections are treated as noise and dropped. Empty
/// input yields an empty vector.
pub fn sort_multiline(detections: Vec<Detection>, min_words_per_line: usize) -> Vec<Line> {
    let mut sorted = detections;
    sorted.sort_by(|a, b| a.center_y().total_cmp(&b.center_y()));

    // Greedy grouping along the vertical axis.
    let mut groups: Vec<Line> = Vec::new();
    let mut current: Line = Vec::new();
    let mut height_sum = 0.0f32;
    let mut last_cy = 0.0f32;

    for det in sorted {
        let cy = det.center_y();
        if !current.is_empty() {
            let mean_height = height_sum / current.len() as f32;
            if cy - last_cy > VERTICAL_GAP_FACTOR * mean_height {
                groups.push(std::mem::take(&mut current));
                height_sum = 0.0;
            }
        }
        height_sum += det.bbox.h as f32;
        last_cy = cy;
        current.push(det);
    }
    if !current.is_empty() {
        groups.push(current);
    }

    let mut lines: Vec<Line> = groups
        .into_iter()
        .filter(|g| g.len() >= min_words_per_line)
        .collect();

    lines.sort_by(|a, b| mean_center_y(a).total_cmp(&mean_center_y(b)));
    for line in &mut lines {
        sort_line(line);
    }
    lines
}

/// Sort the words of a single line left-to-right by `bbox.x`
pub fn sort_line(line: &mut Line) {
    line.sort_by_key(|d| (d.bbox.x, d.bbox.y));
}

fn mean_center_y(line: &Line) -> f32 {
    line.iter().map(Detection::center_y).sum::<f32>() / line.len() as f32
}
