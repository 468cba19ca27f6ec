//! Greedy suppression ordered by bottom edge.
//!
//! Boxes are visited from the largest `y2` down. A box is kept when its
//! overlap with every box kept so far is strictly below the threshold, so the
//! first visited box is always kept. Equal `y2` values keep their input order.

use boxsieve_core::{BBox, overlap_score};
use log::{debug, trace};
use std::cmp::Ordering;

/// Visiting order: larger `y2` first. Used with a stable sort so that equal
/// `y2` values keep their input order.
pub fn by_bottom_edge(a: &BBox, b: &BBox) -> Ordering {
    b.y2.total_cmp(&a.y2)
}

/// Positions into `boxes` of the boxes to keep, in selection order.
pub fn suppress_indices(boxes: &[BBox], threshold: f64) -> Vec<usize> {
    if boxes.is_empty() {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by(|&a, &b| by_bottom_edge(&boxes[a], &boxes[b]));

    let mut kept = Vec::with_capacity(boxes.len());
    kept.push(order[0]);

    for &candidate in &order[1..] {
        if is_distinct(&boxes[candidate], &kept, boxes, threshold) {
            kept.push(candidate);
        } else {
            trace!("discarding box {candidate} {:?}", boxes[candidate]);
        }
    }

    debug!(
        "suppression kept {} of {} boxes at threshold {threshold}",
        kept.len(),
        boxes.len()
    );

    kept
}

/// Boxes to keep, in selection order (descending `y2`).
pub fn suppress(boxes: &[BBox], threshold: f64) -> Vec<BBox> {
    suppress_indices(boxes, threshold)
        .into_iter()
        .map(|i| boxes[i])
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn is_distinct(candidate: &BBox, kept: &[usize], boxes: &[BBox], threshold: f64) -> bool {
    kept.iter()
        .all(|&k| overlap_score(candidate, &boxes[k]) < threshold)
}

#[cfg(feature = "parallel")]
fn is_distinct(candidate: &BBox, kept: &[usize], boxes: &[BBox], threshold: f64) -> bool {
    use rayon::prelude::*;

    kept.par_iter()
        .all(|&k| overlap_score(candidate, &boxes[k]) < threshold)
}
