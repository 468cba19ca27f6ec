//! Intersection over union between two boxes.

use super::bbox::BBox;

/// IoU of `a` and `b`: shared area divided by combined area.
///
/// The score lies in `[0, 1]` for boxes with ordered corners and positive
/// area. Inverted corners are not rejected here; their negative areas flow
/// through the arithmetic unchanged. When the union area is exactly zero
/// (two degenerate boxes that do not overlap) the score is defined as `0.0`.
pub fn overlap_score(a: &BBox, b: &BBox) -> f64 {
    let intersection = a.intersection_area(b);
    let union = a.area() + b.area() - intersection;

    if union == 0.0 {
        return 0.0;
    }

    intersection / union
}
