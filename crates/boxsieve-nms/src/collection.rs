//! Owned box collections with batch operations

use crate::suppression;
use boxsieve_core::BBox;
use serde::{Deserialize, Serialize};

/// Ordered collection of bounding boxes, serialized as a plain array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BBoxCollection {
    boxes: Vec<BBox>,
}

impl BBoxCollection {
    /// Create new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from vector of boxes
    pub fn from_vec(boxes: Vec<BBox>) -> Self {
        Self { boxes }
    }

    pub fn push(&mut self, bbox: BBox) {
        self.boxes.push(bbox);
    }

    /// Extend with another collection
    pub fn extend(&mut self, other: BBoxCollection) {
        self.boxes.extend(other.boxes);
    }

    pub fn as_slice(&self) -> &[BBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Sort by bottom edge (descending `y2`), keeping ties in their current order
    pub fn sort_by_bottom_edge(&mut self) {
        self.boxes.sort_by(suppression::by_bottom_edge);
    }

    /// Apply non-maximum suppression
    pub fn apply_nms(self, threshold: f64) -> Self {
        Self::from_vec(suppression::suppress(&self.boxes, threshold))
    }

    pub fn stats(&self) -> BBoxStats {
        if self.boxes.is_empty() {
            return BBoxStats::default();
        }

        let total_area: f64 = self.boxes.iter().map(BBox::area).sum();
        let (min_y2, max_y2) = self
            .boxes
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), b| {
                (lo.min(b.y2), hi.max(b.y2))
            });

        BBoxStats {
            total_boxes: self.boxes.len(),
            mean_area: total_area / self.boxes.len() as f64,
            min_y2,
            max_y2,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BBox> {
        self.boxes.iter()
    }

    pub fn into_vec(self) -> Vec<BBox> {
        self.boxes
    }
}

impl IntoIterator for BBoxCollection {
    type Item = BBox;
    type IntoIter = std::vec::IntoIter<BBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.into_iter()
    }
}

impl<'a> IntoIterator for &'a BBoxCollection {
    type Item = &'a BBox;
    type IntoIter = std::slice::Iter<'a, BBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}

impl FromIterator<BBox> for BBoxCollection {
    fn from_iter<T: IntoIterator<Item = BBox>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

/// Summary of a collection of bounding boxes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BBoxStats {
    pub total_boxes: usize,
    pub mean_area: f64,
    pub min_y2: f64,
    pub max_y2: f64,
}
