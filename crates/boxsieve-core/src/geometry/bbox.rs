//! Bounding box value type
//!
//! Boxes are plain values: two corners in a shared coordinate space, compared
//! by value and never mutated once handed to the suppression stage.

use crate::error::BoxError;
use crate::{Result, geometry::overlap};
use serde::{Deserialize, Serialize};

/// Number of coordinates that make up a box.
pub const COORDINATES: usize = 4;

/// Axis-aligned rectangle given by its top-left `(x1, y1)` and bottom-right
/// `(x2, y2)` corners.
///
/// Serialized as a flat `[x1, y1, x2, y2]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 4]")]
pub struct BBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BBox {
    /// Create a new bounding box from its corners
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Area from the raw coordinates.
    ///
    /// Not clamped: a box with inverted corners on one axis has a negative area.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Area shared with `other`, zero when the boxes do not meet on some axis.
    pub fn intersection_area(&self, other: &BBox) -> f64 {
        let ix1 = self.x1.max(other.x1);
        let iy1 = self.y1.max(other.y1);
        let ix2 = self.x2.min(other.x2);
        let iy2 = self.y2.min(other.y2);

        (ix2 - ix1).max(0.0) * (iy2 - iy1).max(0.0)
    }

    /// Calculate intersection over union (IoU) with another box
    pub fn iou(&self, other: &BBox) -> f64 {
        overlap::overlap_score(self, other)
    }

    pub fn is_degenerate(&self) -> bool {
        self.x1 == self.x2 || self.y1 == self.y2
    }

    /// True when every coordinate is finite and the corners are ordered.
    pub fn is_well_formed(&self) -> bool {
        self.coords().iter().all(|c| c.is_finite()) && self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Strict check used by validating callers. `index` is the box position
    /// reported back in the error.
    pub fn validate(&self, index: usize) -> Result<()> {
        if !self.coords().iter().all(|c| c.is_finite()) {
            return Err(BoxError::NonFinite { index });
        }

        if self.x1 > self.x2 || self.y1 > self.y2 {
            return Err(BoxError::MalformedCoordinates {
                index,
                x1: self.x1,
                y1: self.y1,
                x2: self.x2,
                y2: self.y2,
            });
        }

        Ok(())
    }

    pub fn coords(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}

impl From<[f64; 4]> for BBox {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<(f64, f64, f64, f64)> for BBox {
    fn from((x1, y1, x2, y2): (f64, f64, f64, f64)) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<BBox> for [f64; 4] {
    fn from(bbox: BBox) -> Self {
        bbox.coords()
    }
}

impl TryFrom<&[f64]> for BBox {
    type Error = BoxError;

    fn try_from(coords: &[f64]) -> Result<Self> {
        match *coords {
            [x1, y1, x2, y2] => Ok(Self::new(x1, y1, x2, y2)),
            _ => Err(BoxError::Shape {
                expected: COORDINATES,
                found: coords.len(),
            }),
        }
    }
}

impl TryFrom<Vec<f64>> for BBox {
    type Error = BoxError;

    fn try_from(coords: Vec<f64>) -> Result<Self> {
        Self::try_from(coords.as_slice())
    }
}
