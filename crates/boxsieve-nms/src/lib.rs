//! Boxsieve suppression library
//!
//! Greedy non-maximum suppression over flat lists of bounding boxes, ordered
//! by bottom edge rather than by detector confidence.

pub mod collection;
pub mod suppression;

// Re-export commonly used types
pub use boxsieve_core::{BBox, BoxError, Result, overlap_score};
pub use collection::{BBoxCollection, BBoxStats};
pub use suppression::{
    DEFAULT_OVERLAP_THRESHOLD, SuppressionConfig, Suppressor, by_bottom_edge, suppress,
    suppress_indices,
};

/// Core traits for the suppression stage
pub mod traits {
    use super::*;

    /// Trait for non-maximum suppression implementations
    pub trait NonMaxSuppression {
        fn apply_nms(&self, boxes: &[BBox]) -> Result<Vec<BBox>>;
    }
}
