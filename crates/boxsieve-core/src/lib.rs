//! Boxsieve core library
//!
//! Axis-aligned bounding boxes and the overlap metric used to decide whether
//! two detections describe the same object.

pub mod error;
pub mod geometry;

// Re-export commonly used types
pub use error::BoxError;
pub use geometry::{BBox, overlap_score};

pub type Result<T> = std::result::Result<T, BoxError>;
