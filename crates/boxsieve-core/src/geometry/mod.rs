//! Box geometry

pub mod bbox;
pub mod overlap;

pub use bbox::BBox;
pub use overlap::overlap_score;
