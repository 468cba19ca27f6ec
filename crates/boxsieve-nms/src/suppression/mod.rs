//! Suppression module

pub mod config;
pub mod greedy;
pub mod suppressor;

pub use config::SuppressionConfig;
pub use greedy::{by_bottom_edge, suppress, suppress_indices};
pub use suppressor::Suppressor;

/// Overlap score at or above which a candidate counts as a duplicate.
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.5;
