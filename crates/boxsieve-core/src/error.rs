use thiserror::Error;

/// Errors raised while building or validating boxes.
///
/// Only shape errors can occur in the default, permissive mode. The remaining
/// variants are produced by strict validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoxError {
    #[error("box must have exactly {expected} coordinates, found {found}")]
    Shape { expected: usize, found: usize },

    #[error("box {index} has inverted corners: ({x1}, {y1}) is not above-left of ({x2}, {y2})")]
    MalformedCoordinates {
        index: usize,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },

    #[error("box {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("overlap threshold must be finite, got {0}")]
    InvalidThreshold(f64),
}
