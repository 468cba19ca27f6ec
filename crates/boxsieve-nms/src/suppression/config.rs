//! Suppression configuration

use super::DEFAULT_OVERLAP_THRESHOLD;
use boxsieve_core::{BoxError, Result};
use serde::{Deserialize, Serialize};

/// Settings for a [`Suppressor`](super::Suppressor).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuppressionConfig {
    /// Candidates scoring at or above this against a kept box are dropped.
    pub threshold: f64,
    /// Reject non-finite thresholds and malformed boxes instead of
    /// running the arithmetic on them.
    pub strict: bool,
}

impl SuppressionConfig {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Threshold check applied in strict mode.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(BoxError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

impl Default for SuppressionConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_OVERLAP_THRESHOLD,
            strict: false,
        }
    }
}
