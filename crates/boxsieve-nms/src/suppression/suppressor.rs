use super::{config::SuppressionConfig, greedy};
use crate::traits::NonMaxSuppression;
use boxsieve_core::{BBox, Result};

/// Configured suppression stage.
///
/// In strict mode the threshold and every box are validated before any
/// overlap is computed, and the first failure is returned.
#[derive(Debug, Clone, Default)]
pub struct Suppressor {
    config: SuppressionConfig,
}

impl Suppressor {
    pub fn new(config: SuppressionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SuppressionConfig {
        &self.config
    }

    pub fn run(&self, boxes: &[BBox]) -> Result<Vec<BBox>> {
        if self.config.strict {
            self.config.validate()?;
            for (index, bbox) in boxes.iter().enumerate() {
                bbox.validate(index)?;
            }
        }

        Ok(greedy::suppress(boxes, self.config.threshold))
    }
}

impl NonMaxSuppression for Suppressor {
    fn apply_nms(&self, boxes: &[BBox]) -> Result<Vec<BBox>> {
        self.run(boxes)
    }
}
