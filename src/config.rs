//! Pipeline configuration.

use crate::util::{DetPostError, DetPostResult};

/// Configuration for the decode and suppression pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectConfig {
    /// Minimum winning class probability to keep a decoded row (strict).
    pub confidence_threshold: f32,
    /// Overlap allowance controlling suppression; boxes are suppressed when
    /// their IoU with a kept box reaches `1 - suppression_threshold`.
    pub suppression_threshold: f32,
    /// Decode rows in parallel (`rayon` feature only).
    pub parallel: bool,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.5,
            suppression_threshold: 0.3,
            parallel: false,
        }
    }
}

impl DetectConfig {
    /// Validates the configuration before any frame is processed.
    ///
    /// Both thresholds must lie in the open interval (0, 1); NaN is rejected.
    pub fn validate(&self) -> DetPostResult<()> {
        check_threshold("confidence_threshold", self.confidence_threshold)?;
        check_threshold("suppression_threshold", self.suppression_threshold)?;
        Ok(())
    }
}

fn check_threshold(name: &'static str, value: f32) -> DetPostResult<()> {
    if !(value > 0.0 && value < 1.0) {
        return Err(DetPostError::InvalidThreshold { name, value });
    }
    Ok(())
}
