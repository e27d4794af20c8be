//! Soft Non-Maximum Suppression
//!
//! Decays the scores of overlapping detections instead of discarding them,
//! then filters whatever falls below a score threshold.

pub mod config;
pub mod method;
pub mod suppression;
pub mod utils;

// Re-export commonly used types
pub use config::{CoordinateMode, SoftNmsConfig};
pub use method::DecayMethod;
pub use suppression::{SoftNmsOutput, soft_nms};
pub use utils::NonMaxSuppressionUtils;

pub use softnms_core::{BBox, Detection, DetectionSet, Error, PixelBox, Result, iou};

/// Core traits for the suppression engine
pub mod traits {
    use super::*;

    /// Trait for non-maximum suppression implementations
    pub trait NonMaxSuppression {
        fn suppress(&self, detections: &DetectionSet) -> Result<SoftNmsOutput>;
    }

    impl NonMaxSuppression for SoftNmsConfig {
        fn suppress(&self, detections: &DetectionSet) -> Result<SoftNmsOutput> {
            soft_nms(detections, self)
        }
    }
}
