//! Non-maximum suppression utilities

use crate::config::SoftNmsConfig;
use crate::suppression::{SoftNmsOutput, soft_nms};
use softnms_core::{DetectionSet, Result};

/// Shortcuts for running a single decay method with default settings
pub struct NonMaxSuppressionUtils;

impl NonMaxSuppressionUtils {
    /// Classic NMS: overlapping lower-scored boxes are zeroed
    pub fn hard_nms(
        detections: &DetectionSet,
        overlap_threshold: f64,
        score_threshold: f64,
    ) -> Result<SoftNmsOutput> {
        let config = SoftNmsConfig::hard()
            .with_overlap_threshold(overlap_threshold)
            .with_score_threshold(score_threshold);
        soft_nms(detections, &config)
    }

    /// Soft-NMS with linear decay above `overlap_threshold`
    pub fn linear(
        detections: &DetectionSet,
        overlap_threshold: f64,
        score_threshold: f64,
    ) -> Result<SoftNmsOutput> {
        let config = SoftNmsConfig::linear()
            .with_overlap_threshold(overlap_threshold)
            .with_score_threshold(score_threshold);
        soft_nms(detections, &config)
    }

    /// Soft-NMS with Gaussian decay of bandwidth `sigma`
    pub fn gaussian(
        detections: &DetectionSet,
        sigma: f64,
        score_threshold: f64,
    ) -> Result<SoftNmsOutput> {
        let config = SoftNmsConfig::gaussian()
            .with_sigma(sigma)
            .with_score_threshold(score_threshold);
        soft_nms(detections, &config)
    }
}
