//! Soft-NMS ranking and decay loop

use crate::config::SoftNmsConfig;
use crate::utils::coords::normalize_boxes;
use log::{debug, trace};
use serde::Serialize;
use softnms_core::{BBox, Detection, DetectionSet, PixelBox, Result};

/// Result of a suppression pass.
///
/// Everything is reported in the final internal order: position `k` holds the
/// `k`-th representative picked by the ranking loop. This is generally not
/// the caller's input order; use [`Detection::index`] or [`Self::order`] to
/// map back.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SoftNmsOutput {
    /// Detections whose decayed score exceeds the score threshold
    pub kept: Vec<Detection>,
    /// Input index at each final position
    pub order: Vec<usize>,
    /// Decayed score at each final position, including filtered entries
    pub final_scores: Vec<f64>,
}

impl SoftNmsOutput {
    /// Surviving boxes with integer coordinates
    pub fn boxes(&self) -> Vec<PixelBox> {
        self.kept.iter().map(|d| d.bbox).collect()
    }

    /// Input indices of the surviving boxes
    pub fn indices(&self) -> Vec<usize> {
        self.kept.iter().map(|d| d.index).collect()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.kept.iter().map(|d| d.score).collect()
    }

    pub fn len(&self) -> usize {
        self.kept.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
}

/// Run Soft-NMS over `detections`.
///
/// For each position `i`, the remaining entries `i..N` are stably re-ranked by
/// descending score, the head becomes the representative, and every entry
/// after it has its score multiplied by the configured decay weight. After
/// `N - 1` rounds, entries scoring strictly above `score_threshold` are kept.
/// The input is never modified.
pub fn soft_nms(detections: &DetectionSet, config: &SoftNmsConfig) -> Result<SoftNmsOutput> {
    config.validate()?;

    let n = detections.len();
    if n == 0 {
        return Ok(SoftNmsOutput::default());
    }

    let boxes = normalize_boxes(detections.boxes(), config.coordinates);
    let mut scores = detections.scores().to_vec();
    let mut order: Vec<usize> = (0..n).collect();

    for i in 0..n - 1 {
        rank_remaining(&mut order[i..], &scores);

        let representative = boxes[order[i]];
        let remaining = &order[i + 1..];

        // All weights of a round are computed before any score changes
        let weights = decay_weights(&representative, remaining, &boxes, config);
        for (&idx, weight) in remaining.iter().zip(weights) {
            scores[idx] *= weight;
        }

        trace!(
            "round {}: representative #{} (score {:.4}), {} decayed",
            i,
            order[i],
            scores[order[i]],
            remaining.len()
        );
    }

    let kept: Vec<Detection> = order
        .iter()
        .filter(|&&idx| scores[idx] > config.score_threshold)
        .map(|&idx| Detection {
            bbox: boxes[idx].to_pixels(),
            score: scores[idx],
            index: idx,
        })
        .collect();

    debug!(
        "soft-nms ({}): kept {} of {} detections",
        config.method,
        kept.len(),
        n
    );

    let final_scores = order.iter().map(|&idx| scores[idx]).collect();

    Ok(SoftNmsOutput {
        kept,
        order,
        final_scores,
    })
}

/// Stable descending sort of the remaining index range by current score.
/// Ties keep their current relative order.
fn rank_remaining(remaining: &mut [usize], scores: &[f64]) {
    remaining.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
}

#[cfg(not(feature = "parallel"))]
fn decay_weights(
    representative: &BBox,
    remaining: &[usize],
    boxes: &[BBox],
    config: &SoftNmsConfig,
) -> Vec<f64> {
    remaining
        .iter()
        .map(|&idx| {
            let overlap = representative.iou(&boxes[idx]);
            config
                .method
                .weight(overlap, config.overlap_threshold, config.sigma)
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn decay_weights(
    representative: &BBox,
    remaining: &[usize],
    boxes: &[BBox],
    config: &SoftNmsConfig,
) -> Vec<f64> {
    use rayon::prelude::*;

    remaining
        .par_iter()
        .map(|&idx| {
            let overlap = representative.iou(&boxes[idx]);
            config
                .method
                .weight(overlap, config.overlap_threshold, config.sigma)
        })
        .collect()
}
