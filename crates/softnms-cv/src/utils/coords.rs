//! Coordinate normalization

use crate::config::CoordinateMode;
use softnms_core::BBox;

/// Apply the configured coordinate convention to every box.
///
/// This is the only place coordinates are altered before suppression.
pub fn normalize_boxes(boxes: &[BBox], mode: CoordinateMode) -> Vec<BBox> {
    match mode {
        CoordinateMode::Truncate => boxes.iter().map(BBox::truncated).collect(),
        CoordinateMode::Preserve => boxes.to_vec(),
    }
}
