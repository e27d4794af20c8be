//! Utility modules

pub mod coords;
pub mod nms;

pub use coords::normalize_boxes;
pub use nms::NonMaxSuppressionUtils;
