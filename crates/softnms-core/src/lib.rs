//! Soft-NMS Core Library
//!
//! Bounding boxes, detection sets and the overlap metric shared by the
//! suppression engine.

pub mod bbox;
pub mod detection;
pub mod error;

// Re-export commonly used types
pub use bbox::{BBox, PixelBox, checked_iou, iou};
pub use detection::{Detection, DetectionSet};
pub use error::{Error, Result};
