//! Bounding boxes and the overlap metric
//!
//! Boxes use inclusive pixel bounds: a box spanning `x1..=x2` covers
//! `x2 - x1 + 1` pixel columns, so a single-pixel box has area 1.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned box given by its corners `(x1, y1)` and `(x2, y2)`.
///
/// `x1 <= x2` and `y1 <= y2` are expected but not enforced; inverted boxes
/// yield zero or negative areas which flow through [`BBox::iou`] unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BBox {
    /// Create a new bounding box
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create from `[x1, y1, x2, y2]`
    pub const fn from_array(coords: [f64; 4]) -> Self {
        Self::new(coords[0], coords[1], coords[2], coords[3])
    }

    pub const fn to_array(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Number of pixel columns covered
    pub fn width(&self) -> f64 {
        self.x2 - self.x1 + 1.0
    }

    /// Number of pixel rows covered
    pub fn height(&self) -> f64 {
        self.y2 - self.y1 + 1.0
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Area shared with another box, zero when they do not overlap
    pub fn intersection(&self, other: &BBox) -> f64 {
        let xa = self.x1.max(other.x1);
        let ya = self.y1.max(other.y1);
        let xb = self.x2.min(other.x2);
        let yb = self.y2.min(other.y2);

        (xb - xa + 1.0).max(0.0) * (yb - ya + 1.0).max(0.0)
    }

    /// Intersection over union, failing with [`Error::DegenerateGeometry`]
    /// when the union area is zero.
    pub fn checked_iou(&self, other: &BBox) -> Result<f64> {
        let intersection = self.intersection(other);
        let union = self.area() + other.area() - intersection;

        if union == 0.0 {
            return Err(Error::DegenerateGeometry);
        }

        Ok(intersection / union)
    }

    /// Intersection over union; a zero union counts as no overlap.
    pub fn iou(&self, other: &BBox) -> f64 {
        self.checked_iou(other).unwrap_or(0.0)
    }

    /// Truncate every coordinate toward zero (pixel-grid convention)
    pub fn truncated(&self) -> Self {
        Self::new(self.x1.trunc(), self.y1.trunc(), self.x2.trunc(), self.y2.trunc())
    }

    /// Integer coordinates, truncated toward zero
    pub fn to_pixels(&self) -> PixelBox {
        PixelBox::new(self.x1 as i64, self.y1 as i64, self.x2 as i64, self.y2 as i64)
    }
}

impl From<[f64; 4]> for BBox {
    fn from(coords: [f64; 4]) -> Self {
        Self::from_array(coords)
    }
}

impl From<PixelBox> for BBox {
    fn from(pixels: PixelBox) -> Self {
        Self::new(
            pixels.x1 as f64,
            pixels.y1 as f64,
            pixels.x2 as f64,
            pixels.y2 as f64,
        )
    }
}

/// Box with integer pixel coordinates, as emitted by the suppression engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelBox {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl PixelBox {
    pub const fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub const fn to_array(&self) -> [i64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}

impl From<[i64; 4]> for PixelBox {
    fn from(coords: [i64; 4]) -> Self {
        Self::new(coords[0], coords[1], coords[2], coords[3])
    }
}

impl fmt::Display for PixelBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.x1, self.y1, self.x2, self.y2)
    }
}

/// IoU between two boxes, see [`BBox::iou`]
pub fn iou(a: &BBox, b: &BBox) -> f64 {
    a.iou(b)
}

/// IoU between two boxes, see [`BBox::checked_iou`]
pub fn checked_iou(a: &BBox, b: &BBox) -> Result<f64> {
    a.checked_iou(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_is_pixel_inclusive() {
        assert_eq!(BBox::new(1.0, 1.0, 1.0, 1.0).area(), 1.0);
        assert_eq!(BBox::new(200.0, 200.0, 400.0, 400.0).area(), 201.0 * 201.0);
    }

    #[test]
    fn test_bbox_iou() {
        let box1 = BBox::new(200.0, 200.0, 400.0, 400.0);
        let box2 = BBox::new(220.0, 220.0, 420.0, 420.0);

        let expected = (181.0 * 181.0) / (2.0 * 201.0 * 201.0 - 181.0 * 181.0);
        assert!((box1.iou(&box2) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_iou_symmetric() {
        let a = BBox::new(240.0, 200.0, 440.0, 400.0);
        let b = BBox::new(200.0, 240.0, 400.0, 440.0);
        assert_eq!(iou(&a, &b), iou(&b, &a));
    }

    #[test]
    fn test_iou_self_identity() {
        for b in [
            BBox::new(0.0, 0.0, 0.0, 0.0),
            BBox::new(1.0, 1.0, 2.0, 2.0),
            BBox::new(10.5, 3.25, 99.0, 47.75),
        ] {
            assert_eq!(b.iou(&b), 1.0);
        }
    }

    #[test]
    fn test_disjoint_boxes_have_zero_iou() {
        let a = BBox::new(1.0, 1.0, 2.0, 2.0);
        let b = BBox::new(200.0, 200.0, 400.0, 400.0);
        assert_eq!(a.intersection(&b), 0.0);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn test_adjacent_pixels_do_not_overlap() {
        let a = BBox::new(0.0, 0.0, 4.0, 4.0);
        let b = BBox::new(5.0, 0.0, 9.0, 4.0);
        assert_eq!(a.iou(&b), 0.0);

        // sharing one column counts as overlap under inclusive bounds
        let c = BBox::new(4.0, 0.0, 8.0, 4.0);
        assert_eq!(a.intersection(&c), 5.0);
    }

    #[test]
    fn test_degenerate_union() {
        let a = BBox::new(0.0, 0.0, -1.0, -1.0);
        let b = BBox::new(5.0, 5.0, 4.0, 4.0);

        assert!(matches!(a.checked_iou(&b), Err(Error::DegenerateGeometry)));
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn test_truncation_toward_zero() {
        let b = BBox::new(1.9, -1.9, 10.5, 20.999);
        assert_eq!(b.truncated(), BBox::new(1.0, -1.0, 10.0, 20.0));
        assert_eq!(b.to_pixels(), PixelBox::new(1, -1, 10, 20));
    }

    #[test]
    fn test_large_coordinates_keep_their_extent() {
        let b = BBox::new(3e9, 3e9, 3e9 + 10.0, 3e9 + 10.0);
        assert_eq!(
            b.to_pixels(),
            PixelBox::new(3_000_000_000, 3_000_000_000, 3_000_000_010, 3_000_000_010)
        );
        assert_eq!(b.area(), 121.0);
    }

    #[test]
    fn test_pixel_box_display() {
        assert_eq!(PixelBox::new(1, 1, 2, 2).to_string(), "[1, 1, 2, 2]");
    }
}
