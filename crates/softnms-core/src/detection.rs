//! Detection sets: boxes paired with confidence scores by index

use crate::bbox::{BBox, PixelBox};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Boxes and scores aligned one-to-one by position.
///
/// Input order carries no meaning. Both sequences always have the same
/// length, and every score and coordinate is finite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDetectionSet", into = "RawDetectionSet")]
pub struct DetectionSet {
    boxes: Vec<BBox>,
    scores: Vec<f64>,
}

/// Wire form: `{"boxes": [[x1, y1, x2, y2], ...], "scores": [...]}`
#[derive(Serialize, Deserialize)]
struct RawDetectionSet {
    boxes: Vec<[f64; 4]>,
    scores: Vec<f64>,
}

impl DetectionSet {
    /// Create a new detection set, rejecting misaligned or non-finite input
    pub fn new(boxes: Vec<BBox>, scores: Vec<f64>) -> Result<Self> {
        if boxes.len() != scores.len() {
            return Err(Error::InvalidInput {
                boxes: boxes.len(),
                scores: scores.len(),
            });
        }

        if let Some((index, &value)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
            return Err(Error::NonFiniteScore { index, value });
        }

        if let Some(index) = boxes
            .iter()
            .position(|b| !b.to_array().iter().all(|c| c.is_finite()))
        {
            return Err(Error::NonFiniteCoordinate { index });
        }

        Ok(Self { boxes, scores })
    }

    /// Create from `[x1, y1, x2, y2]` rows
    pub fn from_arrays(boxes: &[[f64; 4]], scores: &[f64]) -> Result<Self> {
        Self::new(
            boxes.iter().copied().map(BBox::from_array).collect(),
            scores.to_vec(),
        )
    }

    /// Create from `(box, score)` pairs
    pub fn from_pairs<I: IntoIterator<Item = (BBox, f64)>>(pairs: I) -> Result<Self> {
        let (boxes, scores) = pairs.into_iter().unzip();
        Self::new(boxes, scores)
    }

    pub fn boxes(&self) -> &[BBox] {
        &self.boxes
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(BBox, f64)> {
        Some((*self.boxes.get(index)?, self.scores[index]))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BBox, f64)> + '_ {
        self.boxes.iter().zip(self.scores.iter().copied())
    }
}

impl TryFrom<RawDetectionSet> for DetectionSet {
    type Error = Error;

    fn try_from(raw: RawDetectionSet) -> Result<Self> {
        Self::from_arrays(&raw.boxes, &raw.scores)
    }
}

impl From<DetectionSet> for RawDetectionSet {
    fn from(set: DetectionSet) -> Self {
        Self {
            boxes: set.boxes.iter().map(BBox::to_array).collect(),
            scores: set.scores,
        }
    }
}

/// A surviving detection: emitted box, decayed score and its position in
/// the caller's input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub bbox: PixelBox,
    pub score: f64,
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_fails_fast() {
        let result = DetectionSet::from_arrays(&[[0.0, 0.0, 1.0, 1.0]], &[0.9, 0.8]);
        assert!(matches!(
            result,
            Err(Error::InvalidInput { boxes: 1, scores: 2 })
        ));
    }

    #[test]
    fn test_non_finite_score_rejected() {
        let boxes = [[0.0, 0.0, 1.0, 1.0], [2.0, 2.0, 3.0, 3.0]];
        let result = DetectionSet::from_arrays(&boxes, &[0.5, f64::NAN]);
        assert!(matches!(result, Err(Error::NonFiniteScore { index: 1, .. })));
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        let boxes = [
            [0.0, 0.0, 5.0, 5.0],
            [f64::NAN, 0.0, 5.0, 5.0],
            [300.0, 300.0, f64::INFINITY, 310.0],
        ];
        let result = DetectionSet::from_arrays(&boxes, &[0.9, 0.8, 0.7]);
        assert!(matches!(result, Err(Error::NonFiniteCoordinate { index: 1 })));

        let result = DetectionSet::from_arrays(&boxes[2..], &[0.7]);
        assert!(matches!(result, Err(Error::NonFiniteCoordinate { index: 0 })));
    }

    #[test]
    fn test_from_pairs() {
        let set = DetectionSet::from_pairs([
            (BBox::new(0.0, 0.0, 1.0, 1.0), 0.9),
            (BBox::new(5.0, 5.0, 6.0, 6.0), 0.4),
        ])
        .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.scores(), &[0.9, 0.4]);
        assert_eq!(set.get(1), Some((BBox::new(5.0, 5.0, 6.0, 6.0), 0.4)));
        assert_eq!(set.get(2), None);
    }

    #[test]
    fn test_json_wire_format() {
        let json = r#"{"boxes": [[200, 200, 400, 400], [1, 1, 2, 2]], "scores": [0.9, 0.5]}"#;
        let set: DetectionSet = serde_json::from_str(json).unwrap();

        assert_eq!(set.boxes()[1], BBox::new(1.0, 1.0, 2.0, 2.0));
        assert_eq!(set.scores(), &[0.9, 0.5]);

        let misaligned = r#"{"boxes": [[0, 0, 1, 1]], "scores": []}"#;
        assert!(serde_json::from_str::<DetectionSet>(misaligned).is_err());
    }
}
