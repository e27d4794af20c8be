//! Error types shared across the workspace

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Boxes and scores are not aligned one-to-one.
    #[error("invalid input: {boxes} boxes but {scores} scores")]
    InvalidInput { boxes: usize, scores: usize },

    /// Union area of two boxes is zero, so IoU is undefined.
    #[error("degenerate geometry: union area is zero")]
    DegenerateGeometry,

    #[error("score at index {index} is not finite ({value})")]
    NonFiniteScore { index: usize, value: f64 },

    #[error("box at index {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
