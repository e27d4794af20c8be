//! Detection and configuration loading for the demo binary

use anyhow::{Context, Result};
use softnms_cv::{DetectionSet, SoftNmsConfig};
use std::fs;
use std::path::Path;

/// Fixed sample: four heavily overlapping boxes and one isolated box
pub fn sample_detections() -> Result<DetectionSet> {
    let boxes = [
        [200.0, 200.0, 400.0, 400.0],
        [220.0, 220.0, 420.0, 420.0],
        [240.0, 200.0, 440.0, 400.0],
        [200.0, 240.0, 400.0, 440.0],
        [1.0, 1.0, 2.0, 2.0],
    ];
    let scores = [0.9, 0.8, 0.7, 0.85, 0.5];

    DetectionSet::from_arrays(&boxes, &scores).context("Invalid sample detections")
}

/// Load `{"boxes": [[x1, y1, x2, y2], ...], "scores": [...]}`
pub fn load_detections(path: &Path) -> Result<DetectionSet> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read detections: {:?}", path))?;

    serde_json::from_str(&json).with_context(|| format!("Invalid detections in {:?}", path))
}

pub fn load_config(path: &Path) -> Result<SoftNmsConfig> {
    SoftNmsConfig::from_json_file(path)
        .with_context(|| format!("Failed to load configuration: {:?}", path))
}
