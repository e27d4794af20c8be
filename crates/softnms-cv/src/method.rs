//! Score decay kernels

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// How a box's score decays given its overlap with the current
/// representative.
///
/// Names other than `"nms"` and `"linear"` select [`DecayMethod::Gaussian`];
/// unknown names are never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecayMethod {
    /// Zero the score once IoU reaches the overlap threshold (classic NMS)
    HardNms,
    /// Scale by `1 - iou` once IoU reaches the overlap threshold
    #[default]
    Linear,
    /// Scale by `exp(-iou² / sigma)` regardless of threshold
    Gaussian,
}

impl DecayMethod {
    pub fn from_name(name: &str) -> Self {
        match name {
            "nms" => Self::HardNms,
            "linear" => Self::Linear,
            _ => Self::Gaussian,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::HardNms => "nms",
            Self::Linear => "linear",
            Self::Gaussian => "gaussian",
        }
    }

    /// Multiplier applied to a score whose box overlaps the representative by
    /// `iou`. The threshold comparison is strict: `iou == overlap_threshold`
    /// already decays.
    pub fn weight(&self, iou: f64, overlap_threshold: f64, sigma: f64) -> f64 {
        match self {
            Self::HardNms => {
                if iou < overlap_threshold {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Linear => {
                if iou < overlap_threshold {
                    1.0
                } else {
                    1.0 - iou
                }
            }
            Self::Gaussian => (-(iou * iou) / sigma).exp(),
        }
    }
}

impl fmt::Display for DecayMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for DecayMethod {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl FromStr for DecayMethod {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl Serialize for DecayMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for DecayMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}
