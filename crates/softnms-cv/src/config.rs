//! Suppression configuration

use crate::method::DecayMethod;
use serde::{Deserialize, Serialize};
use softnms_core::{Error, Result};
use std::fs;
use std::path::Path;

/// Coordinate handling applied before suppression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateMode {
    /// Truncate fractional coordinates toward zero (pixel grid)
    #[default]
    Truncate,
    /// Use coordinates as given
    Preserve,
}

/// Main suppression configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftNmsConfig {
    /// IoU cutoff for the `nms` and `linear` methods
    pub overlap_threshold: f64,
    /// Gaussian bandwidth, only read by the Gaussian method
    pub sigma: f64,
    /// Minimum decayed score to survive; comparison is strict
    pub score_threshold: f64,
    pub method: DecayMethod,
    pub coordinates: CoordinateMode,
}

impl Default for SoftNmsConfig {
    fn default() -> Self {
        Self {
            overlap_threshold: 0.3,
            sigma: 0.5,
            score_threshold: 0.001,
            method: DecayMethod::Linear,
            coordinates: CoordinateMode::Truncate,
        }
    }
}

impl SoftNmsConfig {
    /// Classic hard suppression
    pub fn hard() -> Self {
        Self {
            method: DecayMethod::HardNms,
            ..Default::default()
        }
    }

    /// Linear decay above the overlap threshold
    pub fn linear() -> Self {
        Self {
            method: DecayMethod::Linear,
            ..Default::default()
        }
    }

    /// Gaussian decay
    pub fn gaussian() -> Self {
        Self {
            method: DecayMethod::Gaussian,
            ..Default::default()
        }
    }

    pub fn with_method(mut self, method: DecayMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_overlap_threshold(mut self, threshold: f64) -> Self {
        self.overlap_threshold = threshold;
        self
    }

    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    pub fn with_score_threshold(mut self, threshold: f64) -> Self {
        self.score_threshold = threshold;
        self
    }

    pub fn with_coordinates(mut self, coordinates: CoordinateMode) -> Self {
        self.coordinates = coordinates;
        self
    }

    /// Reject values that would make the decay loop meaningless
    pub fn validate(&self) -> Result<()> {
        if !self.overlap_threshold.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "overlap_threshold must be finite, got {}",
                self.overlap_threshold
            )));
        }

        if !self.score_threshold.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "score_threshold must be finite, got {}",
                self.score_threshold
            )));
        }

        if self.method == DecayMethod::Gaussian
            && !(self.sigma.is_finite() && self.sigma > 0.0)
        {
            return Err(Error::InvalidConfig(format!(
                "sigma must be positive for the {} method, got {}",
                self.method, self.sigma
            )));
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration; missing fields take their
    /// defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SoftNmsConfig::default();
        assert_eq!(config.overlap_threshold, 0.3);
        assert_eq!(config.sigma, 0.5);
        assert_eq!(config.score_threshold, 0.001);
        assert_eq!(config.method, DecayMethod::Linear);
        assert_eq!(config.coordinates, CoordinateMode::Truncate);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SoftNmsConfig::from_json_str(r#"{"method": "nms", "overlap_threshold": 0.5}"#)
            .unwrap();

        assert_eq!(config.method, DecayMethod::HardNms);
        assert_eq!(config.overlap_threshold, 0.5);
        assert_eq!(config.sigma, 0.5);
        assert_eq!(config.coordinates, CoordinateMode::Truncate);
    }

    #[test]
    fn test_json_round_trip() {
        let config = SoftNmsConfig::gaussian()
            .with_sigma(0.8)
            .with_coordinates(CoordinateMode::Preserve);
        let json = serde_json::to_string(&config).unwrap();

        assert!(json.contains(r#""method":"gaussian""#));
        assert!(json.contains(r#""coordinates":"preserve""#));
        assert_eq!(SoftNmsConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_sigma_validated_only_for_gaussian() {
        assert!(matches!(
            SoftNmsConfig::gaussian().with_sigma(0.0).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(SoftNmsConfig::hard().with_sigma(0.0).validate().is_ok());
    }

    #[test]
    fn test_non_finite_threshold_rejected() {
        let config = SoftNmsConfig::default().with_score_threshold(f64::NAN);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SoftNmsConfig::from_json_str("{not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            SoftNmsConfig::from_json_file("/nonexistent/softnms.json"),
            Err(Error::Io(_))
        ));
    }
}
