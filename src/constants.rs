use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Physical and solver constants shared by the wave formulas.
///
/// Every field falls back to its standard value when missing from a constants file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constants {
    /// Gravitational acceleration in m/s².
    pub gravity: f64,
    /// Wavelength solver tolerance in meter.
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl Constants {
    pub const STANDARD: Constants = Constants {
        gravity: 9.81,
        tolerance: 0.01,
        max_iterations: 1000,
    };

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let constants: Constants = serde_json::from_slice(&std::fs::read(path)?)?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(Error::InvalidConstants("gravity must be positive"));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(Error::InvalidConstants("tolerance must be positive"));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConstants("max_iterations must be at least 1"));
        }
        Ok(())
    }
}

impl Default for Constants {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_standard_values() {
        let constants: Constants = serde_json::from_str(r#"{ "gravity": 9.80665 }"#).unwrap();
        assert_eq!(constants.gravity, 9.80665);
        assert_eq!(constants.tolerance, Constants::STANDARD.tolerance);
        assert_eq!(constants.max_iterations, Constants::STANDARD.max_iterations);
    }

    #[test]
    fn rejects_non_positive_gravity() {
        let constants = Constants {
            gravity: 0.0,
            ..Constants::STANDARD
        };
        assert!(matches!(
            constants.validate(),
            Err(Error::InvalidConstants(_))
        ));
    }

    #[test]
    fn rejects_zero_iterations() {
        let constants = Constants {
            max_iterations: 0,
            ..Constants::STANDARD
        };
        assert!(constants.validate().is_err());
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = Constants::from_path("does/not/exist.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn from_path_overrides_gravity() {
        let dir = std::env::temp_dir().join("metoc_test_constants");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("moon.json");
        std::fs::write(&path, r#"{ "gravity": 1.62, "max_iterations": 50 }"#).unwrap();

        let constants = Constants::from_path(&path).unwrap();
        assert_eq!(constants.gravity, 1.62);
        assert_eq!(constants.max_iterations, 50);
        assert_eq!(constants.tolerance, Constants::STANDARD.tolerance);

        let wavelength = constants.wavelength_from_period_depth(10.0, 1000.0).unwrap();
        let expected = 1.62 * 100.0 / (2.0 * std::f64::consts::PI);
        assert!((wavelength.deep_water - expected).abs() < 1e-12);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn from_path_rejects_invalid_values() {
        let dir = std::env::temp_dir().join("metoc_test_constants_invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("constants.json");
        std::fs::write(&path, r#"{ "tolerance": -1.0 }"#).unwrap();
        assert!(matches!(
            Constants::from_path(&path),
            Err(Error::InvalidConstants(_))
        ));

        std::fs::write(&path, "{ gravity: }").unwrap();
        let err = Constants::from_path(&path).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("line 1"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
