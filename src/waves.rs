use std::f64::consts::PI;

use serde::Serialize;

use crate::constants::Constants;
use crate::error::{domain, Error, Result};

/// Deep water and depth limited wavelength for a given period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wavelength {
    /// Deep water wavelength (L0) in meter.
    pub deep_water: f64,
    /// Wavelength at the requested depth (L) in meter.
    pub depth_limited: f64,
    /// Solver steps until the tolerance was met.
    pub iterations: u32,
}

impl Constants {
    /// Steepness (individual wave or sea state) from height and period.
    pub fn steepness_from_height_period(&self, height: f64, period: f64) -> Result<f64> {
        finite("steepness_from_height_period", &[height, period])?;
        if height == 0.0 {
            return Err(domain(
                "steepness_from_height_period",
                "wave height must not be zero",
            ));
        }

        finite_result(
            "steepness_from_height_period",
            self.gravity * period.powi(2) / (2.0 * PI * height),
        )
    }

    /// Period (individual wave or sea state) from height and steepness.
    pub fn period_from_height_steepness(&self, height: f64, steepness: f64) -> Result<f64> {
        finite("period_from_height_steepness", &[height, steepness])?;
        if height * steepness < 0.0 {
            return Err(domain(
                "period_from_height_steepness",
                "height and steepness must not have opposite signs",
            ));
        }

        finite_result(
            "period_from_height_steepness",
            (2.0 * PI * height * steepness / self.gravity).sqrt(),
        )
    }

    /// Height (individual wave or sea state) from period and steepness.
    pub fn height_from_period_steepness(&self, period: f64, steepness: f64) -> Result<f64> {
        finite("height_from_period_steepness", &[period, steepness])?;
        if steepness == 0.0 {
            return Err(domain(
                "height_from_period_steepness",
                "steepness must not be zero",
            ));
        }

        finite_result(
            "height_from_period_steepness",
            self.gravity * period.powi(2) / (2.0 * PI * steepness),
        )
    }

    /// Deep water wavelength and the wavelength at `depth` according to linear wave theory.
    ///
    /// The depth limited wavelength solves the dispersion relation `L = L0 * tanh(2π * d / L)`
    /// by a damped fixed-point iteration starting at `L0`. Each step moves the guess half-way
    /// towards the newly computed wavelength, which keeps the iteration from oscillating in
    /// shallow water.
    #[tracing::instrument(skip(self))]
    pub fn wavelength_from_period_depth(&self, period: f64, depth: f64) -> Result<Wavelength> {
        finite("wavelength_from_period_depth", &[period, depth])?;
        if period <= 0.0 {
            return Err(domain(
                "wavelength_from_period_depth",
                "wave period must be positive",
            ));
        }
        if depth <= 0.0 {
            return Err(domain(
                "wavelength_from_period_depth",
                "water depth must be positive",
            ));
        }

        let deep_water = self.gravity * period.powi(2) / (2.0 * PI);
        if !deep_water.is_finite() {
            return Err(domain(
                "wavelength_from_period_depth",
                "deep water wavelength is not finite",
            ));
        }

        let mut guess = deep_water;
        let mut residual = f64::INFINITY;
        for iteration in 1..=self.max_iterations {
            let wavelength = deep_water * (2.0 * PI * depth / guess).tanh();
            residual = (wavelength - guess).abs();
            tracing::trace!(iteration, wavelength, residual);

            if residual <= self.tolerance {
                tracing::debug!(
                    deep_water_in_m = deep_water,
                    wavelength_in_m = wavelength,
                    iterations = iteration,
                    "wavelength converged"
                );
                return Ok(Wavelength {
                    deep_water,
                    depth_limited: wavelength,
                    iterations: iteration,
                });
            }

            guess += 0.5 * (wavelength - guess);
        }

        tracing::debug!(residual, "wavelength did not converge");
        Err(Error::NotConverged {
            iterations: self.max_iterations,
            residual,
        })
    }
}

fn finite(operation: &'static str, values: &[f64]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(domain(operation, "inputs must be finite"))
    }
}

fn finite_result(operation: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(domain(operation, "result is not finite"))
    }
}

pub fn steepness_from_height_period(height: f64, period: f64) -> Result<f64> {
    Constants::STANDARD.steepness_from_height_period(height, period)
}

pub fn period_from_height_steepness(height: f64, steepness: f64) -> Result<f64> {
    Constants::STANDARD.period_from_height_steepness(height, steepness)
}

pub fn height_from_period_steepness(period: f64, steepness: f64) -> Result<f64> {
    Constants::STANDARD.height_from_period_steepness(period, steepness)
}

pub fn wavelength_from_period_depth(period: f64, depth: f64) -> Result<Wavelength> {
    Constants::STANDARD.wavelength_from_period_depth(period, depth)
}
