//! Shape parameters of a sampled Möbius strip.

use std::f64::consts::TAU;

use mobius_core::traits::Validate;
use mobius_core::{MobiusError, Result};
use serde::{Deserialize, Serialize};

/// Centerline radius `R`, strip width `w` and per-axis grid resolution `n`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParameters {
    pub radius: f64,
    pub width: f64,
    pub resolution: usize,
}

impl ShapeParameters {
    pub const DEFAULT_RADIUS: f64 = 1.0;
    pub const DEFAULT_WIDTH: f64 = 0.4;
    pub const DEFAULT_RESOLUTION: usize = 200;
    pub const MIN_RESOLUTION: usize = 2;
    /// Largest `R + w/2` whose squared tangent lengths stay finite.
    pub const MAX_EXTENT: f64 = 1e150;

    /// Build and validate a parameter set.
    pub fn new(radius: f64, width: f64, resolution: usize) -> Result<Self> {
        let params = Self {
            radius,
            width,
            resolution,
        };
        params.validate()?;
        Ok(params)
    }

    /// Angular step between neighbouring samples, `2π / (n - 1)`.
    pub fn du(&self) -> f64 {
        TAU / (self.resolution - 1) as f64
    }

    /// Width step between neighbouring samples, `w / (n - 1)`.
    pub fn dv(&self) -> f64 {
        self.width / (self.resolution - 1) as f64
    }

    pub fn half_width(&self) -> f64 {
        0.5 * self.width
    }
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            radius: Self::DEFAULT_RADIUS,
            width: Self::DEFAULT_WIDTH,
            resolution: Self::DEFAULT_RESOLUTION,
        }
    }
}

impl Validate for ShapeParameters {
    fn validate(&self) -> Result<()> {
        if !(self.radius.is_normal() && self.radius > 0.0) {
            return Err(MobiusError::invalid_parameter(format!(
                "radius must be positive, finite and normal, got {}",
                self.radius
            )));
        }
        if !(self.width.is_normal() && self.width > 0.0) {
            return Err(MobiusError::invalid_parameter(format!(
                "width must be positive, finite and normal, got {}",
                self.width
            )));
        }
        if self.resolution < Self::MIN_RESOLUTION {
            return Err(MobiusError::invalid_parameter(format!(
                "resolution must be at least {}, got {}",
                Self::MIN_RESOLUTION,
                self.resolution
            )));
        }
        // finite differences divide by dv and sample at ±w/2
        if !(self.dv().is_normal() && self.half_width().is_normal()) {
            return Err(MobiusError::invalid_parameter(format!(
                "width {} is too small to sample at resolution {}",
                self.width, self.resolution
            )));
        }
        let extent = self.radius + self.half_width();
        if !(extent <= Self::MAX_EXTENT) {
            return Err(MobiusError::invalid_parameter(format!(
                "radius + width/2 must not exceed {:e}, got {}",
                Self::MAX_EXTENT,
                extent
            )));
        }
        Ok(())
    }
}
