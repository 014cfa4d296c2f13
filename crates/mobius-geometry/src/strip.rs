//! The sampled Möbius strip and its derived measurements.

use mobius_core::Result;
use mobius_math::Grid2;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::curve::BoundaryCurve;
use crate::differential::Partials;
use crate::measure;
use crate::params::ShapeParameters;
use crate::sampler::{self, CoordinateGrid, ParameterGrid};
use crate::surface::MobiusSurface;

/// A Möbius strip sampled once at construction.
///
/// The grids are immutable; [`surface_area`](Self::surface_area) and
/// [`edge_length`](Self::edge_length) are pure functions of the shape
/// parameters and return identical values on every call. Both are numerical
/// approximations that converge as the resolution grows.
#[derive(Debug, Clone)]
pub struct MobiusStrip {
    params: ShapeParameters,
    surface: MobiusSurface,
    grid: ParameterGrid,
    coords: CoordinateGrid,
}

/// Parameters and measurements of one strip, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripReport {
    pub params: ShapeParameters,
    pub surface_area: f64,
    pub edge_length: f64,
}

impl MobiusStrip {
    /// Sample a strip of centerline radius `radius` and width `width` on an
    /// `resolution × resolution` grid.
    ///
    /// Fails with `InvalidParameter` unless `radius > 0`, `width > 0` (both
    /// finite) and `resolution >= 2`.
    pub fn new(radius: f64, width: f64, resolution: usize) -> Result<Self> {
        Self::from_params(ShapeParameters {
            radius,
            width,
            resolution,
        })
    }

    pub fn from_params(params: ShapeParameters) -> Result<Self> {
        let (grid, coords) = sampler::build(&params)?;
        Ok(Self {
            params,
            surface: MobiusSurface::new(params.radius, params.width),
            grid,
            coords,
        })
    }

    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    pub fn surface(&self) -> &MobiusSurface {
        &self.surface
    }

    pub fn parameter_grid(&self) -> &ParameterGrid {
        &self.grid
    }

    pub fn coordinates(&self) -> &CoordinateGrid {
        &self.coords
    }

    pub fn partials(&self) -> Result<Partials> {
        Partials::estimate(&self.coords, self.params.du(), self.params.dv())
    }

    /// Local area density at each grid node.
    pub fn area_elements(&self) -> Result<Grid2> {
        Ok(self.partials()?.area_elements())
    }

    /// The curves at `v = -w/2` and `v = +w/2`.
    pub fn boundary_curves(&self) -> [BoundaryCurve; 2] {
        BoundaryCurve::pair(self.surface)
    }

    /// Approximate surface area. No error bound is attached to the result.
    pub fn surface_area(&self) -> Result<f64> {
        let _span = debug_span!("surface_area", resolution = self.params.resolution).entered();
        let area = measure::surface_area(
            &self.coords,
            &self.grid,
            self.params.du(),
            self.params.dv(),
        )?;
        debug!(area, "surface area integrated");
        Ok(area)
    }

    /// Approximate total edge length: the sum of the two boundary halves,
    /// each integrated independently.
    pub fn edge_length(&self) -> Result<f64> {
        let _span = debug_span!("edge_length", resolution = self.params.resolution).entered();
        let length = measure::edge_length(&self.surface, self.params.resolution)?;
        debug!(length, "edge length integrated");
        Ok(length)
    }

    pub fn report(&self) -> Result<StripReport> {
        Ok(StripReport {
            params: self.params,
            surface_area: self.surface_area()?,
            edge_length: self.edge_length()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mobius_core::MobiusError;

    #[test]
    fn test_accessors() {
        let strip = MobiusStrip::new(1.0, 0.4, 10).unwrap();
        assert_eq!(strip.params().resolution, 10);
        assert_eq!(strip.coordinates().shape(), (10, 10));
        assert_eq!(strip.parameter_grid().shape(), (10, 10));
        assert_eq!(strip.area_elements().unwrap().shape(), (10, 10));
        let [lo, hi] = strip.boundary_curves();
        assert_eq!(lo.offset, -0.2);
        assert_eq!(hi.offset, 0.2);
    }

    #[test]
    fn test_underflowing_width_rejected_at_construction() {
        for w in [5e-324, 1e-310] {
            let err = MobiusStrip::new(1.0, w, 1001).unwrap_err();
            assert!(matches!(err, MobiusError::InvalidParameter(_)), "{w}: {err:?}");
        }
    }

    #[test]
    fn test_tiny_width_measures_finite() {
        let strip = MobiusStrip::new(1.0, 1e-300, 101).unwrap();
        let area = strip.surface_area().unwrap();
        let edge = strip.edge_length().unwrap();
        assert!(area.is_finite() && area >= 0.0, "area {area}");
        assert!(edge.is_finite() && edge > 0.0, "edge {edge}");
    }

    #[test]
    fn test_report_serializes() {
        let strip = MobiusStrip::new(1.0, 0.4, 21).unwrap();
        let report = strip.report().unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let back: StripReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        assert!(json.contains("\"surface_area\""));
    }

    #[test]
    fn test_strip_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MobiusStrip>();
    }
}
