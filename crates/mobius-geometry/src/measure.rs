//! Numerical surface area and boundary length.
//!
//! Both quantities are quadrature approximations whose accuracy depends on the
//! sampling resolution. No error estimate is computed.

use mobius_core::Result;
use mobius_math::{gradient_1d, integrate_grid, simpson};
use tracing::trace;

use crate::curve::{BoundaryCurve, Curve};
use crate::differential::Partials;
use crate::sampler::{CoordinateGrid, ParameterGrid};
use crate::surface::MobiusSurface;

/// Approximate `∫∫ |∂r/∂u × ∂r/∂v| du dv` over the sampled grid.
///
/// Partials come from finite differences with spacings `du` and `dv`; the area
/// element grid is integrated along `v` for each row, then along `u`.
pub fn surface_area(
    coords: &CoordinateGrid,
    grid: &ParameterGrid,
    du: f64,
    dv: f64,
) -> Result<f64> {
    let elements = Partials::estimate(coords, du, dv)?.area_elements();
    integrate_grid(&elements, grid.u_axis(), grid.v_axis())
}

/// Approximate length of one boundary curve from `samples` angular samples.
pub fn boundary_length(curve: &BoundaryCurve, samples: usize) -> Result<f64> {
    let (params, points) = curve.sample(samples);
    let du = match params.as_slice() {
        [first, second, ..] => second - first,
        _ => 0.0,
    };

    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let zs: Vec<f64> = points.iter().map(|p| p.z).collect();

    let dx = gradient_1d(&xs, du)?;
    let dy = gradient_1d(&ys, du)?;
    let dz = gradient_1d(&zs, du)?;

    let ds: Vec<f64> = dx
        .iter()
        .zip(&dy)
        .zip(&dz)
        .map(|((x, y), z)| (x * x + y * y + z * z).sqrt())
        .collect();

    simpson(&ds, &params)
}

/// Total length of the two width-extreme curves `v = ±w/2`.
///
/// The strip has a single boundary loop; the two curves are its two halves,
/// sampled and integrated independently and then summed. Nothing checks that
/// they join into one continuous curve.
pub fn edge_length(surface: &MobiusSurface, samples: usize) -> Result<f64> {
    BoundaryCurve::pair(*surface)
        .iter()
        .map(|curve| -> Result<f64> {
            let length = boundary_length(curve, samples)?;
            trace!(offset = curve.offset, length, "boundary half integrated");
            Ok(length)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ShapeParameters;
    use crate::sampler;
    use mobius_core::MobiusError;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_centerline_length_is_circumference() {
        let center = BoundaryCurve::new(MobiusSurface::new(1.5, 0.4), 0.0);
        let length = boundary_length(&center, 401).unwrap();
        assert!((length - TAU * 1.5).abs() < 1e-3, "got {length}");
    }

    #[test]
    fn test_boundary_halves_equal_length() {
        let [lo, hi] = BoundaryCurve::pair(MobiusSurface::new(1.0, 0.4));
        let a = boundary_length(&lo, 300).unwrap();
        let b = boundary_length(&hi, 300).unwrap();
        assert!((a - b).abs() < 1e-3 * a, "{a} vs {b}");
    }

    #[test]
    fn test_boundary_length_needs_two_samples() {
        let curve = BoundaryCurve::new(MobiusSurface::new(1.0, 0.4), 0.2);
        assert!(matches!(
            boundary_length(&curve, 1),
            Err(MobiusError::NumericDegeneracy(_))
        ));
    }

    #[test]
    fn test_edge_length_two_samples_is_finite() {
        // trapezoid fallback path
        let length = edge_length(&MobiusSurface::new(1.0, 0.4), 2).unwrap();
        assert!(length.is_finite() && length >= 0.0);
    }

    #[test]
    fn test_edge_length_thin_strip() {
        let length = edge_length(&MobiusSurface::new(1.0, 1e-4), 400).unwrap();
        assert!((length - 4.0 * PI).abs() < 1e-2, "got {length}");
    }

    #[test]
    fn test_surface_area_close_to_reference() {
        // for a thin strip the area is close to 2πR·w
        let params = ShapeParameters::new(2.0, 0.1, 101).unwrap();
        let (grid, coords) = sampler::build(&params).unwrap();
        let area = surface_area(&coords, &grid, params.du(), params.dv()).unwrap();
        let reference = TAU * 2.0 * 0.1;
        assert!((area - reference).abs() < 1e-2 * reference, "{area} vs {reference}");
    }
}
