//! Finite-difference partial derivatives of a coordinate grid.

use mobius_core::Result;
use mobius_math::{gradient, Axis, DVec3, Grid2, Vector3};

use crate::sampler::CoordinateGrid;

/// `∂/∂u` and `∂/∂v` of each coordinate component, same shape as the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Partials {
    pub xu: Grid2,
    pub xv: Grid2,
    pub yu: Grid2,
    pub yv: Grid2,
    pub zu: Grid2,
    pub zv: Grid2,
}

impl Partials {
    /// Differentiate `coords` with row spacing `du` and column spacing `dv`.
    pub fn estimate(coords: &CoordinateGrid, du: f64, dv: f64) -> Result<Self> {
        Ok(Self {
            xu: gradient(&coords.x, Axis::Row, du)?,
            xv: gradient(&coords.x, Axis::Column, dv)?,
            yu: gradient(&coords.y, Axis::Row, du)?,
            yv: gradient(&coords.y, Axis::Column, dv)?,
            zu: gradient(&coords.z, Axis::Row, du)?,
            zv: gradient(&coords.z, Axis::Column, dv)?,
        })
    }

    pub fn tangent_u(&self, i: usize, j: usize) -> Vector3 {
        DVec3::new(self.xu[(i, j)], self.yu[(i, j)], self.zu[(i, j)])
    }

    pub fn tangent_v(&self, i: usize, j: usize) -> Vector3 {
        DVec3::new(self.xv[(i, j)], self.yv[(i, j)], self.zv[(i, j)])
    }

    /// `|∂r/∂u × ∂r/∂v|` at every node.
    pub fn area_elements(&self) -> Grid2 {
        let (rows, cols) = self.xu.shape();
        Grid2::from_fn(rows, cols, |i, j| {
            self.tangent_u(i, j).cross(self.tangent_v(i, j)).length()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ShapeParameters;
    use crate::sampler;
    use crate::surface::{MobiusSurface, Surface};

    #[test]
    fn test_partials_shape() {
        let params = ShapeParameters::new(1.0, 0.4, 6).unwrap();
        let (_, coords) = sampler::build(&params).unwrap();
        let partials = Partials::estimate(&coords, params.du(), params.dv()).unwrap();
        assert_eq!(partials.xu.shape(), (6, 6));
        assert_eq!(partials.zv.shape(), (6, 6));
    }

    #[test]
    fn test_partials_approach_analytic() {
        let params = ShapeParameters::new(1.0, 0.4, 201).unwrap();
        let (grid, coords) = sampler::build(&params).unwrap();
        let partials = Partials::estimate(&coords, params.du(), params.dv()).unwrap();
        let surface = MobiusSurface::new(1.0, 0.4);

        // interior node: central differences
        let (i, j) = (57, 120);
        let (u, v) = (grid.u[(i, j)], grid.v[(i, j)]);
        assert!((partials.tangent_u(i, j) - surface.partial_u(u, v)).length() < 1e-3);
        // x, y, z are linear in v so the v derivative is exact up to rounding
        assert!((partials.tangent_v(i, j) - surface.partial_v(u, v)).length() < 1e-9);
    }

    #[test]
    fn test_area_elements_match_exact_density() {
        let params = ShapeParameters::new(1.0, 0.4, 101).unwrap();
        let (grid, coords) = sampler::build(&params).unwrap();
        let elements = Partials::estimate(&coords, params.du(), params.dv())
            .unwrap()
            .area_elements();
        let surface = MobiusSurface::new(1.0, 0.4);

        for i in 1..100 {
            for j in [0, 17, 50, 83, 100] {
                let exact = surface.area_density(grid.u[(i, j)], grid.v[(i, j)]);
                let sampled = elements[(i, j)];
                assert!(
                    (sampled - exact).abs() < 2e-3 * exact,
                    "node ({i}, {j}): sampled {sampled}, exact {exact}"
                );
            }
        }
    }

    #[test]
    fn test_area_elements_non_negative() {
        let params = ShapeParameters::new(1.0, 0.4, 12).unwrap();
        let (_, coords) = sampler::build(&params).unwrap();
        let partials = Partials::estimate(&coords, params.du(), params.dv()).unwrap();
        let elements = partials.area_elements();
        assert!(elements.iter().all(|&a| a >= 0.0 && a.is_finite()));
    }
}
