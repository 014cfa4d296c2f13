//! Uniform sampling of the strip into parameter and coordinate grids.
//!
//! Both grids are `n × n`. Row `i` holds the samples at angle `u_i`, column
//! `j` the samples at width offset `v_j`.

use mobius_core::traits::Validate;
use mobius_core::Result;
use mobius_math::{linspace, Aabb3, DVec3, Grid2, Point3};
use tracing::debug;

use crate::params::ShapeParameters;
use crate::surface::{MobiusSurface, Surface};

/// The `(u, v)` mesh of parameter values.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    pub u: Grid2,
    pub v: Grid2,
    u_axis: Vec<f64>,
    v_axis: Vec<f64>,
}

impl ParameterGrid {
    /// Outer product of two 1D sample sequences.
    pub fn from_axes(u_axis: Vec<f64>, v_axis: Vec<f64>) -> Self {
        let u = Grid2::from_fn(u_axis.len(), v_axis.len(), |i, _| u_axis[i]);
        let v = Grid2::from_fn(u_axis.len(), v_axis.len(), |_, j| v_axis[j]);
        Self {
            u,
            v,
            u_axis,
            v_axis,
        }
    }

    /// Distinct `u` values, one per row.
    pub fn u_axis(&self) -> &[f64] {
        &self.u_axis
    }

    /// Distinct `v` values, one per column.
    pub fn v_axis(&self) -> &[f64] {
        &self.v_axis
    }

    pub fn shape(&self) -> (usize, usize) {
        self.u.shape()
    }
}

/// Sampled `x`, `y`, `z` coordinates, one grid per component.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateGrid {
    pub x: Grid2,
    pub y: Grid2,
    pub z: Grid2,
}

impl CoordinateGrid {
    /// Evaluate `surface` at every node of `grid`.
    pub fn evaluate(surface: &dyn Surface, grid: &ParameterGrid) -> Self {
        let (rows, cols) = grid.shape();
        let mut x = Grid2::zeros(rows, cols);
        let mut y = Grid2::zeros(rows, cols);
        let mut z = Grid2::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                let p = surface.point_at(grid.u[(i, j)], grid.v[(i, j)]);
                x[(i, j)] = p.x;
                y[(i, j)] = p.y;
                z[(i, j)] = p.z;
            }
        }

        Self { x, y, z }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    pub fn point(&self, i: usize, j: usize) -> Point3 {
        DVec3::new(self.x[(i, j)], self.y[(i, j)], self.z[(i, j)])
    }

    /// All points in row-major order (index `i * cols + j`).
    pub fn points(&self) -> impl Iterator<Item = Point3> + '_ {
        let (rows, cols) = self.shape();
        (0..rows).flat_map(move |i| (0..cols).map(move |j| self.point(i, j)))
    }

    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(self.points()).unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}

/// Sample the strip described by `params` on its uniform `n × n` grid.
pub fn build(params: &ShapeParameters) -> Result<(ParameterGrid, CoordinateGrid)> {
    params.validate()?;

    let surface = MobiusSurface::new(params.radius, params.width);
    let n = params.resolution;
    let (u0, u1) = surface.domain_u();
    let (v0, v1) = surface.domain_v();

    let grid = ParameterGrid::from_axes(linspace(u0, u1, n), linspace(v0, v1, n));
    let coords = CoordinateGrid::evaluate(&surface, &grid);

    debug!(
        radius = params.radius,
        width = params.width,
        resolution = n,
        "sampled strip grid"
    );

    Ok((grid, coords))
}
