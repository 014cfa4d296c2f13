//! Triangulation of a sampled coordinate grid.

use mobius_math::Point3;

use crate::sampler::CoordinateGrid;

/// Split every grid quad into two triangles.
///
/// Vertices are the grid nodes in row-major order, so an `n × m` grid gives
/// `n·m` vertices and `2·(n-1)·(m-1)` triangles. The seam at `u = 2π` is left
/// open; its nodes coincide with the `u = 0` row mirrored across the strip.
pub fn grid_to_triangles(coords: &CoordinateGrid) -> (Vec<Point3>, Vec<[u32; 3]>) {
    let (rows, cols) = coords.shape();
    let vertices: Vec<Point3> = coords.points().collect();

    let quads_u = rows.saturating_sub(1);
    let quads_v = cols.saturating_sub(1);
    let idx = |i: usize, j: usize| -> u32 { (i * cols + j) as u32 };

    let mut triangles = Vec::with_capacity(quads_u * quads_v * 2);
    for i in 0..quads_u {
        for j in 0..quads_v {
            triangles.push([idx(i, j), idx(i + 1, j), idx(i + 1, j + 1)]);
            triangles.push([idx(i, j), idx(i + 1, j + 1), idx(i, j + 1)]);
        }
    }

    (vertices, triangles)
}
