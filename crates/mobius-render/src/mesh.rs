use mobius_geometry::tessellate::grid_to_triangles;
use mobius_geometry::CoordinateGrid;
use mobius_math::{Aabb3, Point2, Point3, Vector3};

/// Indexed triangle mesh with per-vertex normals and texture coordinates.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
    pub uvs: Vec<Point2>,
}

impl TriangleMesh {
    /// Triangulate a coordinate grid.
    ///
    /// Texture coordinates map the row index to `u` and the column index to
    /// `v`, both normalized to `[0, 1]`.
    pub fn from_grid(coords: &CoordinateGrid) -> Self {
        let (rows, cols) = coords.shape();
        let (positions, triangles) = grid_to_triangles(coords);

        let scale = |k: usize, len: usize| {
            if len > 1 {
                k as f64 / (len - 1) as f64
            } else {
                0.0
            }
        };
        let uvs = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| Point2::new(scale(i, rows), scale(j, cols))))
            .collect();

        let mut mesh = Self {
            positions,
            normals: Vec::new(),
            indices: triangles.into_iter().flatten().collect(),
            uvs,
        };
        mesh.compute_normals();
        mesh
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Smooth vertex normals: area-weighted sum of adjacent face normals.
    ///
    /// Vertices touching only degenerate faces keep a zero normal.
    pub fn compute_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.positions.len(), Vector3::ZERO);

        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let p0 = self.positions[i0];
            let face = (self.positions[i1] - p0).cross(self.positions[i2] - p0);
            self.normals[i0] += face;
            self.normals[i1] += face;
            self.normals[i2] += face;
        }

        for n in &mut self.normals {
            *n = n.normalize_or_zero();
        }
    }

    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(self.positions.iter().copied())
            .unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}
