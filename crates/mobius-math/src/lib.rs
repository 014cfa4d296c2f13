//! Math primitives for sampled surfaces: vectors, 2D grids, finite differences
//! and composite quadrature.

pub mod aabb;
pub mod diff;
pub mod grid;
pub mod quadrature;

pub use aabb::Aabb3;
pub use diff::{gradient, gradient_1d, Axis};
pub use glam::{DVec2, DVec3};
pub use grid::{linspace, Grid2};
pub use quadrature::{integrate_grid, simpson, trapezoid, QuadratureRule};

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector3 = DVec3;
