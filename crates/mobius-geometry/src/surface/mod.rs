//! Parametric surface trait and the Möbius strip surface.

mod mobius;

use mobius_math::{Point3, Vector3};

pub use mobius::MobiusSurface;

/// A smooth map from a rectangular `(u, v)` domain into 3D space.
pub trait Surface: Send + Sync {
    fn point_at(&self, u: f64, v: f64) -> Point3;

    /// `∂r/∂u` at `(u, v)`.
    fn partial_u(&self, u: f64, v: f64) -> Vector3;

    /// `∂r/∂v` at `(u, v)`.
    fn partial_v(&self, u: f64, v: f64) -> Vector3;

    /// `(u_min, u_max)`
    fn domain_u(&self) -> (f64, f64);

    /// `(v_min, v_max)`
    fn domain_v(&self) -> (f64, f64);

    /// Unit normal `∂r/∂u × ∂r/∂v`, or zero where the tangents are parallel.
    fn normal_at(&self, u: f64, v: f64) -> Vector3 {
        self.partial_u(u, v)
            .cross(self.partial_v(u, v))
            .normalize_or_zero()
    }

    /// Exact area density `|∂r/∂u × ∂r/∂v|`, for checking sampled estimates.
    fn area_density(&self, u: f64, v: f64) -> f64 {
        self.partial_u(u, v).cross(self.partial_v(u, v)).length()
    }
}
