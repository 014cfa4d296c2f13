//! Curve trait and the boundary curves of the strip.

mod boundary;

use mobius_core::Tolerance;
use mobius_math::{linspace, Point3};

pub use boundary::BoundaryCurve;

/// A parametric curve over a closed interval.
pub trait Curve: Send + Sync {
    fn point_at(&self, t: f64) -> Point3;

    /// `(t_min, t_max)`
    fn domain(&self) -> (f64, f64);

    /// Whether both ends of the domain map to the same point.
    fn is_closed(&self) -> bool {
        let (t0, t1) = self.domain();
        Tolerance::default().is_zero((self.point_at(t1) - self.point_at(t0)).length())
    }

    /// `count` evenly spaced parameters over the domain, and the points there.
    fn sample(&self, count: usize) -> (Vec<f64>, Vec<Point3>) {
        let (t0, t1) = self.domain();
        let params = linspace(t0, t1, count);
        let points = params.iter().map(|&t| self.point_at(t)).collect();
        (params, points)
    }
}
