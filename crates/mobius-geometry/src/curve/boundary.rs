//! Boundary curve of a Möbius strip at a fixed width offset.

use mobius_math::Point3;

use super::Curve;
use crate::surface::{MobiusSurface, Surface};

/// The iso-curve `v = offset` of a [`MobiusSurface`], parameterized by `u` over
/// `[0, 2π]`.
///
/// For `offset = ±w/2` this traces one half of the strip's single boundary
/// loop: it starts at `+offset` across the strip and ends on the opposite edge,
/// so it is not closed on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryCurve {
    pub surface: MobiusSurface,
    pub offset: f64,
}

impl BoundaryCurve {
    pub fn new(surface: MobiusSurface, offset: f64) -> Self {
        Self { surface, offset }
    }

    /// The two width extremes `v = -w/2` and `v = +w/2`.
    pub fn pair(surface: MobiusSurface) -> [Self; 2] {
        let (lo, hi) = surface.domain_v();
        [Self::new(surface, lo), Self::new(surface, hi)]
    }
}

impl Curve for BoundaryCurve {
    fn point_at(&self, t: f64) -> Point3 {
        self.surface.point_at(t, self.offset)
    }

    fn domain(&self) -> (f64, f64) {
        self.surface.domain_u()
    }
}
