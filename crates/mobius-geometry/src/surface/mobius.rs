//! Möbius strip surface.

use std::f64::consts::TAU;

use mobius_math::{DVec3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Surface;

/// A Möbius strip around the z axis, parameterized by the angle `u` in
/// `[0, 2π]` and the signed offset `v` in `[-w/2, w/2]` across the strip.
///
/// ```text
/// x = (R + v·cos(u/2))·cos(u)
/// y = (R + v·cos(u/2))·sin(u)
/// z = v·sin(u/2)
/// ```
///
/// The strip closes with a half twist: `point_at(2π, v) == point_at(0, -v)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MobiusSurface {
    pub radius: f64,
    pub width: f64,
}

impl MobiusSurface {
    pub fn new(radius: f64, width: f64) -> Self {
        Self { radius, width }
    }
}

impl Surface for MobiusSurface {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let (s, c) = u.sin_cos();
        let (sh, ch) = (0.5 * u).sin_cos();
        let ring = self.radius + v * ch;
        DVec3::new(ring * c, ring * s, v * sh)
    }

    fn partial_u(&self, u: f64, v: f64) -> Vector3 {
        let (s, c) = u.sin_cos();
        let (sh, ch) = (0.5 * u).sin_cos();
        let ring = self.radius + v * ch;
        DVec3::new(
            -0.5 * v * sh * c - ring * s,
            -0.5 * v * sh * s + ring * c,
            0.5 * v * ch,
        )
    }

    // Unit ruling direction, independent of v.
    fn partial_v(&self, u: f64, _v: f64) -> Vector3 {
        let (s, c) = u.sin_cos();
        let (sh, ch) = (0.5 * u).sin_cos();
        DVec3::new(ch * c, ch * s, sh)
    }

    fn domain_u(&self) -> (f64, f64) {
        (0.0, TAU)
    }

    fn domain_v(&self) -> (f64, f64) {
        let h = 0.5 * self.width;
        (-h, h)
    }
}
