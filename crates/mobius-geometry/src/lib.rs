//! Möbius strip geometry: parametric surface, grid sampling, and numerical
//! area and edge-length integration.

pub mod curve;
pub mod differential;
pub mod measure;
pub mod params;
pub mod sampler;
pub mod strip;
pub mod surface;
pub mod tessellate;

pub use curve::{BoundaryCurve, Curve};
pub use differential::Partials;
pub use params::ShapeParameters;
pub use sampler::{CoordinateGrid, ParameterGrid};
pub use strip::{MobiusStrip, StripReport};
pub use surface::{MobiusSurface, Surface};
