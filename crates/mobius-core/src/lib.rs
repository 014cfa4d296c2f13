//! Core types shared by the Möbius strip crates: errors, tolerances, traits.

pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{MobiusError, Result};
pub use tolerance::Tolerance;
