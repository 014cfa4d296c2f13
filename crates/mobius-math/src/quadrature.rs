//! Composite quadrature over sampled data.
//!
//! [`simpson`] accepts any sample count of two or more. Odd counts use plain
//! composite Simpson panels, even counts add a parabolic end correction on the
//! last interval, and two samples fall back to the trapezoid rule. Abscissae may
//! be non-uniform but consecutive values must differ.

use mobius_core::{MobiusError, Result};
use tracing::debug;

use crate::grid::Grid2;

/// Rule [`simpson`] applies for a given number of samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadratureRule {
    /// Two samples: straight line between them.
    Trapezoid,
    /// Odd count: `(m - 1) / 2` parabolic panels.
    Simpson,
    /// Even count: Simpson on the first `m - 1` samples plus the last interval
    /// integrated on the parabola through the final three samples.
    SimpsonEndCorrected,
}

impl QuadratureRule {
    pub fn for_samples(count: usize) -> Result<Self> {
        match count {
            0 | 1 => Err(MobiusError::numeric_degeneracy(format!(
                "quadrature needs at least 2 samples, got {count}"
            ))),
            2 => Ok(Self::Trapezoid),
            m if m % 2 == 1 => Ok(Self::Simpson),
            _ => Ok(Self::SimpsonEndCorrected),
        }
    }
}

/// Integrate `y` sampled at abscissae `x`.
pub fn simpson(y: &[f64], x: &[f64]) -> Result<f64> {
    check_abscissae(y, x)?;

    match QuadratureRule::for_samples(y.len())? {
        QuadratureRule::Trapezoid => {
            debug!(samples = y.len(), "too few samples for Simpson, using trapezoid");
            trapezoid(y, x)
        }
        QuadratureRule::Simpson => Ok(simpson_panels(y, x)),
        QuadratureRule::SimpsonEndCorrected => {
            let m = y.len();
            let head = simpson_panels(&y[..m - 1], &x[..m - 1]);
            Ok(head + last_interval(&y[m - 3..], &x[m - 3..]))
        }
    }
}

/// Composite trapezoid rule over `y` sampled at `x`.
pub fn trapezoid(y: &[f64], x: &[f64]) -> Result<f64> {
    check_abscissae(y, x)?;
    if y.len() < 2 {
        return Err(MobiusError::numeric_degeneracy(format!(
            "quadrature needs at least 2 samples, got {}",
            y.len()
        )));
    }
    Ok(y.windows(2)
        .zip(x.windows(2))
        .map(|(ys, xs)| 0.5 * (xs[1] - xs[0]) * (ys[0] + ys[1]))
        .sum())
}

/// Integrate a grid over both axes: each row along the column abscissae first,
/// then the per-row results along the row abscissae.
pub fn integrate_grid(grid: &Grid2, row_x: &[f64], col_x: &[f64]) -> Result<f64> {
    if row_x.len() != grid.nrows() || col_x.len() != grid.ncols() {
        return Err(MobiusError::numeric_degeneracy(format!(
            "grid is {}x{} but abscissae are {}x{}",
            grid.nrows(),
            grid.ncols(),
            row_x.len(),
            col_x.len()
        )));
    }

    let mut row = Vec::with_capacity(grid.ncols());
    let per_row = (0..grid.nrows())
        .map(|i| {
            row.clear();
            row.extend(grid.row(i).iter().copied());
            simpson(&row, col_x)
        })
        .collect::<Result<Vec<f64>>>()?;

    simpson(&per_row, row_x)
}

// Sum of Simpson panels over an odd number of samples, with per-panel weights
// so non-uniform spacing stays exact for quadratics.
fn simpson_panels(y: &[f64], x: &[f64]) -> f64 {
    let mut total = 0.0;
    let mut k = 0;
    while k + 2 < y.len() {
        let h0 = x[k + 1] - x[k];
        let h1 = x[k + 2] - x[k + 1];
        let hsum = h0 + h1;
        let ratio = h0 / h1;
        total += hsum / 6.0
            * (y[k] * (2.0 - 1.0 / ratio)
                + y[k + 1] * (hsum * hsum / (h0 * h1))
                + y[k + 2] * (2.0 - ratio));
        k += 2;
    }
    total
}

// Integral over [x1, x2] of the parabola through the three given samples.
fn last_interval(y: &[f64], x: &[f64]) -> f64 {
    let h0 = x[1] - x[0];
    let h1 = x[2] - x[1];
    let alpha = (2.0 * h1 * h1 + 3.0 * h0 * h1) / (6.0 * (h0 + h1));
    let beta = (h1 * h1 + 3.0 * h0 * h1) / (6.0 * h0);
    let eta = (h1 * h1 * h1) / (6.0 * h0 * (h0 + h1));
    alpha * y[2] + beta * y[1] - eta * y[0]
}

fn check_abscissae(y: &[f64], x: &[f64]) -> Result<()> {
    if y.len() != x.len() {
        return Err(MobiusError::numeric_degeneracy(format!(
            "{} ordinates but {} abscissae",
            y.len(),
            x.len()
        )));
    }
    if let Some(k) = x.windows(2).position(|w| w[1] == w[0]) {
        return Err(MobiusError::numeric_degeneracy(format!(
            "abscissae {k} and {} coincide at {}",
            k + 1,
            x[k]
        )));
    }
    Ok(())
}
