//! Finite-difference derivatives of uniformly sampled data.
//!
//! Interior samples use second-order central differences, the two end samples
//! use first-order one-sided differences. The output always has the shape of
//! the input.

use mobius_core::{MobiusError, Result};

use crate::grid::Grid2;

/// Grid axis a derivative is taken along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along the row index (first parameter).
    Row,
    /// Along the column index (second parameter).
    Column,
}

/// Derivative of `values` sampled at uniform spacing `spacing`.
pub fn gradient_1d(values: &[f64], spacing: f64) -> Result<Vec<f64>> {
    check_samples(values.len(), spacing)?;
    let len = values.len();
    Ok((0..len)
        .map(|k| stencil(|i| values[i], len, k, spacing))
        .collect())
}

/// Derivative of `grid` along `axis` at uniform spacing `spacing`.
pub fn gradient(grid: &Grid2, axis: Axis, spacing: f64) -> Result<Grid2> {
    let len = match axis {
        Axis::Row => grid.nrows(),
        Axis::Column => grid.ncols(),
    };
    check_samples(len, spacing)?;

    Ok(Grid2::from_fn(grid.nrows(), grid.ncols(), |i, j| match axis {
        Axis::Row => stencil(|k| grid[(k, j)], len, i, spacing),
        Axis::Column => stencil(|k| grid[(i, k)], len, j, spacing),
    }))
}

fn stencil(f: impl Fn(usize) -> f64, len: usize, k: usize, h: f64) -> f64 {
    if k == 0 {
        (f(1) - f(0)) / h
    } else if k == len - 1 {
        (f(k) - f(k - 1)) / h
    } else {
        (f(k + 1) - f(k - 1)) / (2.0 * h)
    }
}

fn check_samples(len: usize, spacing: f64) -> Result<()> {
    if len < 2 {
        return Err(MobiusError::numeric_degeneracy(format!(
            "finite differences need at least 2 samples, got {len}"
        )));
    }
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(MobiusError::numeric_degeneracy(format!(
            "sample spacing must be positive and finite, got {spacing}"
        )));
    }
    Ok(())
}
