use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use mobius_core::{MobiusError, Tolerance};
use mobius_geometry::measure::boundary_length;
use mobius_geometry::MobiusStrip;

fn area(r: f64, w: f64, n: usize) -> f64 {
    MobiusStrip::new(r, w, n).unwrap().surface_area().unwrap()
}

fn edge(r: f64, w: f64, n: usize) -> f64 {
    MobiusStrip::new(r, w, n).unwrap().edge_length().unwrap()
}

#[test]
fn test_reference_strip_values() {
    let strip = MobiusStrip::new(1.0, 0.4, 200).unwrap();
    let a = strip.surface_area().unwrap();
    let l = strip.edge_length().unwrap();

    assert!(a.is_finite() && a > 0.0);
    assert!(l.is_finite() && l > 0.0);
    // Limits as n -> infinity. The tangents are orthogonal, so with
    // ring = R + v·cos(u/2):
    //   area = ∫₀^2π ∫_{-w/2}^{w/2} sqrt(ring² + v²/4) dv du       = 2.51751
    //   edge = Σ_{v=±w/2} ∫₀^2π sqrt(ring² + v²/4) du             = 12.63032
    // both evaluated with a 400x400 (area) and 200000-point (edge) midpoint rule.
    let tol = Tolerance::quadrature();
    assert!(tol.approx_eq(a, 2.51751), "area {a}");
    assert!(tol.approx_eq(l, 12.63032), "edge {l}");
}

#[test]
fn test_repeated_queries_bit_identical() {
    let strip = MobiusStrip::new(1.0, 0.4, 200).unwrap();
    let a = strip.surface_area().unwrap();
    let l = strip.edge_length().unwrap();
    for _ in 0..3 {
        assert_eq!(strip.surface_area().unwrap().to_bits(), a.to_bits());
        assert_eq!(strip.edge_length().unwrap().to_bits(), l.to_bits());
    }
}

#[test]
fn test_boundary_halves_symmetric() {
    let strip = MobiusStrip::new(5.0, 0.1, 150).unwrap();
    let [lo, hi] = strip.boundary_curves();
    let a = boundary_length(&lo, 150).unwrap();
    let b = boundary_length(&hi, 150).unwrap();
    assert!(Tolerance::new(0.0, 1e-5).approx_eq(a, b), "halves differ: {a} vs {b}");
    assert_abs_diff_eq!(a + b, strip.edge_length().unwrap(), epsilon = 1e-9);
}

#[test]
fn test_area_scales_linearly_with_radius() {
    let base = area(1.0, 0.05, 120);
    for k in [2.0, 4.0] {
        let scaled = area(k, 0.05, 120);
        let ratio = scaled / base;
        assert!(
            Tolerance::new(0.0, 1e-2).approx_eq(ratio, k),
            "area ratio for k={k} is {ratio}"
        );
    }
}

#[test]
fn test_degenerate_width_limit() {
    let r = 1.0;
    let a_small = area(r, 1e-3, 150);
    let a_tiny = area(r, 1e-5, 150);
    assert!(a_small < 1e-2, "area {a_small}");
    assert!(a_tiny < a_small);

    let l = edge(r, 1e-5, 300);
    assert_abs_diff_eq!(l, 4.0 * PI * r, epsilon = 1e-2);
}

#[test]
fn test_results_converge_with_resolution() {
    let (r, w) = (1.0, 0.4);
    let areas: Vec<f64> = [25, 50, 100, 200].iter().map(|&n| area(r, w, n)).collect();
    let edges: Vec<f64> = [25, 50, 100, 200].iter().map(|&n| edge(r, w, n)).collect();

    for series in [&areas, &edges] {
        let steps: Vec<f64> = series.windows(2).map(|p| (p[1] - p[0]).abs()).collect();
        for pair in steps.windows(2) {
            assert!(pair[1] < pair[0], "not converging: {series:?}");
        }
    }
}

#[test]
fn test_invalid_construction_rejected() {
    for (r, w, n) in [(1.0, 0.4, 1), (0.0, 0.4, 10), (1.0, -0.1, 10)] {
        match MobiusStrip::new(r, w, n) {
            Err(MobiusError::InvalidParameter(_)) => {}
            other => panic!("({r}, {w}, {n}) should be rejected, got {other:?}"),
        }
    }
}

#[test]
fn test_small_resolutions_stay_defined() {
    // n = 2 uses the trapezoid rule, n = 4 the end-corrected Simpson rule
    for n in [2, 3, 4, 5] {
        let strip = MobiusStrip::new(1.0, 0.4, n).unwrap();
        let a = strip.surface_area().unwrap();
        let l = strip.edge_length().unwrap();
        assert!(a.is_finite() && a >= 0.0, "n={n}: area {a}");
        assert!(l.is_finite() && l >= 0.0, "n={n}: edge {l}");
    }
}

#[test]
fn test_non_negative_over_parameter_sweep() {
    for r in [0.1, 1.0, 7.5] {
        for w in [0.01, 0.5, 3.0] {
            for n in [6, 31] {
                assert!(area(r, w, n) >= 0.0);
                assert!(edge(r, w, n) >= 0.0);
            }
        }
    }
}
