/// Mixed absolute/relative tolerance for comparing sampled or integrated values.
///
/// Two values match when `|a - b| <= absolute + relative * max(|a|, |b|)`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    pub absolute: f64,
    pub relative: f64,
}

impl Tolerance {
    pub const DEFAULT_ABSOLUTE: f64 = 1e-9;
    pub const DEFAULT_RELATIVE: f64 = 1e-12;

    pub fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    pub fn default_precision() -> Self {
        Self::new(Self::DEFAULT_ABSOLUTE, Self::DEFAULT_RELATIVE)
    }

    /// Agreement expected between quadrature results at moderate resolution.
    pub fn quadrature() -> Self {
        Self::new(1e-6, 1e-3)
    }

    pub fn exact() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.absolute + self.relative * a.abs().max(b.abs())
    }

    pub fn is_zero(self, v: f64) -> bool {
        v.abs() <= self.absolute
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_part_scales() {
        let tol = Tolerance::quadrature();
        assert!(tol.approx_eq(1000.0, 1000.5));
        assert!(!tol.approx_eq(1.0, 1.01));
        assert!(tol.approx_eq(0.0, 5e-7));
    }

    #[test]
    fn test_exact_and_zero() {
        assert!(Tolerance::exact().approx_eq(0.1 + 0.2, 0.1 + 0.2));
        assert!(!Tolerance::exact().approx_eq(0.1 + 0.2, 0.3));
        assert!(Tolerance::default().is_zero(-1e-10));
        assert!(!Tolerance::default().is_zero(1e-8));
    }
}
