use nalgebra::DMatrix;

/// Dense scalar grid sampled over a 2D parameter domain.
///
/// Row index `i` follows the first parameter, column index `j` the second.
pub type Grid2 = DMatrix<f64>;

/// `count` evenly spaced samples over `[start, end]`, both ends included.
///
/// The last sample is exactly `end` rather than an accumulated sum, so closed
/// parameter ranges like `[0, 2π]` land on their endpoint.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|k| {
                    if k == count - 1 {
                        end
                    } else {
                        start + (end - start) * k as f64 / last
                    }
                })
                .collect()
        }
    }
}
