use num_complex::Complex64;
use std::f64::consts::PI;

/// Twiddle factor `e^(-j·2π·k/n)`.
///
/// # Panics
///
/// Panics if `n` is zero.
///
/// ```
/// # use radix2_fft::twiddle;
/// let w = twiddle(4, 1);
/// assert!((w.re - 0.0).abs() < 1e-12);
/// assert!((w.im + 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn twiddle(n: usize, k: usize) -> Complex64 {
    assert!(n > 0, "twiddle factor requested for a zero-size transform");
    let angle = -2.0 * PI * k as f64 / n as f64;
    Complex64::from_polar(1.0, angle)
}

/// Twiddle factors for one transform of size `n`, `k` in `[0, n/2)`.
///
/// A sub-transform of size `m` (with `m` dividing `n`) reads the same table
/// with stride `n / m`, since `twiddle(m, k) == twiddle(n, k · n/m)`.
#[derive(Debug, Clone)]
pub struct TwiddleTable {
    n: usize,
    factors: Vec<Complex64>,
}

impl TwiddleTable {
    #[must_use]
    pub fn new(n: usize) -> Self {
        let factors = (0..n / 2).map(|k| twiddle(n, k)).collect();
        Self { n, factors }
    }

    /// `twiddle(m, k)` for a sub-transform of size `m`, `k < m / 2`.
    #[must_use]
    pub fn factor(&self, m: usize, k: usize) -> Complex64 {
        debug_assert!(m > 0 && self.n % m == 0, "size {m} does not divide {}", self.n);
        debug_assert!(k < m / 2, "index {k} out of range for size {m}");
        self.factors[k * (self.n / m)]
    }
}
