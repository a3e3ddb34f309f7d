use num_complex::Complex64;

/// Computes the power of each bin of a spectrum, normalized by its length.
///
/// Bin `k` holds `|X[k]|² / N`. An empty spectrum yields an empty vector.
///
/// # Example
///
/// ```
/// # use radix2_fft::{fft, psd::power_spectrum};
/// let spectrum = fft(&[1.0, 0.0, 0.0, 0.0]);
/// let power = power_spectrum(&spectrum);
/// assert_eq!(power, vec![0.25; 4]);
/// ```
#[must_use]
pub fn power_spectrum(spectrum: &[Complex64]) -> Vec<f64> {
    let n = spectrum.len() as f64;
    spectrum.iter().map(|c| c.norm_sqr() / n).collect()
}

/// Sum of squared magnitudes, `Σ |x|²`.
///
/// By Parseval's theorem the unscaled DFT satisfies
/// `total_energy(X) == N · total_energy(x)`.
#[must_use]
pub fn total_energy(samples: &[Complex64]) -> f64 {
    samples.iter().map(Complex64::norm_sqr).sum()
}
