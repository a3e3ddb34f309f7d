use num_complex::Complex64;
use std::f64::consts::PI;

use crate::FftError;

/// Parses a comma-separated list of real numbers, e.g. `"1, 0, -2.5"`.
///
/// Whitespace around each token is ignored. Every token must parse as an
/// `f64`; an empty token (as in `"1,,2"` or a blank line) is rejected.
///
/// # Errors
///
/// [`FftError::InvalidSample`] carrying the first token that failed to parse.
///
/// ```
/// # use radix2_fft::utils::parse_signal;
/// assert_eq!(parse_signal("1, 0,-2.5").unwrap(), vec![1.0, 0.0, -2.5]);
/// assert!(parse_signal("1, two").is_err());
/// ```
pub fn parse_signal(text: &str) -> Result<Vec<f64>, FftError> {
    text.split(',')
        .map(str::trim)
        .map(|token| {
            token.parse::<f64>().map_err(|_| FftError::InvalidSample {
                token: token.to_owned(),
            })
        })
        .collect()
}

/// Formats a coefficient as `a+bj` / `a-bj`.
#[must_use]
pub fn format_complex(c: Complex64) -> String {
    if c.im.is_sign_negative() && c.im != 0.0 {
        format!("{}-{}j", c.re, -c.im)
    } else {
        format!("{}+{}j", c.re, c.im.abs())
    }
}

/// Formats a spectrum as `[a+bj, c+dj, ...]`.
#[must_use]
pub fn format_spectrum(spectrum: &[Complex64]) -> String {
    let items: Vec<String> = spectrum.iter().copied().map(format_complex).collect();
    format!("[{}]", items.join(", "))
}

/// Formats each bin as `<frequency> Hz: a+bj`, using [`bin_frequencies`].
///
/// ```
/// # use radix2_fft::{fft, utils::format_bins};
/// let lines = format_bins(&fft(&[1.0, 0.0]), 100.0);
/// assert_eq!(lines, vec!["0 Hz: 1+0j", "50 Hz: 1+0j"]);
/// ```
#[must_use]
pub fn format_bins(spectrum: &[Complex64], sample_rate: f64) -> Vec<String> {
    bin_frequencies(spectrum.len(), sample_rate)
        .into_iter()
        .zip(spectrum)
        .map(|(frequency, &c)| format!("{frequency} Hz: {}", format_complex(c)))
        .collect()
}

/// Returns the frequency (in Hz) corresponding to each bin of an `n`-point spectrum.
///
/// Bin `k` maps to `k * sample_rate / n` Hz. Bins above `n / 2` are the
/// negative-frequency mirrors of the lower half.
///
/// ```
/// # use radix2_fft::utils::bin_frequencies;
/// let frequencies = bin_frequencies(8, 8000.0);
/// assert_eq!(frequencies, vec![0.0, 1000.0, 2000.0, 3000.0, 4000.0, 5000.0, 6000.0, 7000.0]);
/// ```
#[must_use]
pub fn bin_frequencies(n: usize, sample_rate: f64) -> Vec<f64> {
    (0..n).map(|k| k as f64 * sample_rate / n as f64).collect()
}

/// Generates a sine wave at `frequency` Hz sampled at `sample_rate` for `duration` seconds.
///
/// ```
/// # use radix2_fft::utils::generate_sine_wave;
/// let wave = generate_sine_wave(440.0, 44100.0, 1.0);
/// assert_eq!(wave.len(), 44100);
/// ```
#[must_use]
pub fn generate_sine_wave(frequency: f64, sample_rate: f64, duration: f64) -> Vec<f64> {
    let num_samples = (sample_rate * duration) as usize;
    (0..num_samples)
        .map(|n| (2.0 * PI * frequency * n as f64 / sample_rate).sin())
        .collect()
}
