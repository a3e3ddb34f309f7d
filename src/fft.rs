use log::{debug, trace};
use num_complex::Complex64;

use crate::butterfly::transform_power_of_two;
use crate::normalize::{normalize_spectrum, Precision};
use crate::size::{is_power_of_two, zero_pad};

/// Options for the public transform pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FftOptions {
    /// Decimal places kept in the returned spectrum; `None` returns raw values.
    pub precision: Option<Precision>,
}

impl Default for FftOptions {
    fn default() -> Self {
        Self {
            precision: Some(Precision::default()),
        }
    }
}

impl FftOptions {
    /// Options that skip output rounding entirely.
    #[must_use]
    pub fn raw() -> Self {
        Self { precision: None }
    }

    #[must_use]
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = Some(precision);
        self
    }

    #[must_use]
    pub fn without_rounding(mut self) -> Self {
        self.precision = None;
        self
    }
}

/// Computes the radix-2 DIT FFT of `input` under `options`.
///
/// If `input.len()` is not a power of two the signal is **zero-padded** to the
/// next power of two; the caller's slice is never modified. The returned
/// spectrum has length `next_power_of_two(input.len())`, or 0 for an empty
/// input.
///
/// # Example
///
/// ```
/// use radix2_fft::{fft_with_options, Complex64, FftOptions};
/// let spectrum = fft_with_options(&[1.0, -1.0, 1.0, -1.0], &FftOptions::raw());
/// assert!((spectrum[2] - Complex64::new(4.0, 0.0)).norm() < 1e-12);
/// ```
#[must_use]
pub fn fft_with_options<T: Copy + Into<Complex64>>(input: &[T], options: &FftOptions) -> Vec<Complex64> {
    let n_orig = input.len();
    let signal = zero_pad(input);
    if !is_power_of_two(n_orig) && n_orig > 0 {
        debug!("zero-padding signal from {n_orig} to {} samples", signal.len());
    }

    let mut spectrum = transform_power_of_two(&signal);
    if let Some(precision) = options.precision {
        normalize_spectrum(&mut spectrum, precision);
    }
    trace!("computed {}-point spectrum", spectrum.len());

    spectrum
}

/// Transforms every signal in `signals` independently.
///
/// Signals may have different lengths; each output equals the
/// single-signal [`fft_with_options`] result for the same input.
#[must_use]
pub fn fft_batch_with_options<T: Copy + Into<Complex64>>(
    signals: &[Vec<T>],
    options: &FftOptions,
) -> Vec<Vec<Complex64>> {
    debug!("transforming batch of {} signals", signals.len());
    signals
        .iter()
        .map(|signal| fft_with_options(signal, options))
        .collect()
}
