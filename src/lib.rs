pub mod butterfly;
pub mod error;
pub mod fft;
pub mod normalize;
pub mod psd;
pub mod size;
pub mod twiddles;
pub mod utils;

pub use butterfly::transform;
pub use error::FftError;
pub use fft::{fft_batch_with_options, fft_with_options, FftOptions};
pub use normalize::{normalize, Precision};
pub use num_complex::Complex64;
pub use size::{is_power_of_two, next_power_of_two};
pub use twiddles::twiddle;

/// Computes the Fast Fourier Transform (FFT) of the given signal.
///
/// Accepts real (`f64`) or complex ([`Complex64`]) samples. Inputs whose
/// length is not a power of two are zero-padded to the next power of two, and
/// every coefficient is rounded to 3 decimal places.
///
/// # Parameters
///
/// - `input`: The time-domain signal. It is not modified.
///
/// # Returns
///
/// The spectrum, `next_power_of_two(input.len())` coefficients long (empty for
/// an empty input). Coefficient `k` is the component at frequency `k / N`.
///
/// # Example
///
/// ```
/// use radix2_fft::{fft, Complex64};
/// let spectrum = fft(&[1.0, 0.0, 0.0, 0.0]);
/// assert_eq!(spectrum, vec![Complex64::new(1.0, 0.0); 4]);
/// ```
#[must_use]
pub fn fft<T: Copy + Into<Complex64>>(input: &[T]) -> Vec<Complex64> {
    fft::fft_with_options(input, &FftOptions::default())
}

/// Computes the FFT of each signal in `signals`, with default options.
///
/// # Example
///
/// ```
/// use radix2_fft::fft_batch;
/// let spectra = fft_batch(&[vec![1.0, 1.0], vec![1.0, 0.0, 0.0]]);
/// assert_eq!(spectra[0].len(), 2);
/// assert_eq!(spectra[1].len(), 4);
/// ```
#[must_use]
pub fn fft_batch<T: Copy + Into<Complex64>>(signals: &[Vec<T>]) -> Vec<Vec<Complex64>> {
    fft::fft_batch_with_options(signals, &FftOptions::default())
}
