// Recursive Cooley-Tukey radix-2 decimation-in-time core.
// Each level splits its input into even- and odd-indexed halves, transforms
// both, then merges them with one butterfly per output pair:
//
//   t          = W(m, k) · odd[k]
//   out[k]     = even[k] + t
//   out[k+m/2] = even[k] - t
//
// Every level works on freshly owned buffers; nothing is shared between
// calls apart from the read-only twiddle table of the current transform.
use num_complex::Complex64;

use crate::size::is_power_of_two;
use crate::twiddles::TwiddleTable;
use crate::FftError;

/// Computes the unscaled DFT `X[k] = Σ x[n]·e^(-j2πkn/N)` of `signal`.
///
/// Lengths 0 and 1 are returned unchanged. Any other length must be a power
/// of two; the public pipeline ([`crate::fft`]) zero-pads for you, this entry
/// point does not.
///
/// # Errors
///
/// [`FftError::NotPowerOfTwo`] when `signal.len()` is neither 0, 1, nor a
/// power of two.
///
/// ```
/// # use radix2_fft::{transform, Complex64};
/// let spectrum = transform(&[Complex64::new(1.0, 0.0); 4]).unwrap();
/// assert_eq!(spectrum[0], Complex64::new(4.0, 0.0));
/// assert!(transform(&[Complex64::new(1.0, 0.0); 3]).is_err());
/// ```
pub fn transform(signal: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
    let n = signal.len();
    if n > 1 && !is_power_of_two(n) {
        return Err(FftError::NotPowerOfTwo { len: n });
    }
    Ok(transform_power_of_two(signal))
}

/// Recursive core without the length check. `signal.len()` must be 0 or a
/// power of two.
pub(crate) fn transform_power_of_two(signal: &[Complex64]) -> Vec<Complex64> {
    debug_assert!(signal.len() <= 1 || is_power_of_two(signal.len()));
    let table = TwiddleTable::new(signal.len());
    split_and_combine(signal, &table)
}

fn split_and_combine(x: &[Complex64], table: &TwiddleTable) -> Vec<Complex64> {
    let n = x.len();
    if n <= 1 {
        return x.to_vec();
    }

    let even: Vec<Complex64> = x.iter().step_by(2).copied().collect();
    let odd: Vec<Complex64> = x.iter().skip(1).step_by(2).copied().collect();

    let dft_even = split_and_combine(&even, table);
    let dft_odd = split_and_combine(&odd, table);

    combine(&dft_even, &dft_odd, table)
}

/// Merges two half-size spectra into one spectrum of twice their length.
fn combine(dft_even: &[Complex64], dft_odd: &[Complex64], table: &TwiddleTable) -> Vec<Complex64> {
    let half = dft_even.len();
    let n = half * 2;

    let mut result = vec![Complex64::new(0.0, 0.0); n];
    let (lower, upper) = result.split_at_mut(half);
    for (k, ((lo, hi), (&e, &o))) in lower
        .iter_mut()
        .zip(upper.iter_mut())
        .zip(dft_even.iter().zip(dft_odd))
        .enumerate()
    {
        let (sum, diff) = butterfly(e, o, table.factor(n, k));
        *lo = sum;
        *hi = diff;
    }
    result
}

/// Radix-2 butterfly `(a + w·b, a - w·b)`.
#[inline]
fn butterfly(a: Complex64, b: Complex64, w: Complex64) -> (Complex64, Complex64) {
    let t = w * b;
    (a + t, a - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn assert_close(actual: &[Complex64], expected: &[Complex64]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).norm() < 1e-12, "[{i}]: got {a}, expected {e}");
        }
    }

    #[test]
    fn butterfly_adds_and_subtracts_rotated_odd_term() {
        let (sum, diff) = butterfly(c(1.0, 0.0), c(0.0, 1.0), c(0.0, -1.0));
        assert_eq!(sum, c(2.0, 0.0));
        assert_eq!(diff, c(0.0, 0.0));
    }

    #[test]
    fn degenerate_lengths_are_identity() {
        assert!(transform(&[]).unwrap().is_empty());
        assert_eq!(transform(&[c(2.5, -1.0)]).unwrap(), vec![c(2.5, -1.0)]);
    }

    #[test]
    fn two_point_transform_is_sum_and_difference() {
        let out = transform(&[c(3.0, 1.0), c(1.0, -2.0)]).unwrap();
        assert_close(&out, &[c(4.0, -1.0), c(2.0, 3.0)]);
    }

    #[test]
    fn four_point_transform_matches_hand_computation() {
        // X[k] = Σ x[n]·(-j)^(kn)
        let x = [c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0), c(4.0, 0.0)];
        let out = transform(&x).unwrap();
        assert_close(&out, &[c(10.0, 0.0), c(-2.0, 2.0), c(-2.0, 0.0), c(-2.0, -2.0)]);
    }

    #[test]
    fn complex_exponential_lands_in_one_bin() {
        // x[n] = e^(j2π·3n/8) puts all its energy in bin 3.
        let n = 8;
        let x: Vec<Complex64> = (0..n)
            .map(|i| Complex64::from_polar(1.0, 2.0 * std::f64::consts::PI * 3.0 * i as f64 / n as f64))
            .collect();
        let out = transform(&x).unwrap();
        for (k, value) in out.iter().enumerate() {
            let expected = if k == 3 { c(8.0, 0.0) } else { c(0.0, 0.0) };
            assert!((value - expected).norm() < 1e-9, "bin {k}: {value}");
        }
    }

    #[test]
    fn rejects_lengths_that_are_not_powers_of_two() {
        for len in [3usize, 5, 6, 12] {
            let x = vec![c(1.0, 0.0); len];
            assert_eq!(transform(&x), Err(FftError::NotPowerOfTwo { len }));
        }
    }

    #[test]
    fn input_is_left_untouched() {
        let x = vec![c(1.0, 0.0), c(0.0, 1.0), c(-1.0, 0.0), c(0.0, -1.0)];
        let before = x.clone();
        let _ = transform(&x).unwrap();
        assert_eq!(x, before);
    }
}
