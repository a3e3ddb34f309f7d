//! Power-of-two sizing for radix-2 transforms.

use num_complex::Complex64;

/// Returns `true` when `n` has exactly one bit set.
///
/// Zero is not a power of two; one is (`2^0`).
///
/// ```
/// # use radix2_fft::is_power_of_two;
/// assert!(is_power_of_two(1));
/// assert!(is_power_of_two(1024));
/// assert!(!is_power_of_two(0));
/// assert!(!is_power_of_two(12));
/// ```
#[must_use]
pub const fn is_power_of_two(n: usize) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// Smallest power of two greater than or equal to `n`.
///
/// Computed from the bit length of `n - 1`, so a power of two maps to
/// itself and `1` maps to `1`. `0` also yields `1`.
///
/// # Panics
///
/// Panics if the result does not fit in a `usize`, i.e. `n > 2^(usize::BITS - 1)`.
///
/// ```
/// # use radix2_fft::next_power_of_two;
/// assert_eq!(next_power_of_two(1), 1);
/// assert_eq!(next_power_of_two(5), 8);
/// assert_eq!(next_power_of_two(8), 8);
/// ```
#[must_use]
pub const fn next_power_of_two(n: usize) -> usize {
    match 1usize.checked_shl(bit_length(n.saturating_sub(1))) {
        Some(power) => power,
        None => panic!("next power of two overflows usize"),
    }
}

/// Number of bits needed to represent `m` (0 for `m == 0`).
const fn bit_length(m: usize) -> u32 {
    usize::BITS - m.leading_zeros()
}

/// Copies `signal` into a new buffer extended with trailing zeros up to
/// [`next_power_of_two`] of its length. An empty signal stays empty.
#[must_use]
pub fn zero_pad<T: Copy + Into<Complex64>>(signal: &[T]) -> Vec<Complex64> {
    let len = signal.len();
    let target = if len == 0 { 0 } else { next_power_of_two(len) };

    let mut padded = Vec::with_capacity(target);
    padded.extend(signal.iter().map(|&s| s.into()));
    padded.resize(target, Complex64::new(0.0, 0.0));
    padded
}
