//! Output rounding for deterministic, human-stable spectra.
//!
//! Each component becomes the `f64` nearest to its value rounded to
//! `decimals` places. Exact ties go away from zero (the behaviour of
//! [`f64::round`]), and `-0.0` is folded to `0.0` so that noise such as
//! `-1e-17` prints as `0`.

use num_complex::Complex64;

use crate::FftError;

/// Number of decimal places kept by the output normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Precision(u32);

impl Precision {
    /// Beyond 15 places an `f64` carries no further decimal information.
    pub const MAX_DECIMALS: u32 = 15;

    /// # Errors
    ///
    /// [`FftError::InvalidPrecision`] if `decimals` exceeds [`Self::MAX_DECIMALS`].
    pub fn new(decimals: u32) -> Result<Self, FftError> {
        if decimals > Self::MAX_DECIMALS {
            return Err(FftError::InvalidPrecision { decimals });
        }
        Ok(Self(decimals))
    }

    #[must_use]
    pub const fn decimals(self) -> u32 {
        self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(3)
    }
}

/// At or above 2^52 every `f64` is an integer.
const INTEGRAL_THRESHOLD: f64 = (1u64 << 52) as f64;

/// Rounds one real component to `precision` decimal places.
///
/// Values with no digits below `precision` are returned unchanged.
#[must_use]
pub fn round_component(value: f64, precision: Precision) -> f64 {
    // Every product stays below 2^53, so the scale is exact.
    let scale = (0..precision.0).fold(1.0f64, |scale, _| scale * 10.0);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= INTEGRAL_THRESHOLD {
        return value;
    }

    // `scaled` may have been rounded onto a .5 tie; the fused residual tells
    // which side of the tie the exact product `value * scale` lies on.
    let residual = value.mul_add(scale, -scaled);
    let whole = if (scaled - scaled.trunc()).abs() == 0.5 && residual != 0.0 {
        if residual > 0.0 {
            scaled.ceil()
        } else {
            scaled.floor()
        }
    } else {
        scaled.round()
    };

    let rounded = whole / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Rounds both components of `c`.
///
/// ```
/// # use radix2_fft::{normalize, Complex64, Precision};
/// let c = normalize(Complex64::new(0.12345, -1e-17), Precision::default());
/// assert_eq!(c, Complex64::new(0.123, 0.0));
/// ```
#[must_use]
pub fn normalize(c: Complex64, precision: Precision) -> Complex64 {
    Complex64::new(
        round_component(c.re, precision),
        round_component(c.im, precision),
    )
}

/// Applies [`normalize`] to every coefficient in place.
pub fn normalize_spectrum(spectrum: &mut [Complex64], precision: Precision) {
    for c in spectrum.iter_mut() {
        *c = normalize(*c, precision);
    }
}
