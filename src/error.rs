use thiserror::Error;

/// Errors reported by the transform and its input helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FftError {
    /// The recursive core was handed a length it cannot split evenly.
    #[error("signal length {len} is not a power of two")]
    NotPowerOfTwo { len: usize },
    /// Rounding precision beyond what an `f64` can represent meaningfully.
    #[error("precision of {decimals} decimal places exceeds the maximum of {max}", max = crate::Precision::MAX_DECIMALS)]
    InvalidPrecision { decimals: u32 },
    /// A token in textual input did not parse as a real number.
    #[error("invalid sample {token:?}: expected a real number")]
    InvalidSample { token: String },
}
