//! Shared test helpers compiled into every integration-test binary.
//! Items may not all be used in every binary, so dead_code is suppressed.
#![allow(dead_code)]

use std::f64::consts::PI;

use radix2_fft::Complex64;

/// Maximum absolute error tolerated against analytical values. Outputs rounded
/// to 3 decimals may be off by half a unit in the last place on each side.
pub const EPSILON: f64 = 1e-3;

/// Tolerance for unrounded outputs compared against the reference DFT.
pub const RAW_EPSILON: f64 = 1e-9;

pub fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

pub fn assert_approx(actual: Complex64, expected: Complex64, label: &str) {
    assert_approx_within(actual, expected, EPSILON, label);
}

pub fn assert_approx_within(actual: Complex64, expected: Complex64, tolerance: f64, label: &str) {
    let diff = (actual - expected).norm();
    assert!(
        diff <= tolerance,
        "{}: got {:.6}, expected {:.6}  (diff {:.2e})",
        label,
        actual,
        expected,
        diff,
    );
}

pub fn assert_slice_approx(actual: &[Complex64], expected: &[Complex64], label: &str) {
    assert_slice_approx_within(actual, expected, EPSILON, label);
}

pub fn assert_slice_approx_within(
    actual: &[Complex64],
    expected: &[Complex64],
    tolerance: f64,
    label: &str,
) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{}: length mismatch ({} vs {})",
        label,
        actual.len(),
        expected.len()
    );
    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_approx_within(a, e, tolerance, &format!("{label}[{i}]"));
    }
}

/// Direct O(N²) evaluation of `X[k] = Σ x[n]·e^(-j2πkn/N)`.
pub fn naive_dft(x: &[Complex64]) -> Vec<Complex64> {
    let n = x.len();
    (0..n)
        .map(|k| {
            x.iter()
                .enumerate()
                .map(|(t, &v)| {
                    let angle = -2.0 * PI * ((k * t) % n) as f64 / n as f64;
                    v * Complex64::from_polar(1.0, angle)
                })
                .sum()
        })
        .collect()
}

pub fn to_complex(x: &[f64]) -> Vec<Complex64> {
    x.iter().map(|&v| c(v, 0.0)).collect()
}
