// src/linalg/polar.rs
//! Powers and roots of complex scalars in polar form.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::error::{LinalgError, LinalgResult};

/// Modulus and argument `(r, θ)` of `z`, with `θ` in `(-π, π]`
pub fn to_polar(z: Complex64) -> (f64, f64) {
    z.to_polar()
}

/// `r e^{iθ}`
pub fn from_polar(r: f64, theta: f64) -> Complex64 {
    Complex64::from_polar(r, theta)
}

/// De Moivre exponentiation: `(r e^{iθ})^n = r^n e^{inθ}`
///
/// Negative exponents are allowed except on zero.
pub fn powi(z: Complex64, exponent: i32) -> LinalgResult<Complex64> {
    let (r, theta) = to_polar(z);

    if r == 0.0 && exponent < 0 {
        return Err(LinalgError::InvalidArgument(format!(
            "cannot raise zero to the negative power {}",
            exponent
        )));
    }

    Ok(from_polar(r.powi(exponent), theta * exponent as f64))
}

/// All `n` complex `n`-th roots of `z`, ordered by increasing angle from the principal root
pub fn nth_roots(z: Complex64, n: u32) -> LinalgResult<Vec<Complex64>> {
    if n == 0 {
        return Err(LinalgError::InvalidArgument("root degree must be positive".to_string()));
    }

    let (r, theta) = to_polar(z);
    let inv = 1.0 / n as f64;
    let modulus = r.powf(inv);

    Ok((0..n)
        .map(|k| from_polar(modulus, (theta + 2.0 * PI * k as f64) * inv))
        .collect())
}
