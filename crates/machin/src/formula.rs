//! Machin's arctangent identity
//!
//! pi = 16*atan(1/5) - 4*atan(1/239), evaluated in double precision.
//! John Machin used this identity in 1706 to compute pi to 100 decimal
//! places by hand; here the two arctangents come straight from libm.

/// Coefficient on the atan(1/5) term.
const ATAN_FIFTH_COEFF: f64 = 16.0;

/// Coefficient on the atan(1/239) term.
const ATAN_239TH_COEFF: f64 = 4.0;

/// Compute the double-precision approximation of pi from Machin's identity.
///
/// Takes no input: both arctangent arguments are compile-time constants,
/// and `f64::atan` is a pure function, so every call returns the same
/// bit pattern.
pub fn machin_pi() -> f64 {
    let a = (1.0_f64 / 5.0).atan();
    let b = (1.0_f64 / 239.0).atan();
    ATAN_FIFTH_COEFF * a - ATAN_239TH_COEFF * b
}

// =============================================================================
// Tests
// =============================================================================
