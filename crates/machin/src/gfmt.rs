//! printf-style `%g` formatting for `f64`
//!
//! Rust's `Display` for floats prints the shortest string that round-trips,
//! which is not what C's `%.17g` produces: `Display` gives
//! `3.141592653589793` where `%.17g` gives `3.1415926535897931`. This module
//! reproduces the `%g` conversion: round to a requested number of significant
//! digits, pick fixed or scientific notation from the decimal exponent of the
//! rounded value, and strip trailing zeros.

/// Significant digits needed to round-trip any `f64` exactly.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Format `value` the way C's `printf("%.<digits>g")` would.
///
/// A `digits` of zero is treated as one, matching the C rule. Non-finite
/// values render as `nan`, `inf`, `-inf`; zeros keep their sign (`0`, `-0`).
/// Scientific exponents carry an explicit sign and at least two digits
/// (`1e+17`, `1.0000000000000001e-05`).
pub fn format_g(value: f64, digits: usize) -> String {
    let digits = digits.max(1);

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to `digits` significant digits in scientific form first; the
    // exponent of the *rounded* value decides the notation, so a carry like
    // 9.99...e16 -> 1.0e17 picks the notation printf would.
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp_str) = sci
        .split_once('e')
        .expect("{:e} output always contains an exponent");
    let exp: i32 = exp_str
        .parse()
        .expect("{:e} exponent is always a valid integer");

    if exp < -4 || exp >= digits as i32 {
        // Scientific notation, printf-style signed two-digit exponent.
        let mantissa = strip_trailing_zeros(mantissa);
        let (sign, magnitude) = if exp < 0 { ('-', -exp) } else { ('+', exp) };
        format!("{mantissa}e{sign}{magnitude:02}")
    } else {
        // Fixed notation: `digits` significant digits total, so the number
        // of fractional digits is what remains after the integer part.
        let prec = (digits as i32 - 1 - exp).max(0) as usize;
        strip_trailing_zeros(&format!("{value:.prec$}")).to_string()
    }
}

/// Drop trailing zeros after a decimal point, and the point itself if bare.
fn strip_trailing_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0');
    s.strip_suffix('.').unwrap_or(s)
}

// =============================================================================
// Tests
// =============================================================================
