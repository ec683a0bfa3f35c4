//! Machin's-formula pi calculator
//!
//! Evaluates pi = 16*atan(1/5) - 4*atan(1/239) in double precision and
//! renders the result the way C's `printf("%.17g")` would.

pub mod formula;
pub mod gfmt;

pub use formula::machin_pi;
pub use gfmt::{MAX_SIGNIFICANT_DIGITS, format_g};

/// Render the program's single output line, without the trailing newline.
pub fn report_line() -> String {
    format!("Machin's PI: {}", format_g(machin_pi(), MAX_SIGNIFICANT_DIGITS))
}
