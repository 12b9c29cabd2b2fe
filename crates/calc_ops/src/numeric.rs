//! Exact conversion between user-entered decimal text and `BigRational`.
//!
//! Parsing goes digit-for-digit through an integer mantissa and a power
//! of ten, so `0.1` becomes exactly 1/10. Formatting prints the exact
//! decimal expansion when one exists and rounds to a fixed number of
//! places otherwise.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

/// Decimal places printed for results with no finite decimal expansion.
const DISPLAY_PRECISION: usize = 12;

/// Parse an operand entered at the prompt into an exact rational.
///
/// Accepts optional sign, integer part, and fractional part
/// (`42`, `-3.5`, `+0.25`, `.5`). Returns `None` for anything else;
/// operand validation is an expected outcome, not an error.
pub fn parse_operand(input: &str) -> Option<BigRational> {
    let s = input.trim();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let mantissa: BigInt = format!("{int_part}{frac_part}").parse().ok()?;
    let denom = num_traits::pow(BigInt::from(10), frac_part.len());
    let value = BigRational::new(mantissa, denom);
    Some(if negative { -value } else { value })
}

/// Render a rational the way a desk calculator would: integers without a
/// point, finite decimals exactly, everything else rounded half-up to
/// [`DISPLAY_PRECISION`] places with trailing zeros trimmed.
pub fn format_rational(value: &BigRational) -> String {
    if value.is_integer() {
        return value.to_integer().to_string();
    }

    let negative = value.is_negative();
    let num = value.numer().abs();
    let den = value.denom().abs();

    // Scale to DISPLAY_PRECISION digits, rounding half-up on the digit
    // after the last kept place.
    let scale = num_traits::pow(BigInt::from(10), DISPLAY_PRECISION);
    let scaled = (&num * &scale + &den / BigInt::from(2)) / &den;

    let digits = scaled.to_string();
    let digits = if digits.len() <= DISPLAY_PRECISION {
        format!("{digits:0>width$}", width = DISPLAY_PRECISION + 1)
    } else {
        digits
    };
    let split = digits.len() - DISPLAY_PRECISION;
    let (int_part, frac_part) = digits.split_at(split);
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if negative && !(int_part.bytes().all(|b| b == b'0') && frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
