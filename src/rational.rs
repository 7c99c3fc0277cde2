//! Exact rational scalar used for matrix cells.
//!
//! Every quantity in the dataset originates as an integer or short decimal
//! in wiki text, so cells are built as exact rationals from the start and
//! only converted to floating point at the display boundary. Row reduction
//! over f64 produces spurious near-zero pivots; over rationals it cannot.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

pub type Rational = BigRational;

pub fn from_int(n: i64) -> Rational {
    Rational::from_integer(BigInt::from(n))
}

/// Parses a plain decimal literal ("2", "0.888", "-1.5") into an exact
/// rational. Scientific notation is not part of the wiki's number format
/// and is rejected.
pub fn parse_decimal(text: &str) -> Option<Rational> {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, f),
        None => (digits, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let int_value: BigInt = if int_part.is_empty() {
        BigInt::zero()
    } else {
        int_part.parse().ok()?
    };
    let frac_value: BigInt = if frac_part.is_empty() {
        BigInt::zero()
    } else {
        frac_part.parse().ok()?
    };
    let denom = num_traits::pow(BigInt::from(10), frac_part.len());
    let mut numer = int_value * &denom + frac_value;
    if negative {
        numer = -numer;
    }
    Some(Rational::new(numer, denom))
}

/// Presentation-boundary conversion; exactness ends here.
pub fn to_f64(value: &Rational) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
