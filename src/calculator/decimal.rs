// Decimal value helpers on top of rust_decimal
// The accumulator keeps EXTENDED_PRECISION fractional digits, the display fewer.

use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::EXTENDED_PRECISION;
use crate::error::{CalcError, Result};

const LITERAL_CAPACITY: usize = 64;

/// Parse a calculator literal such as `""`, `"."`, `"5."`, `".5"` or `"-12.25"`.
///
/// An empty body (`""`, `"."`, `"-"`) is zero. Anything that is not an optionally
/// signed run of digits with at most one decimal point is indeterminate.
pub fn parse(literal: &str) -> Result<Decimal> {
    let (negative, body) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal),
    };

    if body.matches('.').count() > 1 || !body.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(CalcError::Indeterminate);
    }

    let body = body.strip_suffix('.').unwrap_or(body);
    if body.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let mut text: heapless::String<LITERAL_CAPACITY> = heapless::String::new();
    if negative {
        text.push('-').map_err(|_| CalcError::Overflow)?;
    }
    if body.starts_with('.') {
        text.push('0').map_err(|_| CalcError::Overflow)?;
    }
    text.push_str(body).map_err(|_| CalcError::Overflow)?;

    let value = Decimal::from_str(&text)?;
    Ok(canonical(value))
}

/// Round to `dp` fractional digits, ties to even.
pub fn round_half_even(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
}

/// Drop everything past `dp` fractional digits.
pub fn truncate(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::ToZero)
}

/// Round an intermediate result to the accumulator precision.
pub fn extend(value: Decimal) -> Decimal {
    canonical(round_half_even(value, EXTENDED_PRECISION))
}

/// One unit in the `dp`-th fractional place.
pub fn unit(dp: u32) -> Decimal {
    Decimal::new(1, dp)
}

/// Number of digits before the decimal point; zero counts as one digit.
pub fn integer_digits(value: Decimal) -> u32 {
    let integer = value.mantissa().unsigned_abs() / pow10(value.scale());
    integer.checked_ilog10().map_or(1, |log| log + 1)
}

/// Fractional digits of `value`, most significant first, exactly `value.scale()` of them.
pub fn fraction_digits(value: Decimal) -> impl Iterator<Item = u8> {
    let scale = value.scale();
    let fraction = value.mantissa().unsigned_abs() % pow10(scale);

    (0..scale).map(move |place| ((fraction / pow10(scale - 1 - place)) % 10) as u8)
}

/// Zero never carries a sign.
pub fn canonical(mut value: Decimal) -> Decimal {
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    value
}

fn pow10(exp: u32) -> u128 {
    10u128.pow(exp)
}
