// Display formatter
// Turns a literal plus a fractional-digit budget into the exact text to paint.

use core::fmt::Write;

use log::trace;
use rust_decimal::Decimal;

use super::decimal;
use crate::config::{BUFFER_WIDTH, DIGIT_BUDGET, TEXT_CAPACITY};
use crate::error::{CalcError, Result};

/// Rendered value, always ready to paint verbatim
pub type DisplayText = heapless::String<TEXT_CAPACITY>;

/// In-band stand-ins for values that cannot be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    Overflow,
    Indeterminate,
}

impl Sentinel {
    pub fn text(self) -> &'static str {
        match self {
            Self::Overflow => "OUT_OF_MEMORY",
            Self::Indeterminate => "NOT_A_NUMBER",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        [Self::Overflow, Self::Indeterminate]
            .into_iter()
            .find(|sentinel| sentinel.text() == text)
    }

    pub fn display(self) -> DisplayText {
        let mut text = DisplayText::new();
        // Both sentinels are shorter than TEXT_CAPACITY
        let _ = text.push_str(self.text());
        text
    }
}

impl From<CalcError> for Sentinel {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::Overflow => Self::Overflow,
            CalcError::Indeterminate => Self::Indeterminate,
        }
    }
}

/// Format a literal with at most `precision` fractional digits.
///
/// Sentinels pass through unchanged, empty input shows as `"0."`, and anything
/// needing more than [`DIGIT_BUDGET`] integer digits becomes the overflow sentinel.
pub fn format(literal: &str, precision: u32) -> DisplayText {
    if let Some(sentinel) = Sentinel::parse(literal) {
        return sentinel.display();
    }

    match decimal::parse(literal).and_then(|value| format_value(value, precision)) {
        Ok(text) => text,
        Err(err) => {
            trace!("format {literal:?} failed: {err}");
            Sentinel::from(err).display()
        }
    }
}

/// Format a decimal with at most `precision` fractional digits.
///
/// The fractional budget shrinks as the integer part grows so the total stays
/// within [`DIGIT_BUDGET`]. Values that already fit are shown with their own
/// scale (so live entry of `1.50` keeps its zero). Computed results are kept
/// at extended precision, so they always take the other path: rounded
/// half-to-even, then cleaned of a trailing accumulator artifact.
pub fn format_value(value: Decimal, precision: u32) -> Result<DisplayText> {
    let integer_digits = decimal::integer_digits(value);
    if integer_digits > DIGIT_BUDGET {
        return Err(CalcError::Overflow);
    }

    let budget = precision.min(DIGIT_BUDGET - integer_digits);
    let shown = if value.scale() <= budget {
        value
    } else {
        snap(decimal::round_half_even(value, budget)).normalize()
    };
    let shown = decimal::canonical(shown);

    // Rounding may have carried into a new integer digit
    if decimal::integer_digits(shown) > DIGIT_BUDGET {
        return Err(CalcError::Overflow);
    }

    render(shown)
}

/// Clean a trailing run of `BUFFER_WIDTH` zeros or nines off the fraction.
///
/// Only a run that reaches the last rounded place counts. A zero run cuts the
/// value at the start of the run. A nine run cuts it there and adds one unit
/// in the last kept place, away from zero.
fn snap(rounded: Decimal) -> Decimal {
    let Some((start, digit)) = trailing_run(rounded) else {
        return rounded;
    };

    let cut = decimal::truncate(rounded, start);
    if digit == 0 {
        return cut;
    }

    let unit = decimal::unit(start);
    if rounded.is_sign_negative() {
        cut - unit
    } else {
        cut + unit
    }
}

/// Start and digit of the zero or nine run ending the fraction, if long enough
fn trailing_run(value: Decimal) -> Option<(u32, u8)> {
    let mut run_start = 0;
    let mut run_digit = u8::MAX;
    let mut places = 0;

    for (place, digit) in (0u32..).zip(decimal::fraction_digits(value)) {
        if digit != run_digit {
            run_start = place;
            run_digit = digit;
        }
        places = place + 1;
    }

    let run_len = places - run_start;
    let artifact = run_digit == 0 || run_digit == 9;

    (artifact && run_len >= BUFFER_WIDTH).then_some((run_start, run_digit))
}

fn render(value: Decimal) -> Result<DisplayText> {
    let mut text = DisplayText::new();
    write!(text, "{value}").map_err(|_| CalcError::Overflow)?;

    if !text.contains('.') {
        text.push('.').map_err(|_| CalcError::Overflow)?;
    }

    Ok(text)
}
