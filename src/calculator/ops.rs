// Arithmetic dispatch table
// Every result leaves here rounded to the accumulator precision.

use rust_decimal::{Decimal, MathematicalOps};

use super::decimal;
use crate::error::{CalcError, Result};

/// Binary operation awaiting its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Glyph used in the equation line
    pub fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.glyph() == glyph)
    }

    pub fn apply(self, lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
        let result = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Divide => {
                if rhs.is_zero() {
                    return Err(CalcError::Indeterminate);
                }
                lhs.checked_div(rhs)
            }
        };

        result.map(decimal::extend).ok_or(CalcError::Overflow)
    }
}

/// Operation applied in place to the primary value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Reciprocal,
    Percent,
    SquareRoot,
    Square,
    Negate,
}

impl UnaryOp {
    pub fn apply(self, value: Decimal) -> Result<Decimal> {
        let result = match self {
            Self::Reciprocal => {
                if value.is_zero() {
                    return Err(CalcError::Indeterminate);
                }
                Decimal::ONE.checked_div(value).ok_or(CalcError::Overflow)?
            }
            Self::Percent => value
                .checked_div(Decimal::ONE_HUNDRED)
                .ok_or(CalcError::Overflow)?,
            // sqrt() is None for negative input
            Self::SquareRoot => value.sqrt().ok_or(CalcError::Indeterminate)?,
            Self::Square => value.checked_mul(value).ok_or(CalcError::Overflow)?,
            Self::Negate => -value,
        };

        Ok(decimal::extend(result))
    }
}
