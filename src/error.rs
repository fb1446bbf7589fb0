//! Error types for the calculator engine

use thiserror::Error;

/// Arithmetic failures. The engine never surfaces these to the caller;
/// they are turned into display sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("result does not fit the display")]
    Overflow,

    #[error("result is not a number")]
    Indeterminate,
}

impl From<rust_decimal::Error> for CalcError {
    fn from(err: rust_decimal::Error) -> Self {
        match err {
            rust_decimal::Error::ExceedsMaximumPossibleValue
            | rust_decimal::Error::LessThanMinimumPossibleValue => Self::Overflow,
            _ => Self::Indeterminate,
        }
    }
}

pub type Result<T> = core::result::Result<T, CalcError>;
