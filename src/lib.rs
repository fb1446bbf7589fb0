#![cfg_attr(not(test), no_std)]

//! Desk-calculator engine for the numpad: token-driven input state machine,
//! fixed-width decimal display formatting and the keypad adapter that feeds it.

pub mod calculator;
pub mod config;
pub mod error;
pub mod keypad;
pub mod utils;

pub use calculator::{BinaryOp, Calculator, DisplayText, Sentinel, Token, UnaryOp};
pub use error::{CalcError, Result};
