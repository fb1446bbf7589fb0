// Input tokens accepted by the calculator

use super::ops::{BinaryOp, UnaryOp};

/// One discrete keystroke, already decoded by the adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `0`-`9` or `.`
    Digit(char),
    BinaryOp(BinaryOp),
    UnaryOp(UnaryOp),
    Equals,
    AllClear,
    ClearEntry,
    Backspace,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
}

impl Token {
    /// Map a plain key character to a token
    pub fn from_key(key_char: char) -> Option<Self> {
        let token = match key_char {
            '0'..='9' | '.' => Self::Digit(key_char),
            '+' => Self::BinaryOp(BinaryOp::Add),
            '-' => Self::BinaryOp(BinaryOp::Subtract),
            '*' => Self::BinaryOp(BinaryOp::Multiply),
            '/' => Self::BinaryOp(BinaryOp::Divide),
            'r' => Self::UnaryOp(UnaryOp::Reciprocal),
            '%' => Self::UnaryOp(UnaryOp::Percent),
            'q' => Self::UnaryOp(UnaryOp::SquareRoot),
            '^' => Self::UnaryOp(UnaryOp::Square),
            'n' => Self::UnaryOp(UnaryOp::Negate),
            '=' | '\n' | '\r' => Self::Equals,
            'C' => Self::AllClear,
            'E' => Self::ClearEntry,
            'B' | '\u{8}' => Self::Backspace,
            'L' => Self::MemoryClear,
            'R' => Self::MemoryRecall,
            'P' => Self::MemoryAdd,
            'M' => Self::MemorySubtract,
            _ => return None,
        };

        Some(token)
    }
}
