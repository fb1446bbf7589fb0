// Keypad adapter
// Turns debounced switch samples from the 6x4 matrix into calculator tokens.

use log::trace;

use crate::calculator::{BinaryOp, Token, UnaryOp};
use crate::config::DEBOUNCE_MS;
use crate::utils::debounce::Debounce;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    F1,
    F2,
    F3,
    F4,
    Lock,
    Div,
    Mul,
    Sub,
    Add,
    Enter,
    Dot,
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
}

pub const ROWS: usize = 6;
pub const COLS: usize = 4;

pub const KEYMAP: [[Key; COLS]; ROWS] = [
    [Key::F1, Key::F2, Key::F3, Key::F4],
    [Key::Lock, Key::Div, Key::Mul, Key::Sub],
    [Key::D7, Key::D8, Key::D9, Key::Add],
    [Key::D4, Key::D5, Key::D6, Key::Add],
    [Key::D1, Key::D2, Key::D3, Key::Enter],
    [Key::D0, Key::D0, Key::Dot, Key::Enter],
];

impl Key {
    /// Token for this key. `lock` is true while the Lock key is held and
    /// selects the second layer (unary functions, memory, all-clear).
    pub fn token(self, lock: bool) -> Option<Token> {
        let token = match (self, lock) {
            (Key::Lock, _) => return None,

            (Key::F1, false) => Token::Backspace,
            (Key::F2, false) => Token::ClearEntry,
            (Key::F3, false) => Token::MemoryRecall,
            (Key::F4, false) => Token::MemoryAdd,
            (Key::F1, true) => Token::UnaryOp(UnaryOp::Reciprocal),
            (Key::F2, true) => Token::UnaryOp(UnaryOp::SquareRoot),
            (Key::F3, true) => Token::UnaryOp(UnaryOp::Square),
            (Key::F4, true) => Token::MemorySubtract,

            (Key::Div, false) => Token::BinaryOp(BinaryOp::Divide),
            (Key::Mul, false) => Token::BinaryOp(BinaryOp::Multiply),
            (Key::Sub, false) => Token::BinaryOp(BinaryOp::Subtract),
            (Key::Add, false) => Token::BinaryOp(BinaryOp::Add),
            (Key::Div, true) => Token::UnaryOp(UnaryOp::Percent),
            (Key::Mul, true) => Token::MemoryClear,
            (Key::Sub, true) => Token::UnaryOp(UnaryOp::Negate),
            (Key::Add, true) => return None,

            (Key::Enter, false) => Token::Equals,
            (Key::Enter, true) => Token::AllClear,

            (Key::Dot, _) => Token::Digit('.'),
            (Key::D0, _) => Token::Digit('0'),
            (Key::D1, _) => Token::Digit('1'),
            (Key::D2, _) => Token::Digit('2'),
            (Key::D3, _) => Token::Digit('3'),
            (Key::D4, _) => Token::Digit('4'),
            (Key::D5, _) => Token::Digit('5'),
            (Key::D6, _) => Token::Digit('6'),
            (Key::D7, _) => Token::Digit('7'),
            (Key::D8, _) => Token::Digit('8'),
            (Key::D9, _) => Token::Digit('9'),
        };

        Some(token)
    }
}

/// Debounced state of every switch in the matrix
pub struct Keypad {
    keys: [[Debounce<bool>; COLS]; ROWS],
}

impl Keypad {
    pub fn new() -> Self {
        Self {
            keys: [[Debounce::new(false, DEBOUNCE_MS); COLS]; ROWS],
        }
    }

    /// Whether any switch mapped to `key` is held down
    pub fn is_pressed(&self, key: Key) -> bool {
        KEYMAP
            .iter()
            .zip(self.keys.iter())
            .flat_map(|(keys, states)| keys.iter().zip(states.iter()))
            .any(|(mapped, state)| *mapped == key && state.value)
    }

    /// Feed one switch sample taken at `now_ms`.
    /// Returns a token when the switch settles into the pressed state.
    pub fn scan(&mut self, row: usize, col: usize, pressed: bool, now_ms: u64) -> Option<Token> {
        let key = *KEYMAP.get(row)?.get(col)?;
        let state = &mut self.keys[row][col];

        if !state.measure(pressed, now_ms) || !state.value {
            return None;
        }

        let token = key.token(self.is_pressed(Key::Lock));
        trace!("R{row}C{col} {key:?} -> {token:?}");

        token
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}
