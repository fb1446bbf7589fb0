// Calculator engine
// Evaluates strictly left to right with one pending operation, like a desk calculator.

pub mod decimal;
pub mod equation;
pub mod format;
pub mod ops;
mod token;

use core::fmt::Write;

use log::{debug, trace, warn};
use rust_decimal::Decimal;

pub use equation::Equation;
pub use format::{DisplayText, Sentinel, format, format_value};
pub use ops::{BinaryOp, UnaryOp};
pub use token::Token;

use crate::config::{DIGIT_BUDGET, EQUATION_PRECISION, TEXT_CAPACITY};
use crate::error::{CalcError, Result};

/// Calculator state
#[derive(Debug, Clone)]
pub struct Calculator {
    /// Digits being typed, the last result at extended precision, or a sentinel
    primary: heapless::String<TEXT_CAPACITY>,
    /// Left operand of the pending operation
    partial: Decimal,
    /// Memory register
    memory: Decimal,
    /// History line
    equation: Equation,
    /// Operation waiting for its right operand
    pending: Option<BinaryOp>,
    /// Next digit extends `primary` rather than starting a new entry
    edit_mode: bool,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            primary: heapless::String::new(),
            partial: Decimal::ZERO,
            memory: Decimal::ZERO,
            equation: Equation::new(),
            pending: None,
            edit_mode: true,
        }
    }

    /// Return to the power-on state, memory register included
    pub fn reset(&mut self) {
        self.clear_all();
        self.memory = Decimal::ZERO;
    }

    /// Handle a single token
    /// Returns true if display needs update
    pub fn handle_token(&mut self, token: Token) -> bool {
        trace!("token {token:?}");

        let primary_before = self.primary_text();
        let equation_before = self.equation.clone();

        match token {
            Token::Digit(digit) => self.push_digit(digit),
            Token::BinaryOp(op) => self.push_operator(op),
            Token::UnaryOp(op) => self.apply_unary(op),
            Token::Equals => self.equals(),
            Token::AllClear => self.clear_all(),
            Token::ClearEntry => self.primary.clear(),
            Token::Backspace => self.backspace(),
            Token::MemoryClear => self.memory = Decimal::ZERO,
            Token::MemoryRecall => self.memory_recall(),
            Token::MemoryAdd => self.memory_update(BinaryOp::Add),
            Token::MemorySubtract => self.memory_update(BinaryOp::Subtract),
        }

        self.primary_text() != primary_before || self.equation != equation_before
    }

    /// Handle a plain key character, see [`Token::from_key`]
    pub fn handle_key(&mut self, key_char: char) -> bool {
        match Token::from_key(key_char) {
            Some(token) => self.handle_token(token),
            None => false,
        }
    }

    /// Primary display line, `"0."` when nothing has been entered
    pub fn primary_text(&self) -> DisplayText {
        format(&self.primary, DIGIT_BUDGET)
    }

    /// Equation history line
    pub fn equation_text(&self) -> &str {
        self.equation.as_str()
    }

    /// Raw primary literal, before formatting
    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn partial(&self) -> Decimal {
        self.partial
    }

    pub fn memory(&self) -> Decimal {
        self.memory
    }

    pub fn pending(&self) -> Option<BinaryOp> {
        self.pending
    }

    pub fn is_editing(&self) -> bool {
        self.edit_mode
    }

    /// Error currently shown on the primary line, if any
    pub fn sentinel(&self) -> Option<Sentinel> {
        Sentinel::parse(&self.primary)
    }

    fn clear_all(&mut self) {
        self.primary.clear();
        self.partial = Decimal::ZERO;
        self.equation.clear();
        self.pending = None;
        self.edit_mode = true;
    }

    fn push_digit(&mut self, digit: char) {
        if !(digit.is_ascii_digit() || digit == '.') {
            return;
        }

        // a finished result or an error is replaced by the new entry
        if !self.edit_mode || self.sentinel().is_some() {
            self.primary.clear();
            self.edit_mode = true;
        }
        if self.equation.sentinel().is_some() {
            self.equation.clear();
        }

        if digit == '.' && self.primary.contains('.') {
            return;
        }
        if digit_count(&self.primary) >= DIGIT_BUDGET as usize {
            return;
        }

        if digit != '.' && self.primary.as_str() == "0" {
            self.primary.clear();
        }
        if digit == '0' && self.primary.is_empty() {
            return;
        }

        // digit budget keeps this well inside the buffer
        let _ = self.primary.push(digit);
    }

    fn push_operator(&mut self, op: BinaryOp) {
        if self.equation.sentinel().is_some() {
            self.equation.clear();
        }

        // operator changed before an operand was typed
        if self.primary.is_empty() && self.equation.trailing_operator().is_some() {
            trace!("operator replaced with {op:?}");
            self.equation.replace_operator(op);
            self.pending = Some(op);
            return;
        }

        let snapshot = format(&self.primary, EQUATION_PRECISION);
        if let Some(sentinel) = Sentinel::parse(&snapshot) {
            self.fail_equation(sentinel);
            return;
        }

        let resolved = match self.pending {
            Some(pending) => self.resolve(pending),
            None => self.operand(),
        };

        match resolved {
            Ok(value) => self.partial = value,
            Err(err) => {
                self.fail_equation(err.into());
                return;
            }
        }

        self.equation.push_operand(&snapshot, op);
        self.pending = Some(op);
        self.primary.clear();
        self.edit_mode = true;
    }

    fn apply_unary(&mut self, op: UnaryOp) {
        if self.primary.is_empty() || self.sentinel().is_some() {
            return;
        }

        match self.operand().and_then(|value| op.apply(value)) {
            Ok(value) => {
                debug!("{op:?} {} = {value}", self.primary);
                self.store_result(value);
            }
            Err(err) => self.fail(err),
        }
    }

    fn equals(&mut self) {
        let Some(op) = self.pending.take() else {
            return;
        };

        self.equation.clear();
        self.edit_mode = false;

        match self.resolve(op) {
            Ok(value) => {
                self.partial = value;
                self.store_result(value);
            }
            Err(err) => self.fail(err),
        }
    }

    fn backspace(&mut self) {
        // first backspace after a result clears it
        if !self.edit_mode || self.sentinel().is_some() {
            self.primary.clear();
            self.edit_mode = true;
            return;
        }

        self.primary.pop();
        if self.primary.as_str() == "-" {
            self.primary.clear();
        }
    }

    fn memory_recall(&mut self) {
        self.edit_mode = true;
        self.show(self.memory);
    }

    fn memory_update(&mut self, op: BinaryOp) {
        if self.sentinel().is_some() {
            return;
        }

        // memory records what is on screen, not the raw entry
        let shown = format(&self.primary, DIGIT_BUDGET);
        match decimal::parse(&shown).and_then(|value| op.apply(self.memory, value)) {
            Ok(memory) => {
                debug!("memory {op:?} {shown} = {memory}");
                self.memory = memory;
                self.edit_mode = false;
            }
            Err(err) => self.fail(err),
        }
    }

    /// Apply `op` to the partial result and the current entry
    fn resolve(&self, op: BinaryOp) -> Result<Decimal> {
        let rhs = self.operand()?;
        let value = op.apply(self.partial, rhs)?;
        debug!("{} {:?} {} = {}", self.partial, op, rhs, value);

        Ok(value)
    }

    /// Current entry as a number, empty entry being zero
    fn operand(&self) -> Result<Decimal> {
        decimal::parse(&self.primary)
    }

    /// Store a computed value on the primary line with its guard digits.
    /// The result is locked: the next digit starts a new entry.
    fn store_result(&mut self, value: Decimal) {
        // the display of a result must fit even though the literal is wider
        if let Err(err) = format_value(value, DIGIT_BUDGET) {
            self.fail(err);
            return;
        }

        self.primary.clear();
        if write!(self.primary, "{}", decimal::canonical(value.normalize())).is_err() {
            self.fail(CalcError::Overflow);
            return;
        }
        self.edit_mode = false;
    }

    /// Store `value` on the primary line at display precision
    fn show(&mut self, value: Decimal) {
        match format_value(value, DIGIT_BUDGET) {
            Ok(text) => {
                let literal = text.strip_suffix('.').unwrap_or(text.as_str());
                self.primary.clear();
                // DisplayText and primary share a capacity
                let _ = self.primary.push_str(literal);
            }
            Err(err) => self.fail(err),
        }
    }

    /// Put an error on the primary line and freeze entry
    fn fail(&mut self, err: CalcError) {
        let sentinel = Sentinel::from(err);
        warn!("{err}, showing {}", sentinel.text());

        self.primary.clear();
        let _ = self.primary.push_str(sentinel.text());
        self.pending = None;
        self.edit_mode = false;
    }

    fn fail_equation(&mut self, sentinel: Sentinel) {
        self.fail(match sentinel {
            Sentinel::Overflow => CalcError::Overflow,
            Sentinel::Indeterminate => CalcError::Indeterminate,
        });
        self.equation.set_sentinel(sentinel);
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

fn digit_count(literal: &str) -> usize {
    literal.chars().filter(char::is_ascii_digit).count()
}
