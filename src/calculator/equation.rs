// Equation history line
// Only formatted operand snapshots and operator glyphs ever land here.

use super::format::Sentinel;
use super::ops::BinaryOp;
use crate::config::EQUATION_CAPACITY;

/// Trailing history text such as `12+3.5×`.
///
/// The buffer is bounded; when a long chain outgrows it the oldest
/// characters are dropped so the most recent history stays visible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Equation {
    text: heapless::String<EQUATION_CAPACITY>,
}

impl Equation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Operator at the very end of the line, if any
    pub fn trailing_operator(&self) -> Option<BinaryOp> {
        self.text.chars().next_back().and_then(BinaryOp::from_glyph)
    }

    pub fn sentinel(&self) -> Option<Sentinel> {
        Sentinel::parse(&self.text)
    }

    /// Swap the trailing operator for `op`.
    pub fn replace_operator(&mut self, op: BinaryOp) {
        if self.trailing_operator().is_some() {
            self.text.pop();
        }
        self.push_char(op.glyph());
    }

    /// Append a formatted operand snapshot followed by the operator glyph.
    pub fn push_operand(&mut self, snapshot: &str, op: BinaryOp) {
        // integers are shown without their display dot
        let snapshot = snapshot.strip_suffix('.').unwrap_or(snapshot);
        for c in snapshot.chars() {
            self.push_char(c);
        }
        self.push_char(op.glyph());
    }

    pub fn set_sentinel(&mut self, sentinel: Sentinel) {
        self.text.clear();
        let _ = self.text.push_str(sentinel.text());
    }

    fn push_char(&mut self, c: char) {
        while self.text.push(c).is_err() {
            if self.text.is_empty() {
                return;
            }
            self.drop_oldest();
        }
    }

    fn drop_oldest(&mut self) {
        let cut = self
            .text
            .char_indices()
            .nth(1)
            .map_or(self.text.len(), |(index, _)| index);

        let mut rest = heapless::String::new();
        // rest is strictly shorter than the current text
        let _ = rest.push_str(&self.text.as_str()[cut..]);
        self.text = rest;
    }
}
