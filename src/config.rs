//! Compile-time calculator configuration.

/// Maximum number of digits on the primary display, excluding sign and decimal point.
pub const DIGIT_BUDGET: u32 = 20;

/// Guard digits the accumulator carries beyond the display width.
pub const BUFFER_WIDTH: u32 = 4;

/// Fractional digits kept for intermediate results (`partial`, unary results).
pub const EXTENDED_PRECISION: u32 = DIGIT_BUDGET + BUFFER_WIDTH;

/// Fractional digits shown for operand snapshots in the equation line
pub const EQUATION_PRECISION: u32 = 4;

/// Capacity of the equation history buffer in bytes
pub const EQUATION_CAPACITY: usize = 96;

/// Capacity of a single value literal. A result kept at extended precision has
/// at most 29 digits besides its sign and decimal point.
pub const TEXT_CAPACITY: usize = 32;

/// Key state must hold this long before a press is accepted
pub const DEBOUNCE_MS: u64 = 5;
