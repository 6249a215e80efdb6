//! # Money Module
//!
//! Provides the `Money` type for running currency totals.
//!
//! ## Cumulative Rounding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ROUND AFTER EVERY ADD                                                  │
//! │                                                                         │
//! │  Running totals are rounded to 2 decimals after EACH partial sum:      │
//! │    total = round2(round2(round2(a) + b) + c)                           │
//! │                                                                         │
//! │  Summing in full precision and rounding once at the end:               │
//! │    total = round2(a + b + c)                                           │
//! │  gives different cents on multi-item records.                          │
//! │                                                                         │
//! │  Reports must be reproducible to the cent, so only the first form     │
//! │  is ever used. Reordering the adds also changes the result.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use salesboard_core::money::Money;
//!
//! let mut total = Money::zero();
//! total.accumulate(0.1);
//! total.accumulate(0.2);
//! assert_eq!(total.amount(), 0.3);
//! ```

use std::fmt;

use crate::CURRENCY_DECIMALS;

/// Scale factor for [`CURRENCY_DECIMALS`] decimal places.
const CURRENCY_SCALE: f64 = 100.0;

/// Rounds a currency amount to [`CURRENCY_DECIMALS`] decimal places.
///
/// Halves round away from zero. Negative zero is normalized to zero so
/// serialized reports never print `-0.0`.
///
/// ## Example
/// ```rust
/// use salesboard_core::money::round_currency;
///
/// assert_eq!(round_currency(10.456), 10.46);
/// assert_eq!(round_currency(0.125), 0.13);
/// assert_eq!(round_currency(-3.333), -3.33);
/// ```
#[inline]
pub fn round_currency(value: f64) -> f64 {
    let rounded = (value * CURRENCY_SCALE).round() / CURRENCY_SCALE;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// A currency amount that is always held rounded to 2 decimal places.
///
/// ## Design Decisions
/// - **f64**: revenue strategies are arbitrary functions returning fractional
///   amounts, so the running totals stay in the same domain
/// - **Rounded on every write**: `from_amount` and `accumulate` are the only
///   ways to change the value
/// - **Not serialized**: reports carry the plain `f64` from [`Money::amount`]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Money(f64);

impl Money {
    /// Creates a Money value, rounding to 2 decimals.
    ///
    /// ## Example
    /// ```rust
    /// use salesboard_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(19.999).amount(), 20.0);
    /// ```
    #[inline]
    pub fn from_amount(amount: f64) -> Self {
        Money(round_currency(amount))
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    /// Returns the rounded amount.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Adds an unrounded delta and rounds the new total.
    ///
    /// ## Example
    /// ```rust
    /// use salesboard_core::money::Money;
    ///
    /// let mut profit = Money::from_amount(10.0);
    /// profit.accumulate(0.004);
    /// assert_eq!(profit.amount(), 10.0);
    /// profit.accumulate(-20.556);
    /// assert_eq!(profit.amount(), -10.56);
    /// ```
    #[inline]
    pub fn accumulate(&mut self, delta: f64) {
        self.0 = round_currency(self.0 + delta);
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Display with exactly [`CURRENCY_DECIMALS`] decimals, for logs and debugging.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", CURRENCY_DECIMALS, self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
