//! Exact cost arithmetic using fixed-point decimal
//!
//! Item prices, point scores, budgets and contest fees are all [`Amount`]s.
//! **NEVER use f64 for budget checks!** A running sum of float prices drifts,
//! and a selection that should fit exactly at the limit gets rejected.
//!
//! - Uses `Decimal` internally (28-29 significant digits)
//! - All arithmetic is exact (no rounding errors)
//! - Checked operations (never overflow/panic)
//! - Serializes as string (preserves precision)

use crate::DraftkitError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exact, non-float amount (a price, a point score, or a budget).
///
/// # Examples
///
/// ```rust
/// use draftkit_lib::Amount;
///
/// let a = Amount::from_units(4500);
/// let b = Amount::from_units(3800);
/// let total = a.checked_add(&b).unwrap();
/// assert_eq!(total, Amount::from_units(8300));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    /// Create from a whole number of units (dollars, points).
    pub fn from_units(units: i64) -> Self {
        Self {
            value: Decimal::from(units),
        }
    }

    /// Wrap an existing Decimal value.
    pub fn from_decimal(value: Decimal) -> Self {
        Self { value }
    }

    /// Create from decimal string (e.g., "123.45")
    ///
    /// # Errors
    ///
    /// Returns [`DraftkitError::InvalidData`] if the string is not a valid decimal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use draftkit_lib::Amount;
    /// let amt = Amount::from_str_checked("100.50").unwrap();
    /// assert_eq!(amt.to_string(), "100.50");
    /// ```
    pub fn from_str_checked(s: &str) -> Result<Self, DraftkitError> {
        Decimal::from_str(s.trim())
            .map(|value| Self { value })
            .map_err(|e| DraftkitError::invalid_data("amount", format!("'{}': {}", s, e)))
    }

    /// Convert an integer count of base units into a decimal amount.
    ///
    /// Contract reads return fees in wei; `from_base_units(wei, 18)` yields
    /// the ETH value without going through floating point. Returns `None` if
    /// the value does not fit in a Decimal or `decimals` exceeds 28.
    ///
    /// ```rust
    /// use draftkit_lib::Amount;
    /// let fee = Amount::from_base_units(10_000_000_000_000_000, 18).unwrap();
    /// assert_eq!(fee.to_string(), "0.01");
    /// ```
    pub fn from_base_units(units: u128, decimals: u32) -> Option<Self> {
        let units = i128::try_from(units).ok()?;
        Decimal::try_from_i128_with_scale(units, decimals)
            .ok()
            .map(|value| Self {
                value: value.normalize(),
            })
    }

    /// Checked addition (returns None on overflow)
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.value
            .checked_add(other.value)
            .map(|value| Self { value })
    }

    /// Checked subtraction (returns None on overflow)
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.value
            .checked_sub(other.value)
            .map(|value| Self { value })
    }

    /// Check if this amount is less than or equal to another
    pub fn is_within_limit(&self, limit: &Self) -> bool {
        self.value <= limit.value
    }

    /// Check if this amount would exceed a limit when added to another amount
    ///
    /// # Examples
    ///
    /// ```rust
    /// use draftkit_lib::Amount;
    /// let spent = Amount::from_units(8300);
    /// let limit = Amount::from_units(10000);
    /// assert!(spent.would_exceed(&Amount::from_units(2200), &limit));
    /// assert!(!spent.would_exceed(&Amount::from_units(1700), &limit));
    /// ```
    pub fn would_exceed(&self, additional: &Self, limit: &Self) -> bool {
        match self.checked_add(additional) {
            Some(total) => total.value > limit.value,
            None => true, // Overflow means it exceeds
        }
    }

    /// Get zero amount
    pub fn zero() -> Self {
        Self {
            value: Decimal::ZERO,
        }
    }

    /// Check if amount is zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Check if amount is below zero
    pub fn is_negative(&self) -> bool {
        self.value.is_sign_negative() && !self.value.is_zero()
    }

    /// Get the internal Decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for Amount {
    type Err = DraftkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_checked(s)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}
