//! Fiscal amounts expressed in billions of euros (Md€).
//!
//! CRITICAL: Never use floating-point for fiscal figures.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places shown when an amount is displayed.
pub const DISPLAY_DP: u32 = 1;

/// An amount in billions of euros.
///
/// Arithmetic is exact; rounding only happens in [`fmt::Display`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BillionEuros(pub Decimal);

impl BillionEuros {
    /// Zero Md€.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wraps a raw decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the underlying decimal.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl Add for BillionEuros {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for BillionEuros {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for BillionEuros {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for BillionEuros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for BillionEuros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero);
        // -0.0 after rounding reads as a deficit, which it isn't.
        let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
        write!(f, "{rounded:.1} Md€")
    }
}
