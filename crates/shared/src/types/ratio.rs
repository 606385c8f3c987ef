//! Percentage values (rates, shares of GDP).

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places shown when a percentage is displayed.
pub const DISPLAY_DP: u32 = 2;

/// A percentage, stored as points (e.g. `5.18` for 5.18 %).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Percent(pub Decimal);

impl Percent {
    /// Wraps a value already expressed in points.
    #[must_use]
    pub const fn new(points: Decimal) -> Self {
        Self(points)
    }

    /// Computes `part / whole * 100`.
    ///
    /// Returns zero when `whole` is zero. The only caller divides by GDP,
    /// which every published reference table keeps strictly positive
    /// (`reference::tests::test_aggregates_are_positive` in `cockpit-core`),
    /// so the fallback never reaches a report.
    #[must_use]
    pub fn of(part: Decimal, whole: Decimal) -> Self {
        if whole.is_zero() {
            return Self(Decimal::ZERO);
        }
        Self(part / whole * Decimal::ONE_HUNDRED)
    }

    /// Returns the value in points.
    #[must_use]
    pub const fn points(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero);
        let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
        write!(f, "{rounded:.2} %")
    }
}
