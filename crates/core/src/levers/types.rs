//! Lever identifiers and classification types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user-adjustable policy parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeverId {
    /// Standard VAT rate (%).
    VatRate,
    /// Corporate income tax rate (%).
    CorporateTaxRate,
    /// Income tax progressivity (discrete step).
    IncomeTaxProgressivity,
    /// Social contribution (CSG) rate on earned income (%).
    SocialContributionRate,
    /// National health spending target, ONDAM (Md€).
    HealthSpendingTarget,
    /// Pension indexation relative to inflation (discrete step).
    PensionIndexation,
    /// Civil-service pay index change (%).
    PayIndexChange,
    /// Global operating grant to local governments, DGF (Md€).
    LocalGrant,
}

impl LeverId {
    /// Every lever, in reference-table order.
    pub const ALL: [Self; 8] = [
        Self::VatRate,
        Self::CorporateTaxRate,
        Self::IncomeTaxProgressivity,
        Self::SocialContributionRate,
        Self::HealthSpendingTarget,
        Self::PensionIndexation,
        Self::PayIndexChange,
        Self::LocalGrant,
    ];

    /// Position of this lever in [`Self::ALL`] and in reference tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case name, as used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VatRate => "vat_rate",
            Self::CorporateTaxRate => "corporate_tax_rate",
            Self::IncomeTaxProgressivity => "income_tax_progressivity",
            Self::SocialContributionRate => "social_contribution_rate",
            Self::HealthSpendingTarget => "health_spending_target",
            Self::PensionIndexation => "pension_indexation",
            Self::PayIndexChange => "pay_index_change",
            Self::LocalGrant => "local_grant",
        }
    }
}

impl std::fmt::Display for LeverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the budget a lever acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeverKind {
    /// Raising the lever raises revenue and improves the balance.
    Revenue,
    /// Raising the lever raises spending and worsens the balance.
    Expense,
}

/// Unit a lever is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeverUnit {
    /// Percentage points.
    Percent,
    /// Billions of euros.
    BillionEuros,
    /// Discrete step (-1, 0, +1).
    Step,
}

/// Public administration sub-sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubSector {
    /// Central government (État).
    State,
    /// Social security administrations (ASSO).
    SocialSecurity,
    /// Local government (APUL).
    LocalGovernment,
}

impl SubSector {
    /// Every sub-sector, in display order.
    pub const ALL: [Self; 3] = [Self::State, Self::SocialSecurity, Self::LocalGovernment];
}

/// Income tax progressivity setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeTaxProgressivity {
    /// Flatter schedule.
    Lightened,
    /// Schedule in force.
    #[default]
    Current,
    /// Steeper schedule.
    Strengthened,
}

impl IncomeTaxProgressivity {
    /// Deviation from the schedule in force, in steps.
    #[must_use]
    pub fn step(self) -> Decimal {
        match self {
            Self::Lightened => Decimal::NEGATIVE_ONE,
            Self::Current => Decimal::ZERO,
            Self::Strengthened => Decimal::ONE,
        }
    }

    /// Inverse of [`Self::step`].
    #[must_use]
    pub fn from_step(step: Decimal) -> Option<Self> {
        [Self::Lightened, Self::Current, Self::Strengthened]
            .into_iter()
            .find(|setting| setting.step() == step)
    }
}

/// Pension indexation setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PensionIndexation {
    /// Pensions indexed below inflation.
    BelowInflation,
    /// Pensions indexed on inflation.
    #[default]
    Inflation,
    /// Pensions indexed above inflation.
    AboveInflation,
}

impl PensionIndexation {
    /// Deviation from inflation indexing, in steps.
    #[must_use]
    pub fn step(self) -> Decimal {
        match self {
            Self::BelowInflation => Decimal::NEGATIVE_ONE,
            Self::Inflation => Decimal::ZERO,
            Self::AboveInflation => Decimal::ONE,
        }
    }

    /// Inverse of [`Self::step`].
    #[must_use]
    pub fn from_step(step: Decimal) -> Option<Self> {
        [Self::BelowInflation, Self::Inflation, Self::AboveInflation]
            .into_iter()
            .find(|setting| setting.step() == step)
    }
}
