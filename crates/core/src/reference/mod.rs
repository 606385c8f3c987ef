//! Versioned reference data: baselines, coefficients and aggregates.
//!
//! Nothing in here computes. Updating a vintage never touches
//! [`crate::impact`].

mod exec_2024;

use cockpit_shared::AppError;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::levers::{LeverId, LeverKind, LeverUnit, SubSector};

pub use exec_2024::EXEC_2024;

/// Every published vintage, newest first.
pub static VINTAGES: &[&ReferenceTable] = &[&EXEC_2024];

/// Number of income deciles.
pub const DECILE_COUNT: usize = 10;

/// Static description of one lever.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LeverSpec {
    /// Lever identifier.
    pub id: LeverId,
    /// Human-readable label.
    pub label: &'static str,
    /// Unit of the lever value.
    pub unit: LeverUnit,
    /// Revenue or expense side.
    pub kind: LeverKind,
    /// Sub-sector whose balance the lever moves.
    pub sub_sector: SubSector,
    /// Lowest accepted value (inclusive).
    pub min: Decimal,
    /// Highest accepted value (inclusive).
    pub max: Decimal,
    /// Reference value (n-1 execution).
    pub baseline: Decimal,
    /// Md€ per unit of deviation from baseline.
    pub coefficient: Decimal,
}

/// Opening balance of one sub-sector.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SubSectorBaseline {
    /// Sub-sector.
    pub sector: SubSector,
    /// Balance before any lever moves (Md€).
    pub balance: Decimal,
}

/// Aggregate industry grouping (NAF sections).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    /// Manufacturing and energy (Industrie).
    Manufacturing,
    /// Wholesale and retail trade (Commerce).
    Trade,
    /// Market services (Services).
    Services,
}

/// Share of two business-facing levers borne by one industry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IndustryShare {
    /// Industry.
    pub industry: Industry,
    /// Share of the corporate tax delta (0..=1).
    pub corporate_tax: Decimal,
    /// Share of the social contribution delta (0..=1).
    pub social_contributions: Decimal,
}

/// One vintage of reference data.
#[derive(Debug, Serialize)]
pub struct ReferenceTable {
    /// Vintage identifier, e.g. `exec-2024`.
    pub vintage: &'static str,
    /// Nominal GDP (Md€).
    pub gdp: Decimal,
    /// Public debt at the start of the year (Md€).
    pub initial_debt: Decimal,
    /// Opening balance per sub-sector, in [`SubSector::ALL`] order.
    pub sub_sectors: [SubSectorBaseline; 3],
    /// Lever catalogue, in [`LeverId::ALL`] order.
    pub levers: [LeverSpec; 8],
    /// Impact on D1..D10, in % of disposable income per VAT point.
    /// Non-increasing.
    pub decile_vat_multipliers: [Decimal; DECILE_COUNT],
    /// Industry split of corporate tax and social contribution deltas.
    pub industry_shares: [IndustryShare; 3],
}

impl ReferenceTable {
    /// Looks up a published vintage.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::UnknownVintage` if no table carries that name.
    pub fn by_vintage(vintage: &str) -> Result<&'static Self, ReferenceError> {
        VINTAGES
            .iter()
            .copied()
            .find(|table| table.vintage == vintage)
            .ok_or_else(|| ReferenceError::UnknownVintage(vintage.to_string()))
    }

    /// Static description of a lever.
    #[must_use]
    pub fn lever(&self, id: LeverId) -> &LeverSpec {
        &self.levers[id.index()]
    }

    /// General-government balance before any lever moves.
    #[must_use]
    pub fn initial_balance(&self) -> Decimal {
        self.sub_sectors.iter().map(|s| s.balance).sum()
    }
}

/// Reference data errors.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// No table with that vintage.
    #[error("Unknown reference vintage: {0}")]
    UnknownVintage(String),
}

impl From<ReferenceError> for AppError {
    fn from(err: ReferenceError) -> Self {
        match err {
            ReferenceError::UnknownVintage(_) => Self::NotFound(err.to_string()),
        }
    }
}
