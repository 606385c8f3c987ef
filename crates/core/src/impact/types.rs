//! Impact calculation result types.

use cockpit_shared::types::{BillionEuros, Percent};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::levers::{LeverId, LeverKind, LeverSettings, SubSector};
use crate::reference::Industry;

/// Effect of a single lever on the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeverContribution {
    /// Lever.
    pub lever: LeverId,
    /// Revenue or expense side.
    pub kind: LeverKind,
    /// Sub-sector the effect is booked in.
    pub sub_sector: SubSector,
    /// Current value minus baseline, in the lever's unit.
    pub deviation: Decimal,
    /// `deviation * coefficient`: extra revenue or extra spending.
    pub raw_delta: BillionEuros,
    /// Effect on the balance: `raw_delta` for revenue, `-raw_delta` for
    /// expense.
    pub balance_effect: BillionEuros,
}

/// Balance of one sub-sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubSectorBalance {
    /// Sub-sector.
    pub sector: SubSector,
    /// Opening balance.
    pub initial_balance: BillionEuros,
    /// Sum of balance effects booked in this sub-sector.
    pub delta: BillionEuros,
    /// `initial_balance + delta`.
    pub balance: BillionEuros,
}

/// Derived budget aggregates for one set of lever settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetState {
    /// Extra revenue from revenue levers.
    pub revenue_delta: BillionEuros,
    /// Extra spending from expense levers.
    pub expense_delta: BillionEuros,
    /// General-government balance before any lever moves.
    pub initial_balance: BillionEuros,
    /// `initial_balance + revenue_delta - expense_delta`.
    pub balance: BillionEuros,
    /// `balance / GDP * 100`, unrounded.
    pub balance_pct_gdp: Percent,
    /// `initial_debt - balance`.
    pub debt_estimate: BillionEuros,
    /// Per-lever breakdown, in lever order.
    pub contributions: Vec<LeverContribution>,
    /// Per-sub-sector balances. They sum to `balance`.
    pub sub_sectors: Vec<SubSectorBalance>,
}

/// Illustrative impact on one income decile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecileImpact {
    /// Decile number, 1 (lowest incomes) to 10.
    pub decile: u8,
    /// Change in tax effort, in % of disposable income.
    pub impact_pct_income: Percent,
}

impl DecileImpact {
    /// Short label, `D1` to `D10`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("D{}", self.decile)
    }
}

/// Illustrative extra burden on one industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndustryImpact {
    /// Industry.
    pub industry: Industry,
    /// Share of the corporate tax delta.
    pub corporate_tax_delta: BillionEuros,
    /// Share of the social contribution delta.
    pub social_contribution_delta: BillionEuros,
    /// Sum of both.
    pub total: BillionEuros,
}

/// Everything computed for one set of lever settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// Reference vintage used.
    pub vintage: &'static str,
    /// Settings the report was computed from.
    pub settings: LeverSettings,
    /// Budget aggregates.
    pub budget: BudgetState,
    /// Decile impacts, D1 first.
    pub deciles: Vec<DecileImpact>,
    /// Industry impacts.
    pub industries: Vec<IndustryImpact>,
}
