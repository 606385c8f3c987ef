//! Simulation routes.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use cockpit_core::impact::{BudgetState, SubSectorBalance};
use cockpit_core::levers::{IncomeTaxProgressivity, PensionIndexation, SubSector};
use cockpit_core::{
    ImpactCalculator, LeverError, LeverId, LeverSettings, ReferenceTable, SimulationReport,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ApiError;
use crate::AppState;

/// Creates the simulation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/simulation/baseline", get(baseline_simulation))
        .route("/simulation/run", post(run_simulation))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for running a simulation.
///
/// Omitted levers stay at their baseline.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSimulationRequest {
    /// Standard VAT rate (%).
    pub vat_rate: Option<Decimal>,
    /// Corporate tax rate (%).
    pub corporate_tax_rate: Option<Decimal>,
    /// Income tax progressivity, by name or step.
    pub income_tax_progressivity: Option<StepInput<IncomeTaxProgressivity>>,
    /// Social contribution rate (%).
    pub social_contribution_rate: Option<Decimal>,
    /// Health spending target (Md€).
    pub health_spending_target: Option<Decimal>,
    /// Pension indexation, by name or step.
    pub pension_indexation: Option<StepInput<PensionIndexation>>,
    /// Civil-service pay index change (%).
    pub pay_index_change: Option<Decimal>,
    /// Local-government grant (Md€).
    pub local_grant: Option<Decimal>,
}

/// A discrete lever given either by setting name or by numeric step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StepInput<T> {
    /// Named setting, e.g. `"above_inflation"`.
    Named(T),
    /// Raw step; only -1, 0 and 1 pass [`LeverSettings::set`].
    Step(Decimal),
}

impl<T> StepInput<T> {
    fn into_step(self, step: impl FnOnce(T) -> Decimal) -> Decimal {
        match self {
            Self::Named(setting) => step(setting),
            Self::Step(value) => value,
        }
    }
}

impl RunSimulationRequest {
    /// Builds validated settings, filling gaps from the baseline.
    ///
    /// # Errors
    ///
    /// Returns `LeverError::InvalidStep` if a discrete lever gets a step
    /// other than -1, 0 or 1, and `LeverError::OutOfRange` if any lever is
    /// outside its range.
    pub fn into_settings(self, reference: &ReferenceTable) -> Result<LeverSettings, LeverError> {
        let mut settings = LeverSettings::baseline(reference);
        let requested = [
            (LeverId::VatRate, self.vat_rate),
            (LeverId::CorporateTaxRate, self.corporate_tax_rate),
            (
                LeverId::IncomeTaxProgressivity,
                self.income_tax_progressivity
                    .map(|input| input.into_step(IncomeTaxProgressivity::step)),
            ),
            (LeverId::SocialContributionRate, self.social_contribution_rate),
            (LeverId::HealthSpendingTarget, self.health_spending_target),
            (
                LeverId::PensionIndexation,
                self.pension_indexation
                    .map(|input| input.into_step(PensionIndexation::step)),
            ),
            (LeverId::PayIndexChange, self.pay_index_change),
            (LeverId::LocalGrant, self.local_grant),
        ];
        for (lever, value) in requested {
            if let Some(value) = value {
                settings.set(lever, value)?;
            }
        }

        settings.validate(reference)?;
        Ok(settings)
    }
}

/// Simulation report plus ready-to-display strings.
#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    /// Raw report; decimals serialized as strings.
    #[serde(flatten)]
    pub report: SimulationReport,
    /// Formatted figures for metric widgets.
    pub display: DisplayResponse,
}

/// Formatted headline figures.
#[derive(Debug, Serialize)]
pub struct DisplayResponse {
    /// Balance, e.g. `-151.0 Md€`.
    pub balance: String,
    /// Balance in % of GDP, e.g. `-5.18 %`.
    pub balance_pct_gdp: String,
    /// Debt estimate, e.g. `3456.0 Md€`.
    pub debt_estimate: String,
    /// Revenue delta.
    pub revenue_delta: String,
    /// Expense delta.
    pub expense_delta: String,
    /// Sub-sector balances.
    pub sub_sectors: Vec<SubSectorDisplay>,
    /// Decile impacts, D1 first.
    pub deciles: Vec<DecileDisplay>,
}

/// Formatted sub-sector balance.
#[derive(Debug, Serialize)]
pub struct SubSectorDisplay {
    /// Sub-sector.
    pub sector: SubSector,
    /// Balance.
    pub balance: String,
    /// Change from the opening balance.
    pub delta: String,
}

/// Formatted decile impact.
#[derive(Debug, Serialize)]
pub struct DecileDisplay {
    /// `D1` to `D10`.
    pub decile: String,
    /// Impact in % of income.
    pub impact: String,
}

impl From<SimulationReport> for SimulationResponse {
    fn from(report: SimulationReport) -> Self {
        let display = display(&report);
        Self { report, display }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn display(report: &SimulationReport) -> DisplayResponse {
    let BudgetState {
        revenue_delta,
        expense_delta,
        balance,
        balance_pct_gdp,
        debt_estimate,
        ..
    } = &report.budget;

    DisplayResponse {
        balance: balance.to_string(),
        balance_pct_gdp: balance_pct_gdp.to_string(),
        debt_estimate: debt_estimate.to_string(),
        revenue_delta: revenue_delta.to_string(),
        expense_delta: expense_delta.to_string(),
        sub_sectors: report
            .budget
            .sub_sectors
            .iter()
            .map(|s: &SubSectorBalance| SubSectorDisplay {
                sector: s.sector,
                balance: s.balance.to_string(),
                delta: s.delta.to_string(),
            })
            .collect(),
        deciles: report
            .deciles
            .iter()
            .map(|d| DecileDisplay {
                decile: d.label(),
                impact: d.impact_pct_income.to_string(),
            })
            .collect(),
    }
}

fn simulate(state: AppState, settings: &LeverSettings) -> SimulationResponse {
    let report = ImpactCalculator::new(state.reference).simulate(settings);
    debug!(
        vintage = report.vintage,
        balance = %report.budget.balance,
        balance_pct_gdp = %report.budget.balance_pct_gdp,
        "Simulation evaluated"
    );
    report.into()
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /simulation/baseline
async fn baseline_simulation(State(state): State<AppState>) -> Json<SimulationResponse> {
    let settings = LeverSettings::baseline(state.reference);
    Json(simulate(state, &settings))
}

/// POST /simulation/run
async fn run_simulation(
    State(state): State<AppState>,
    Json(request): Json<RunSimulationRequest>,
) -> Result<Json<SimulationResponse>, ApiError> {
    let settings = request.into_settings(state.reference).inspect_err(|err| {
        warn!(error = %err, "Rejected lever settings");
    })?;

    Ok(Json(simulate(state, &settings)))
}
