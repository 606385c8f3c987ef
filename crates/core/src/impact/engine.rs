//! Linear impact calculator.

use cockpit_shared::types::{BillionEuros, Percent};
use rust_decimal::Decimal;

use super::types::{
    BudgetState, DecileImpact, IndustryImpact, LeverContribution, SimulationReport,
    SubSectorBalance,
};
use crate::levers::{LeverId, LeverKind, LeverSettings};
use crate::reference::ReferenceTable;

/// Pure calculator over one reference table.
///
/// Every lever contributes `(value - baseline) * coefficient`; contributions
/// are summed with no interaction terms. Evaluations share no state.
#[derive(Debug, Clone, Copy)]
pub struct ImpactCalculator<'a> {
    reference: &'a ReferenceTable,
}

impl<'a> ImpactCalculator<'a> {
    /// Creates a calculator over `reference`.
    #[must_use]
    pub const fn new(reference: &'a ReferenceTable) -> Self {
        Self { reference }
    }

    /// Md€ effect of `deviation` units at `coefficient` Md€ per unit.
    #[must_use]
    pub fn delta(deviation: Decimal, coefficient: Decimal) -> Decimal {
        deviation * coefficient
    }

    /// Contribution of a single lever.
    #[must_use]
    pub fn contribution(&self, settings: &LeverSettings, lever: LeverId) -> LeverContribution {
        let spec = self.reference.lever(lever);
        let deviation = settings.value(lever) - spec.baseline;
        let raw_delta = BillionEuros::new(Self::delta(deviation, spec.coefficient));
        let balance_effect = match spec.kind {
            LeverKind::Revenue => raw_delta,
            LeverKind::Expense => -raw_delta,
        };

        LeverContribution {
            lever,
            kind: spec.kind,
            sub_sector: spec.sub_sector,
            deviation,
            raw_delta,
            balance_effect,
        }
    }

    /// Computes the budget state for `settings`.
    ///
    /// Settings are expected to be within range; out-of-range values are
    /// extrapolated linearly.
    #[must_use]
    pub fn evaluate(&self, settings: &LeverSettings) -> BudgetState {
        let contributions: Vec<LeverContribution> = LeverId::ALL
            .iter()
            .map(|&lever| self.contribution(settings, lever))
            .collect();

        let side_total = |kind: LeverKind| -> BillionEuros {
            contributions
                .iter()
                .filter(|c| c.kind == kind)
                .map(|c| c.raw_delta)
                .sum()
        };
        let revenue_delta = side_total(LeverKind::Revenue);
        let expense_delta = side_total(LeverKind::Expense);

        let initial_balance = BillionEuros::new(self.reference.initial_balance());
        let balance = initial_balance + revenue_delta - expense_delta;

        let sub_sectors = self
            .reference
            .sub_sectors
            .iter()
            .map(|baseline| {
                let delta: BillionEuros = contributions
                    .iter()
                    .filter(|c| c.sub_sector == baseline.sector)
                    .map(|c| c.balance_effect)
                    .sum();
                let initial_balance = BillionEuros::new(baseline.balance);
                SubSectorBalance {
                    sector: baseline.sector,
                    initial_balance,
                    delta,
                    balance: initial_balance + delta,
                }
            })
            .collect();

        BudgetState {
            revenue_delta,
            expense_delta,
            initial_balance,
            balance,
            balance_pct_gdp: Percent::of(balance.amount(), self.reference.gdp),
            debt_estimate: BillionEuros::new(self.reference.initial_debt) - balance,
            contributions,
            sub_sectors,
        }
    }

    /// Illustrative VAT effort by income decile.
    ///
    /// `impact_d = vat_deviation * multiplier_d`. Not a distributional model:
    /// the multipliers are fixed and only encode that VAT weighs more on
    /// low incomes.
    #[must_use]
    pub fn decile_impacts(&self, settings: &LeverSettings) -> Vec<DecileImpact> {
        let vat_deviation = self.contribution(settings, LeverId::VatRate).deviation;

        (1u8..)
            .zip(self.reference.decile_vat_multipliers.iter())
            .map(|(decile, multiplier)| DecileImpact {
                decile,
                impact_pct_income: Percent::new(vat_deviation * *multiplier),
            })
            .collect()
    }

    /// Illustrative split of the corporate tax and social contribution
    /// deltas across industries.
    #[must_use]
    pub fn industry_impacts(&self, settings: &LeverSettings) -> Vec<IndustryImpact> {
        let corporate = self
            .contribution(settings, LeverId::CorporateTaxRate)
            .raw_delta
            .amount();
        let social = self
            .contribution(settings, LeverId::SocialContributionRate)
            .raw_delta
            .amount();

        self.reference
            .industry_shares
            .iter()
            .map(|share| {
                let corporate_tax_delta = BillionEuros::new(corporate * share.corporate_tax);
                let social_contribution_delta =
                    BillionEuros::new(social * share.social_contributions);
                IndustryImpact {
                    industry: share.industry,
                    corporate_tax_delta,
                    social_contribution_delta,
                    total: corporate_tax_delta + social_contribution_delta,
                }
            })
            .collect()
    }

    /// Runs every calculation for `settings`.
    #[must_use]
    pub fn simulate(&self, settings: &LeverSettings) -> SimulationReport {
        SimulationReport {
            vintage: self.reference.vintage,
            settings: *settings,
            budget: self.evaluate(settings),
            deciles: self.decile_impacts(settings),
            industries: self.industry_impacts(settings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levers::{IncomeTaxProgressivity, PensionIndexation, SubSector};
    use crate::reference::EXEC_2024;
    use rust_decimal_macros::dec;

    fn baseline() -> LeverSettings {
        LeverSettings::baseline(&EXEC_2024)
    }

    #[test]
    fn test_baseline_is_neutral() {
        let state = ImpactCalculator::new(&EXEC_2024).evaluate(&baseline());
        assert!(state.revenue_delta.is_zero());
        assert!(state.expense_delta.is_zero());
        assert_eq!(state.balance, BillionEuros::new(dec!(-151)));
        assert_eq!(state.debt_estimate, BillionEuros::new(dec!(3456)));
    }

    #[test]
    fn test_vat_point_raises_revenue() {
        let settings = LeverSettings {
            vat_rate: dec!(21.0),
            ..baseline()
        };
        let state = ImpactCalculator::new(&EXEC_2024).evaluate(&settings);
        assert_eq!(state.revenue_delta, BillionEuros::new(dec!(11.0)));
        assert_eq!(state.balance, BillionEuros::new(dec!(-140)));
    }

    #[test]
    fn test_pay_index_point_costs() {
        let calculator = ImpactCalculator::new(&EXEC_2024);
        let settings = LeverSettings {
            pay_index_change: dec!(1.0),
            ..baseline()
        };
        let contribution = calculator.contribution(&settings, LeverId::PayIndexChange);
        assert_eq!(contribution.balance_effect, BillionEuros::new(dec!(-2.3)));

        let state = calculator.evaluate(&settings);
        assert_eq!(state.expense_delta, BillionEuros::new(dec!(2.3)));
        assert_eq!(state.balance, BillionEuros::new(dec!(-153.3)));
    }

    #[test]
    fn test_discrete_levers() {
        let settings = LeverSettings {
            income_tax_progressivity: IncomeTaxProgressivity::Strengthened,
            pension_indexation: PensionIndexation::BelowInflation,
            ..baseline()
        };
        let state = ImpactCalculator::new(&EXEC_2024).evaluate(&settings);
        assert_eq!(state.revenue_delta, BillionEuros::new(dec!(4.0)));
        assert_eq!(state.expense_delta, BillionEuros::new(dec!(-3.5)));
        assert_eq!(state.balance, BillionEuros::new(dec!(-143.5)));
    }

    #[test]
    fn test_sub_sector_booking() {
        let settings = LeverSettings {
            health_spending_target: dec!(260),
            local_grant: dec!(30),
            ..baseline()
        };
        let state = ImpactCalculator::new(&EXEC_2024).evaluate(&settings);
        let balances: Vec<(SubSector, BillionEuros)> = state
            .sub_sectors
            .iter()
            .map(|s| (s.sector, s.balance))
            .collect();

        assert_eq!(
            balances,
            vec![
                (SubSector::State, BillionEuros::new(dec!(-148))),
                (SubSector::SocialSecurity, BillionEuros::new(dec!(-14))),
                (SubSector::LocalGovernment, BillionEuros::new(dec!(2))),
            ]
        );
    }

    #[test]
    fn test_decile_labels() {
        let deciles = ImpactCalculator::new(&EXEC_2024).decile_impacts(&baseline());
        assert_eq!(deciles.len(), 10);
        assert_eq!(deciles[0].label(), "D1");
        assert_eq!(deciles[9].label(), "D10");
        assert!(deciles.iter().all(|d| d.impact_pct_income.points().is_zero()));
    }

    #[test]
    fn test_decile_vat_point() {
        let settings = LeverSettings {
            vat_rate: dec!(21),
            ..baseline()
        };
        let deciles = ImpactCalculator::new(&EXEC_2024).decile_impacts(&settings);
        assert_eq!(deciles[0].impact_pct_income, Percent::new(dec!(1.2)));
        assert_eq!(deciles[9].impact_pct_income, Percent::new(dec!(0.2)));
    }

    #[test]
    fn test_industry_split() {
        let settings = LeverSettings {
            corporate_tax_rate: dec!(30),
            ..baseline()
        };
        let industries = ImpactCalculator::new(&EXEC_2024).industry_impacts(&settings);
        // 5 points * 2.4 = 12 Md€
        assert_eq!(industries[0].corporate_tax_delta, BillionEuros::new(dec!(4.2)));
        assert_eq!(industries[1].corporate_tax_delta, BillionEuros::new(dec!(2.4)));
        assert_eq!(industries[2].corporate_tax_delta, BillionEuros::new(dec!(5.4)));
        assert!(industries.iter().all(|i| i.social_contribution_delta.is_zero()));
    }

    #[test]
    fn test_simulate_bundles_everything() {
        let settings = baseline();
        let calculator = ImpactCalculator::new(&EXEC_2024);
        let report = calculator.simulate(&settings);
        assert_eq!(report.vintage, "exec-2024");
        assert_eq!(report.settings, settings);
        assert_eq!(report.budget, calculator.evaluate(&settings));
        assert_eq!(report.deciles.len(), 10);
        assert_eq!(report.industries.len(), 3);
    }
}
