//! The lever settings record.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::LeverError;
use super::types::{IncomeTaxProgressivity, LeverId, PensionIndexation};
use crate::reference::ReferenceTable;

/// Current value of every lever.
///
/// Mutated directly by the caller; the calculator reads it and keeps no
/// copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeverSettings {
    /// Standard VAT rate (%).
    pub vat_rate: Decimal,
    /// Corporate income tax rate (%).
    pub corporate_tax_rate: Decimal,
    /// Income tax progressivity.
    pub income_tax_progressivity: IncomeTaxProgressivity,
    /// Social contribution (CSG) rate (%).
    pub social_contribution_rate: Decimal,
    /// Health spending target (Md€).
    pub health_spending_target: Decimal,
    /// Pension indexation.
    pub pension_indexation: PensionIndexation,
    /// Civil-service pay index change (%).
    pub pay_index_change: Decimal,
    /// Local-government grant (Md€).
    pub local_grant: Decimal,
}

impl LeverSettings {
    /// Settings with every lever at its baseline.
    #[must_use]
    pub fn baseline(reference: &ReferenceTable) -> Self {
        let base = |id: LeverId| reference.lever(id).baseline;
        Self {
            vat_rate: base(LeverId::VatRate),
            corporate_tax_rate: base(LeverId::CorporateTaxRate),
            income_tax_progressivity: IncomeTaxProgressivity::from_step(base(
                LeverId::IncomeTaxProgressivity,
            ))
            .unwrap_or_default(),
            social_contribution_rate: base(LeverId::SocialContributionRate),
            health_spending_target: base(LeverId::HealthSpendingTarget),
            pension_indexation: PensionIndexation::from_step(base(LeverId::PensionIndexation))
                .unwrap_or_default(),
            pay_index_change: base(LeverId::PayIndexChange),
            local_grant: base(LeverId::LocalGrant),
        }
    }

    /// Numeric value of a lever. Discrete levers report their step.
    #[must_use]
    pub fn value(&self, lever: LeverId) -> Decimal {
        match lever {
            LeverId::VatRate => self.vat_rate,
            LeverId::CorporateTaxRate => self.corporate_tax_rate,
            LeverId::IncomeTaxProgressivity => self.income_tax_progressivity.step(),
            LeverId::SocialContributionRate => self.social_contribution_rate,
            LeverId::HealthSpendingTarget => self.health_spending_target,
            LeverId::PensionIndexation => self.pension_indexation.step(),
            LeverId::PayIndexChange => self.pay_index_change,
            LeverId::LocalGrant => self.local_grant,
        }
    }

    /// Sets a lever from its numeric value.
    ///
    /// Range is not checked here; see [`Self::validate`].
    ///
    /// # Errors
    ///
    /// Returns `LeverError::InvalidStep` when a discrete lever receives a
    /// value other than -1, 0 or 1.
    pub fn set(&mut self, lever: LeverId, value: Decimal) -> Result<(), LeverError> {
        let invalid_step = || LeverError::InvalidStep { lever, value };
        match lever {
            LeverId::VatRate => self.vat_rate = value,
            LeverId::CorporateTaxRate => self.corporate_tax_rate = value,
            LeverId::IncomeTaxProgressivity => {
                self.income_tax_progressivity =
                    IncomeTaxProgressivity::from_step(value).ok_or_else(invalid_step)?;
            }
            LeverId::SocialContributionRate => self.social_contribution_rate = value,
            LeverId::HealthSpendingTarget => self.health_spending_target = value,
            LeverId::PensionIndexation => {
                self.pension_indexation =
                    PensionIndexation::from_step(value).ok_or_else(invalid_step)?;
            }
            LeverId::PayIndexChange => self.pay_index_change = value,
            LeverId::LocalGrant => self.local_grant = value,
        }
        Ok(())
    }

    /// Returns a copy with one lever changed.
    ///
    /// # Errors
    ///
    /// Same as [`Self::set`].
    pub fn with(mut self, lever: LeverId, value: Decimal) -> Result<Self, LeverError> {
        self.set(lever, value)?;
        Ok(self)
    }

    /// Checks every lever against its range in `reference`.
    ///
    /// # Errors
    ///
    /// Returns `LeverError::OutOfRange` for the first lever outside its
    /// bounds. Bounds are inclusive.
    pub fn validate(&self, reference: &ReferenceTable) -> Result<(), LeverError> {
        for lever in LeverId::ALL {
            let spec = reference.lever(lever);
            let value = self.value(lever);
            if value < spec.min || value > spec.max {
                return Err(LeverError::OutOfRange {
                    lever,
                    value,
                    min: spec.min,
                    max: spec.max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::EXEC_2024;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_baseline_values() {
        let settings = LeverSettings::baseline(&EXEC_2024);
        assert_eq!(settings.vat_rate, dec!(20.0));
        assert_eq!(settings.corporate_tax_rate, dec!(25));
        assert_eq!(
            settings.income_tax_progressivity,
            IncomeTaxProgressivity::Current
        );
        assert_eq!(settings.social_contribution_rate, dec!(9.2));
        assert_eq!(settings.health_spending_target, dec!(254));
        assert_eq!(settings.pension_indexation, PensionIndexation::Inflation);
        assert_eq!(settings.pay_index_change, dec!(0));
        assert_eq!(settings.local_grant, dec!(27));
    }

    #[test]
    fn test_baseline_is_valid() {
        assert!(LeverSettings::baseline(&EXEC_2024).validate(&EXEC_2024).is_ok());
    }

    #[test]
    fn test_set_then_value() {
        let mut settings = LeverSettings::baseline(&EXEC_2024);
        for lever in LeverId::ALL {
            settings.set(lever, dec!(1)).unwrap();
            assert_eq!(settings.value(lever), dec!(1));
        }
    }

    #[test]
    fn test_set_rejects_fractional_step() {
        let mut settings = LeverSettings::baseline(&EXEC_2024);
        let err = settings
            .set(LeverId::PensionIndexation, dec!(0.5))
            .unwrap_err();
        assert_eq!(
            err,
            LeverError::InvalidStep {
                lever: LeverId::PensionIndexation,
                value: dec!(0.5),
            }
        );
        assert_eq!(settings.pension_indexation, PensionIndexation::Inflation);
    }

    #[rstest]
    #[case(LeverId::VatRate, dec!(15.0))]
    #[case(LeverId::VatRate, dec!(25.0))]
    #[case(LeverId::CorporateTaxRate, dec!(10))]
    #[case(LeverId::CorporateTaxRate, dec!(50))]
    #[case(LeverId::SocialContributionRate, dec!(5.0))]
    #[case(LeverId::HealthSpendingTarget, dec!(300))]
    #[case(LeverId::PayIndexChange, dec!(-3.0))]
    #[case(LeverId::LocalGrant, dec!(40))]
    #[case(LeverId::IncomeTaxProgressivity, dec!(-1))]
    #[case(LeverId::PensionIndexation, dec!(1))]
    fn test_bounds_are_inclusive(#[case] lever: LeverId, #[case] value: Decimal) {
        let settings = LeverSettings::baseline(&EXEC_2024)
            .with(lever, value)
            .unwrap();
        assert!(settings.validate(&EXEC_2024).is_ok());
    }

    #[rstest]
    #[case(LeverId::VatRate, dec!(14.9))]
    #[case(LeverId::VatRate, dec!(25.1))]
    #[case(LeverId::CorporateTaxRate, dec!(51))]
    #[case(LeverId::SocialContributionRate, dec!(15.5))]
    #[case(LeverId::HealthSpendingTarget, dec!(199))]
    #[case(LeverId::PayIndexChange, dec!(5.01))]
    #[case(LeverId::LocalGrant, dec!(19))]
    fn test_out_of_range_is_rejected(#[case] lever: LeverId, #[case] value: Decimal) {
        let settings = LeverSettings::baseline(&EXEC_2024)
            .with(lever, value)
            .unwrap();
        match settings.validate(&EXEC_2024) {
            Err(LeverError::OutOfRange {
                lever: rejected,
                value: got,
                ..
            }) => {
                assert_eq!(rejected, lever);
                assert_eq!(got, value);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_message() {
        let err = LeverSettings::baseline(&EXEC_2024)
            .with(LeverId::VatRate, dec!(30))
            .unwrap()
            .validate(&EXEC_2024)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "vat_rate = 30 is outside the allowed range [15.0, 25.0]"
        );
    }
}
