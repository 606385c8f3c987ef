//! 2024 budget execution, used as the n-1 baseline.

use rust_decimal_macros::dec;

use super::{Industry, IndustryShare, LeverSpec, ReferenceTable, SubSectorBaseline};
use crate::levers::{LeverId, LeverKind, LeverUnit, SubSector};

/// Reference table built on the 2024 execution.
pub static EXEC_2024: ReferenceTable = ReferenceTable {
    vintage: "exec-2024",
    gdp: dec!(2917),
    initial_debt: dec!(3305),
    sub_sectors: [
        SubSectorBaseline {
            sector: SubSector::State,
            balance: dec!(-145),
        },
        SubSectorBaseline {
            sector: SubSector::SocialSecurity,
            balance: dec!(-8),
        },
        SubSectorBaseline {
            sector: SubSector::LocalGovernment,
            balance: dec!(2),
        },
    ],
    levers: [
        LeverSpec {
            id: LeverId::VatRate,
            label: "Standard VAT rate",
            unit: LeverUnit::Percent,
            kind: LeverKind::Revenue,
            sub_sector: SubSector::State,
            min: dec!(15.0),
            max: dec!(25.0),
            baseline: dec!(20.0),
            coefficient: dec!(11.0),
        },
        LeverSpec {
            id: LeverId::CorporateTaxRate,
            label: "Corporate tax rate",
            unit: LeverUnit::Percent,
            kind: LeverKind::Revenue,
            sub_sector: SubSector::State,
            min: dec!(10),
            max: dec!(50),
            baseline: dec!(25),
            coefficient: dec!(2.4),
        },
        LeverSpec {
            id: LeverId::IncomeTaxProgressivity,
            label: "Income tax progressivity",
            unit: LeverUnit::Step,
            kind: LeverKind::Revenue,
            sub_sector: SubSector::State,
            min: dec!(-1),
            max: dec!(1),
            baseline: dec!(0),
            coefficient: dec!(4.0),
        },
        LeverSpec {
            id: LeverId::SocialContributionRate,
            label: "CSG rate on earned income",
            unit: LeverUnit::Percent,
            kind: LeverKind::Revenue,
            sub_sector: SubSector::SocialSecurity,
            min: dec!(5.0),
            max: dec!(15.0),
            baseline: dec!(9.2),
            coefficient: dec!(13.5),
        },
        LeverSpec {
            id: LeverId::HealthSpendingTarget,
            label: "Health spending target (ONDAM)",
            unit: LeverUnit::BillionEuros,
            kind: LeverKind::Expense,
            sub_sector: SubSector::SocialSecurity,
            min: dec!(200),
            max: dec!(300),
            baseline: dec!(254),
            coefficient: dec!(1.0),
        },
        LeverSpec {
            id: LeverId::PensionIndexation,
            label: "Pension indexation",
            unit: LeverUnit::Step,
            kind: LeverKind::Expense,
            sub_sector: SubSector::SocialSecurity,
            min: dec!(-1),
            max: dec!(1),
            baseline: dec!(0),
            coefficient: dec!(3.5),
        },
        LeverSpec {
            id: LeverId::PayIndexChange,
            label: "Civil-service pay index change",
            unit: LeverUnit::Percent,
            kind: LeverKind::Expense,
            sub_sector: SubSector::State,
            min: dec!(-3.0),
            max: dec!(5.0),
            baseline: dec!(0.0),
            coefficient: dec!(2.3),
        },
        // DGF is booked at the paying sub-sector.
        LeverSpec {
            id: LeverId::LocalGrant,
            label: "Local government grant (DGF)",
            unit: LeverUnit::BillionEuros,
            kind: LeverKind::Expense,
            sub_sector: SubSector::State,
            min: dec!(20),
            max: dec!(40),
            baseline: dec!(27),
            coefficient: dec!(1.0),
        },
    ],
    decile_vat_multipliers: [
        dec!(1.2),
        dec!(1.1),
        dec!(0.9),
        dec!(0.8),
        dec!(0.7),
        dec!(0.6),
        dec!(0.5),
        dec!(0.4),
        dec!(0.3),
        dec!(0.2),
    ],
    industry_shares: [
        IndustryShare {
            industry: Industry::Manufacturing,
            corporate_tax: dec!(0.35),
            social_contributions: dec!(0.20),
        },
        IndustryShare {
            industry: Industry::Trade,
            corporate_tax: dec!(0.20),
            social_contributions: dec!(0.15),
        },
        IndustryShare {
            industry: Industry::Services,
            corporate_tax: dec!(0.45),
            social_contributions: dec!(0.65),
        },
    ],
};
