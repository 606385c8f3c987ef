//! Fiscal impact of lever settings.

pub mod engine;
pub mod types;


pub use engine::ImpactCalculator;
pub use types::{
    BudgetState, DecileImpact, IndustryImpact, LeverContribution, SimulationReport,
    SubSectorBalance,
};
