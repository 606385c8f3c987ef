//! Fiscal impact model for Budget Cockpit.
//!
//! This crate contains the pure calculation with ZERO web dependencies.
//! All lever types, reference data and impact formulas live here.
//!
//! # Modules
//!
//! - `levers` - Lever identifiers, settings record and range validation
//! - `reference` - Versioned baselines, coefficients and aggregates
//! - `impact` - Linear budget, decile and industry impact calculation

pub mod impact;
pub mod levers;
pub mod reference;

pub use impact::{BudgetState, ImpactCalculator, SimulationReport};
pub use levers::{LeverError, LeverId, LeverSettings};
pub use reference::{EXEC_2024, ReferenceError, ReferenceTable};
