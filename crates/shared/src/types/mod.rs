//! Common types used across the application.

pub mod money;
pub mod ratio;

pub use money::BillionEuros;
pub use ratio::Percent;
