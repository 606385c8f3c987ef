//! Policy levers: identifiers, settings and range validation.

pub mod error;
pub mod settings;
pub mod types;

pub use error::LeverError;
pub use settings::LeverSettings;
pub use types::{
    IncomeTaxProgressivity, LeverId, LeverKind, LeverUnit, PensionIndexation, SubSector,
};
