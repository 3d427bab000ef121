//! Core invoice types, totals, and structural validation.
//!
//! All amounts are [`rust_decimal::Decimal`]; VAT is the fixed standard rate
//! [`VAT_RATE`].

mod builder;
mod error;
mod totals;
mod types;
mod validation;

pub use builder::*;
pub(crate) use error::validation_failure;
pub use error::{FatooraError, ValidationError};
pub use totals::*;
pub use types::*;
pub use validation::*;
