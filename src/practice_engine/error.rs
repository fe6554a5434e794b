//! Error type for the fallible corners of the engine.
//!
//! Generation itself never fails from the caller's point of view: a rejected
//! draw is redrawn, and [`DrillError::Exhausted`] is turned into a fallback
//! problem inside the unit generators.

use thiserror::Error;

use crate::practice_engine::models::Unit;

pub type Result<T> = std::result::Result<T, DrillError>;

#[derive(Debug, Error)]
pub enum DrillError {
    #[error("unknown unit id: {0}")]
    UnknownUnit(String),

    #[error("failed to parse message catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("{unit} generation gave up after {attempts} rejected draws")]
    Exhausted { unit: Unit, attempts: u32 },
}
