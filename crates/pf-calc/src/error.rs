//! Error types for calculator operations.

use pf_core::error::PfError;
use pf_model::ParamError;
use thiserror::Error;

/// Errors that can occur while computing one entity's record.
///
/// None of these abort a batch: the batch runners turn them into the
/// calculator's documented fallback record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error(transparent)]
    Param(#[from] ParamError),

    /// An intermediate result left the finite reals.
    #[error(transparent)]
    Numeric(#[from] PfError),

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },
}

pub type CalcResult<T> = Result<T, CalcError>;
