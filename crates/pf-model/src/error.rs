//! Error types for the domain model.

use thiserror::Error;

/// A parameter in an equipment parameter bag could not be read as a number.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("Parameter '{key}' is not numeric: {value:?}")]
    NotNumeric { key: String, value: String },

    #[error("Parameter '{key}' is not finite: {value}")]
    NonFinite { key: String, value: f64 },
}

/// Errors raised while constructing or editing model entities.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error(transparent)]
    Param(#[from] ParamError),

    #[error("Unknown equipment type: {0}")]
    UnknownEquipmentType(String),

    #[error("Invalid chemical: {what}")]
    InvalidChemical { what: &'static str },
}

pub type ModelResult<T> = Result<T, ModelError>;
