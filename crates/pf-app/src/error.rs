//! Error types for the pf-app service layer.

use std::path::PathBuf;

use pf_calc::CalcError;
use pf_graph::GraphError;
use pf_model::{ModelError, ParamError};

/// Application error type that wraps errors from the backend crates and gives
/// the session and the CLI one error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read flowsheet file: {path}")]
    FlowsheetRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse flowsheet: {0}")]
    FlowsheetParse(String),

    #[error("Unsupported flowsheet format: {0}")]
    UnsupportedFormat(String),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Calculation error: {0}")]
    Calc(#[from] CalcError),

    #[error("Unknown thermodynamic model: {0}")]
    UnknownModel(String),

    #[error("Unknown chemical: {0}")]
    UnknownChemical(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<ParamError> for AppError {
    fn from(err: ParamError) -> Self {
        AppError::Model(ModelError::Param(err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_errors_keep_their_message() {
        let err: AppError = GraphError::NodeNotFound {
            node: "node_9".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Graph error: Equipment node_9 not found");
    }

    #[test]
    fn param_errors_become_model_errors() {
        let err: AppError = ParamError::NotNumeric {
            key: "flowRate".into(),
            value: "fast".into(),
        }
        .into();
        assert!(matches!(err, AppError::Model(ModelError::Param(_))));
    }
}
