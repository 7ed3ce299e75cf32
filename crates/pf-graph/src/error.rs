//! Graph-specific error types.

use pf_core::{NodeId, StreamId};
use pf_model::ParamError;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Two units share one id.
    DuplicateNode { node: NodeId },

    /// Two streams share one id.
    DuplicateStream { stream: StreamId },

    /// A stream endpoint does not resolve to any unit.
    DanglingStream { stream: StreamId, endpoint: NodeId },

    /// A unit's required parameters are present but unreadable.
    InvalidParameters { node: NodeId, source: ParamError },

    /// The referenced unit does not exist.
    NodeNotFound { node: NodeId },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::DuplicateNode { node } => {
                write!(f, "Equipment id {} is used more than once", node)
            }
            GraphError::DuplicateStream { stream } => {
                write!(f, "Stream id {} is used more than once", stream)
            }
            GraphError::DanglingStream { stream, endpoint } => {
                write!(
                    f,
                    "Stream {} refers to non-existent equipment {}",
                    stream, endpoint
                )
            }
            GraphError::InvalidParameters { node, source } => {
                write!(f, "Equipment {} has invalid parameters: {}", node, source)
            }
            GraphError::NodeNotFound { node } => {
                write!(f, "Equipment {} not found", node)
            }
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraphError::InvalidParameters { source, .. } => Some(source),
            _ => None,
        }
    }
}
