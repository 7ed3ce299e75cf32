//! Structural validation of a graph snapshot.

use std::collections::HashSet;

use pf_core::{NodeId, StreamId};

use crate::error::GraphError;
use crate::graph::ProcessGraph;

/// Outcome of [`ProcessGraph::validate`].
///
/// `errors` make an analysis cycle meaningless (per-node results could not be
/// told apart). `warnings` are tolerated: the calculators degrade locally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<GraphError>,
    pub warnings: Vec<GraphError>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// First fatal fault, if any.
    pub fn first_error(&self) -> Option<&GraphError> {
        self.errors.first()
    }
}

impl ProcessGraph {
    /// Check ids and references.
    ///
    /// Errors: duplicate node ids. Warnings: duplicate stream ids, dangling
    /// stream endpoints, and units whose required parameters are unreadable.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        let mut seen_nodes: HashSet<&NodeId> = HashSet::new();
        for node in &self.nodes {
            if !seen_nodes.insert(&node.id) {
                report.errors.push(GraphError::DuplicateNode {
                    node: node.id.clone(),
                });
            }
            if let Err(source) = node.parameters.check_required() {
                report.warnings.push(GraphError::InvalidParameters {
                    node: node.id.clone(),
                    source,
                });
            }
        }

        let mut seen_streams: HashSet<&StreamId> = HashSet::new();
        for stream in &self.streams {
            if !seen_streams.insert(&stream.id) {
                report.warnings.push(GraphError::DuplicateStream {
                    stream: stream.id.clone(),
                });
            }
            for endpoint in [&stream.source_id, &stream.target_id] {
                if !seen_nodes.contains(endpoint) {
                    report.warnings.push(GraphError::DanglingStream {
                        stream: stream.id.clone(),
                        endpoint: endpoint.clone(),
                    });
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_model::{Equipment, EquipmentType, FLOW_RATE, Parameters, ProcessStream};

    #[test]
    fn validate_empty_graph() {
        assert!(ProcessGraph::empty().validate().is_clean());
    }

    #[test]
    fn duplicate_node_is_fatal() {
        let graph = ProcessGraph::from_parts(
            vec![
                Equipment::bare("a", EquipmentType::Feed),
                Equipment::bare("a", EquipmentType::Pump),
            ],
            vec![],
        );
        let report = graph.validate();
        assert!(!report.is_ok());
        assert!(matches!(
            report.first_error(),
            Some(GraphError::DuplicateNode { .. })
        ));
    }

    #[test]
    fn dangling_and_bad_params_are_warnings() {
        let bad = Equipment::bare("b", EquipmentType::Mixer)
            .with_parameters(Parameters::new().with(FLOW_RATE, "lots"));
        let graph = ProcessGraph::from_parts(
            vec![Equipment::bare("a", EquipmentType::Feed), bad],
            vec![
                ProcessStream::new("s1", "a", "ghost"),
                ProcessStream::new("s1", "a", "b"),
            ],
        );

        let report = graph.validate();
        assert!(report.is_ok());
        assert_eq!(report.warnings.len(), 3);
        assert!(report
            .warnings
            .iter()
            .any(|w| matches!(w, GraphError::DanglingStream { .. })));
        assert!(report
            .warnings
            .iter()
            .any(|w| matches!(w, GraphError::DuplicateStream { .. })));
        assert!(report
            .warnings
            .iter()
            .any(|w| matches!(w, GraphError::InvalidParameters { .. })));
    }
}
