//! Core traits for per-entity calculations and the batch runners over them.
//!
//! Every calculator computes one record per graph entity. A fault while computing
//! one entity never aborts the batch: the runner substitutes the calculator's
//! documented fallback record and logs the cause.

use pf_graph::ProcessGraph;
use pf_model::{Equipment, ProcessStream};
use tracing::warn;

use crate::error::{CalcError, CalcResult};

/// The result of evaluating one entity: either the computed record or the
/// fallback that replaced it, together with the reason.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<R> {
    Computed(R),
    Fallback { record: R, cause: CalcError },
}

impl<R> Outcome<R> {
    pub fn record(&self) -> &R {
        match self {
            Outcome::Computed(record) | Outcome::Fallback { record, .. } => record,
        }
    }

    pub fn into_record(self) -> R {
        match self {
            Outcome::Computed(record) | Outcome::Fallback { record, .. } => record,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }
}

/// A calculation producing one record per (eligible) equipment unit.
pub trait NodeCalculation {
    type Record;

    /// Calculation name for diagnostics.
    fn name(&self) -> &'static str;

    /// Whether `node` gets a record at all. Excluded nodes are skipped, not
    /// zero-filled.
    fn applies_to(&self, _node: &Equipment) -> bool {
        true
    }

    /// Compute the record for `node`, reading its incident streams from `graph`.
    fn compute(&self, graph: &ProcessGraph, node: &Equipment) -> CalcResult<Self::Record>;

    /// Record reported when `compute` fails.
    fn fallback(&self, node: &Equipment) -> Self::Record;
}

/// A calculation producing one record per stream.
pub trait StreamCalculation {
    type Record;

    fn name(&self) -> &'static str;

    fn compute(&self, stream: &ProcessStream) -> CalcResult<Self::Record>;

    fn fallback(&self, stream: &ProcessStream) -> Self::Record;
}

/// Evaluate `calc` over every eligible node, keeping track of fallbacks.
pub fn evaluate_nodes<C: NodeCalculation>(
    calc: &C,
    graph: &ProcessGraph,
) -> Vec<Outcome<C::Record>> {
    graph
        .nodes()
        .iter()
        .filter(|node| calc.applies_to(node))
        .map(|node| match calc.compute(graph, node) {
            Ok(record) => Outcome::Computed(record),
            Err(cause) => {
                warn!(
                    "{} for equipment {} failed, using fallback: {}",
                    calc.name(),
                    node.id,
                    cause
                );
                Outcome::Fallback {
                    record: calc.fallback(node),
                    cause,
                }
            }
        })
        .collect()
}

/// Evaluate `calc` over every stream, keeping track of fallbacks.
pub fn evaluate_streams<C: StreamCalculation>(
    calc: &C,
    graph: &ProcessGraph,
) -> Vec<Outcome<C::Record>> {
    graph
        .streams()
        .iter()
        .map(|stream| match calc.compute(stream) {
            Ok(record) => Outcome::Computed(record),
            Err(cause) => {
                warn!(
                    "{} for stream {} failed, using fallback: {}",
                    calc.name(),
                    stream.id,
                    cause
                );
                Outcome::Fallback {
                    record: calc.fallback(stream),
                    cause,
                }
            }
        })
        .collect()
}

/// Records of [`evaluate_nodes`], fallbacks included.
pub fn run_nodes<C: NodeCalculation>(calc: &C, graph: &ProcessGraph) -> Vec<C::Record> {
    evaluate_nodes(calc, graph)
        .into_iter()
        .map(Outcome::into_record)
        .collect()
}

/// Records of [`evaluate_streams`], fallbacks included.
pub fn run_streams<C: StreamCalculation>(calc: &C, graph: &ProcessGraph) -> Vec<C::Record> {
    evaluate_streams(calc, graph)
        .into_iter()
        .map(Outcome::into_record)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_model::EquipmentType;

    struct FailsOnPumps;

    impl NodeCalculation for FailsOnPumps {
        type Record = &'static str;

        fn name(&self) -> &'static str {
            "pump check"
        }

        fn applies_to(&self, node: &Equipment) -> bool {
            node.kind != EquipmentType::Sensor
        }

        fn compute(&self, _graph: &ProcessGraph, node: &Equipment) -> CalcResult<&'static str> {
            if node.kind == EquipmentType::Pump {
                Err(CalcError::NonPhysical { what: "pump" })
            } else {
                Ok("ok")
            }
        }

        fn fallback(&self, _node: &Equipment) -> &'static str {
            "fallback"
        }
    }

    #[test]
    fn one_failure_does_not_abort_the_batch() {
        let graph = ProcessGraph::from_parts(
            vec![
                Equipment::bare("a", EquipmentType::Feed),
                Equipment::bare("b", EquipmentType::Pump),
                Equipment::bare("c", EquipmentType::Sensor),
                Equipment::bare("d", EquipmentType::Tank),
            ],
            vec![],
        );

        let outcomes = evaluate_nodes(&FailsOnPumps, &graph);
        assert_eq!(outcomes.len(), 3);
        assert!(!outcomes[0].is_fallback());
        assert!(outcomes[1].is_fallback());
        assert_eq!(*outcomes[1].record(), "fallback");

        assert_eq!(run_nodes(&FailsOnPumps, &graph), ["ok", "fallback", "ok"]);
    }
}
