//! Mass balance: what flows into and out of each unit.

use pf_core::{ChemicalId, NodeId};
use pf_graph::ProcessGraph;
use pf_model::{Equipment, ProcessStream, find_component};
use serde::{Deserialize, Serialize};

use crate::common::{NOMINAL_EFFICIENCY, check_required};
use crate::efficiency::estimate_efficiency;
use crate::error::CalcResult;
use crate::traits::{NodeCalculation, run_nodes};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentBalance {
    pub chemical_id: ChemicalId,
    pub in_flow: f64,
    pub out_flow: f64,
    pub accumulation: f64,
}

/// Per-unit mass balance. `accumulation = in_flow − out_flow`; a positive value
/// means the unit is net accumulating, which is a valid result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MassBalanceRecord {
    pub id: NodeId,
    pub name: String,
    pub in_flow: f64,
    pub out_flow: f64,
    pub accumulation: f64,
    pub component_balance: Vec<ComponentBalance>,
    pub efficiency: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MassBalance;

impl NodeCalculation for MassBalance {
    type Record = MassBalanceRecord;

    fn name(&self) -> &'static str {
        "mass balance"
    }

    fn compute(&self, graph: &ProcessGraph, node: &Equipment) -> CalcResult<MassBalanceRecord> {
        check_required(node)?;

        let inflows: Vec<&ProcessStream> = graph.incoming(&node.id).collect();
        let outflows: Vec<&ProcessStream> = graph.outgoing(&node.id).collect();

        let in_flow = total_flow(&inflows);
        let out_flow = total_flow(&outflows);

        let component_balance = node
            .composition
            .iter()
            .map(|entry| {
                let comp_in = component_flow(&inflows, &entry.chemical_id);
                let comp_out = component_flow(&outflows, &entry.chemical_id);
                ComponentBalance {
                    chemical_id: entry.chemical_id.clone(),
                    in_flow: comp_in,
                    out_flow: comp_out,
                    accumulation: comp_in - comp_out,
                }
            })
            .collect();

        Ok(MassBalanceRecord {
            id: node.id.clone(),
            name: node.display_name(),
            in_flow,
            out_flow,
            accumulation: in_flow - out_flow,
            component_balance,
            efficiency: estimate_efficiency(node),
        })
    }

    fn fallback(&self, node: &Equipment) -> MassBalanceRecord {
        MassBalanceRecord {
            id: node.id.clone(),
            name: node.display_name(),
            in_flow: 0.0,
            out_flow: 0.0,
            accumulation: 0.0,
            component_balance: Vec::new(),
            efficiency: NOMINAL_EFFICIENCY,
        }
    }
}

fn total_flow(streams: &[&ProcessStream]) -> f64 {
    streams.iter().map(|s| s.total_flow).sum()
}

/// Sum of the first matching component's mass flow in each stream.
fn component_flow(streams: &[&ProcessStream], chemical: &ChemicalId) -> f64 {
    streams
        .iter()
        .filter_map(|s| find_component(&s.composition, chemical))
        .map(|c| c.mass_flow)
        .sum()
}

/// Mass balance for every unit, in node order.
pub fn calculate_mass_balance(graph: &ProcessGraph) -> Vec<MassBalanceRecord> {
    run_nodes(&MassBalance, graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_model::{ChemicalComposition, EquipmentType, FLOW_RATE, Parameters};

    #[test]
    fn feed_into_dead_end_reactor_accumulates() {
        let graph = ProcessGraph::from_parts(
            vec![
                Equipment::new("feed", EquipmentType::Feed),
                Equipment::new("r1", EquipmentType::Reactor),
            ],
            vec![ProcessStream::new("s1", "feed", "r1").with_total_flow(100.0)],
        );

        let records = calculate_mass_balance(&graph);
        assert_eq!(records.len(), 2);

        let reactor = &records[1];
        assert_eq!(reactor.in_flow, 100.0);
        assert_eq!(reactor.out_flow, 0.0);
        assert_eq!(reactor.accumulation, 100.0);

        let feed = &records[0];
        assert_eq!(feed.out_flow, 100.0);
        assert_eq!(feed.accumulation, -100.0);
    }

    #[test]
    fn component_flows_follow_declared_entries() {
        let mixer = Equipment::new("m", EquipmentType::Mixer).with_composition(vec![
            ChemicalComposition::pure("water"),
            ChemicalComposition::pure("ethanol"),
            ChemicalComposition::pure("benzene"),
        ]);
        let graph = ProcessGraph::from_parts(
            vec![
                Equipment::new("a", EquipmentType::Feed),
                Equipment::new("b", EquipmentType::Feed),
                mixer,
                Equipment::new("out", EquipmentType::Tank),
            ],
            vec![
                ProcessStream::new("s1", "a", "m").with_composition(vec![
                    ChemicalComposition::new("water", 0.5, 30.0),
                    ChemicalComposition::new("water", 0.5, 99.0),
                ]),
                ProcessStream::new("s2", "b", "m")
                    .with_composition(vec![ChemicalComposition::new("ethanol", 1.0, 20.0)]),
                ProcessStream::new("s3", "m", "out").with_composition(vec![
                    ChemicalComposition::new("water", 0.6, 25.0),
                    ChemicalComposition::new("ethanol", 0.4, 20.0),
                ]),
            ],
        );

        let records = calculate_mass_balance(&graph);
        let mixer = records.iter().find(|r| r.id.as_str() == "m").unwrap();
        let water = &mixer.component_balance[0];
        assert_eq!(water.in_flow, 30.0);
        assert_eq!(water.out_flow, 25.0);
        assert_eq!(water.accumulation, 5.0);

        let ethanol = &mixer.component_balance[1];
        assert_eq!(ethanol.accumulation, 0.0);

        let benzene = &mixer.component_balance[2];
        assert_eq!(benzene.in_flow, 0.0);
        assert_eq!(benzene.out_flow, 0.0);
    }

    #[test]
    fn malformed_unit_gets_fallback_only_for_itself() {
        let bad = Equipment::new("bad", EquipmentType::Mixer)
            .with_parameters(Parameters::process(25.0, 1.0, 0.0).with(FLOW_RATE, "lots"));
        let graph = ProcessGraph::from_parts(
            vec![
                Equipment::new("feed", EquipmentType::Feed),
                bad,
                Equipment::new("tank", EquipmentType::Tank),
            ],
            vec![
                ProcessStream::new("s1", "feed", "bad").with_total_flow(10.0),
                ProcessStream::new("s2", "feed", "tank").with_total_flow(5.0),
            ],
        );

        let records = calculate_mass_balance(&graph);
        assert_eq!(records[1], MassBalance.fallback(graph.node(&"bad".into()).unwrap()));
        assert_eq!(records[1].efficiency, 0.85);
        assert_eq!(records[0].out_flow, 15.0);
        assert_eq!(records[2].in_flow, 5.0);
    }

    #[test]
    fn blank_name_uses_id() {
        let graph = ProcessGraph::from_parts(vec![Equipment::bare("x7", EquipmentType::Tank)], vec![]);
        let records = calculate_mass_balance(&graph);
        assert_eq!(records[0].name, "Equipment x7");
    }

    #[test]
    fn wire_names() {
        let graph = ProcessGraph::from_parts(vec![Equipment::bare("x", EquipmentType::Tank)], vec![]);
        let json = serde_json::to_value(&calculate_mass_balance(&graph)[0]).unwrap();
        assert!(json.get("inFlow").is_some());
        assert!(json.get("componentBalance").is_some());
    }
}
