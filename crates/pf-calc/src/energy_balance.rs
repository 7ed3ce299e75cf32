//! Energy balance over enthalpy-equivalent stream flows.

use pf_core::NodeId;
use pf_graph::ProcessGraph;
use pf_model::{Equipment, ProcessStream};
use serde::{Deserialize, Serialize};

use crate::common::{
    CP_ENTHALPY_PROXY, NOMINAL_EFFICIENCY, REFERENCE_TEMPERATURE, check_required, param_or,
};
use crate::efficiency::estimate_efficiency;
use crate::error::CalcResult;
use crate::traits::{NodeCalculation, run_nodes};

/// Per-unit energy balance: `net = in − out + equipment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyBalanceRecord {
    pub id: NodeId,
    pub name: String,
    pub in_energy: f64,
    pub out_energy: f64,
    /// `heatDuty + power` of the unit itself.
    pub equipment_energy: f64,
    pub net_energy: f64,
    pub efficiency: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnergyBalance;

/// Enthalpy proxy of a stream relative to 25 °C: Σ massFlow × 4.186 × (T − 25).
///
/// The stream's own aggregate temperature applies to every component. An
/// unset (zero) temperature is read as the reference.
pub fn stream_enthalpy(stream: &ProcessStream) -> f64 {
    let temperature = if stream.temperature == 0.0 {
        REFERENCE_TEMPERATURE
    } else {
        stream.temperature
    };
    let delta_t = temperature - REFERENCE_TEMPERATURE;
    stream
        .composition
        .iter()
        .map(|c| c.mass_flow * CP_ENTHALPY_PROXY * delta_t)
        .sum()
}

impl NodeCalculation for EnergyBalance {
    type Record = EnergyBalanceRecord;

    fn name(&self) -> &'static str {
        "energy balance"
    }

    fn compute(&self, graph: &ProcessGraph, node: &Equipment) -> CalcResult<EnergyBalanceRecord> {
        check_required(node)?;

        let in_energy: f64 = graph.incoming(&node.id).map(stream_enthalpy).sum();
        let out_energy: f64 = graph.outgoing(&node.id).map(stream_enthalpy).sum();
        let equipment_energy = param_or(node, "heatDuty", 0.0)? + param_or(node, "power", 0.0)?;

        Ok(EnergyBalanceRecord {
            id: node.id.clone(),
            name: node.display_name(),
            in_energy,
            out_energy,
            equipment_energy,
            net_energy: in_energy - out_energy + equipment_energy,
            efficiency: estimate_efficiency(node),
        })
    }

    fn fallback(&self, node: &Equipment) -> EnergyBalanceRecord {
        EnergyBalanceRecord {
            id: node.id.clone(),
            name: node.display_name(),
            in_energy: 0.0,
            out_energy: 0.0,
            equipment_energy: 0.0,
            net_energy: 0.0,
            efficiency: NOMINAL_EFFICIENCY,
        }
    }
}

/// Energy balance for every unit, in node order.
pub fn calculate_energy_balance(graph: &ProcessGraph) -> Vec<EnergyBalanceRecord> {
    run_nodes(&EnergyBalance, graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::numeric::{Tolerances, nearly_equal};
    use pf_model::{ChemicalComposition, EquipmentType, Parameters, TEMPERATURE};

    fn hot_stream(id: &str, from: &str, to: &str, t: f64, mass: f64) -> ProcessStream {
        ProcessStream::new(id, from, to)
            .with_temperature(t)
            .with_composition(vec![ChemicalComposition::new("water", 1.0, mass)])
    }

    #[test]
    fn enthalpy_is_relative_to_reference() {
        let s = hot_stream("s", "a", "b", 35.0, 2.0);
        assert!(nearly_equal(
            stream_enthalpy(&s),
            2.0 * 4.186 * 10.0,
            Tolerances::default()
        ));
        assert_eq!(stream_enthalpy(&hot_stream("s", "a", "b", 25.0, 9.0)), 0.0);
        assert_eq!(stream_enthalpy(&ProcessStream::new("e", "a", "b")), 0.0);
    }

    #[test]
    fn unset_temperature_carries_no_enthalpy() {
        let parsed: ProcessStream = serde_json::from_str(
            r#"{"id":"s","sourceId":"a","targetId":"b",
                "composition":[{"chemicalId":"water","massFlow":10}]}"#,
        )
        .unwrap();
        assert_eq!(stream_enthalpy(&parsed), 0.0);
        assert_eq!(stream_enthalpy(&hot_stream("z", "a", "b", 0.0, 10.0)), 0.0);

        let tank = Equipment::bare("t", EquipmentType::Tank)
            .with_composition(vec![ChemicalComposition::new("water", 1.0, 10.0)]);
        let derived = ProcessStream::from_source("s1", &tank, "b").unwrap();
        let graph = ProcessGraph::from_parts(
            vec![tank, Equipment::bare("b", EquipmentType::Mixer)],
            vec![derived],
        );
        let mixer = EnergyBalance.compute(&graph, &graph.nodes()[1]).unwrap();
        assert_eq!(mixer.in_energy, 0.0);
        assert_eq!(calculate_energy_balance(&graph)[0].out_energy, 0.0);
    }

    #[test]
    fn heater_balance() {
        let heater = Equipment::bare("h", EquipmentType::Heater).with_parameters(
            Parameters::process(80.0, 1.0, 10.0)
                .with("heatDuty", 500.0)
                .with("power", 20.0),
        );
        let graph = ProcessGraph::from_parts(
            vec![
                Equipment::bare("in", EquipmentType::Feed),
                heater,
                Equipment::bare("out", EquipmentType::Tank),
            ],
            vec![
                hot_stream("s1", "in", "h", 25.0, 10.0),
                hot_stream("s2", "h", "out", 80.0, 10.0),
            ],
        );

        let records = calculate_energy_balance(&graph);
        let h = &records[1];
        assert_eq!(h.in_energy, 0.0);
        assert!(nearly_equal(
            h.out_energy,
            10.0 * 4.186 * 55.0,
            Tolerances::default()
        ));
        assert_eq!(h.equipment_energy, 520.0);
        assert!(nearly_equal(
            h.net_energy,
            h.in_energy - h.out_energy + 520.0,
            Tolerances::default()
        ));
    }

    #[test]
    fn malformed_unit_gets_fallback() {
        let bad = Equipment::bare("b", EquipmentType::Heater)
            .with_parameters(Parameters::new().with(TEMPERATURE, f64::NAN));
        let graph = ProcessGraph::from_parts(vec![bad], vec![]);
        let records = calculate_energy_balance(&graph);
        assert_eq!(records[0].net_energy, 0.0);
        assert_eq!(records[0].efficiency, 0.85);
    }

    #[test]
    fn textual_duty_is_a_fault() {
        let bad = Equipment::bare("b", EquipmentType::Boiler)
            .with_parameters(Parameters::new().with("heatDuty", "high"));
        let graph = ProcessGraph::from_parts(vec![bad], vec![]);
        assert!(EnergyBalance.compute(&graph, &graph.nodes()[0]).is_err());
    }
}
