//! Heat-exchanger duty and effectiveness.
//!
//! The driving force is the plain difference between the unit temperature and
//! its `inletTemp`; it stands in for a true log-mean temperature difference.

use pf_core::NodeId;
use pf_graph::ProcessGraph;
use pf_model::Equipment;
use serde::{Deserialize, Serialize};

use crate::common::{
    CP_EFFECTIVENESS_PROXY, REFERENCE_TEMPERATURE, check_finite, node_flow_rate, node_temperature,
    param_or,
};
use crate::error::CalcResult;
use crate::traits::{NodeCalculation, run_nodes};

/// Overall heat-transfer coefficient when none is declared (W/(m²·K)).
pub const DEFAULT_COEFFICIENT: f64 = 500.0;

/// Exchange area when none is declared (m²).
pub const DEFAULT_AREA: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatTransferRecord {
    pub id: NodeId,
    pub name: String,
    pub heat_duty: f64,
    #[serde(rename = "LMTD")]
    pub lmtd: f64,
    pub coefficient: f64,
    /// At most 1.
    pub effectiveness: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeatTransfer;

impl NodeCalculation for HeatTransfer {
    type Record = HeatTransferRecord;

    fn name(&self) -> &'static str {
        "heat transfer"
    }

    fn applies_to(&self, node: &Equipment) -> bool {
        node.kind.reports_heat_transfer()
    }

    fn compute(&self, _graph: &ProcessGraph, node: &Equipment) -> CalcResult<HeatTransferRecord> {
        let t1 = node_temperature(node)?;
        let t2 = param_or(node, "inletTemp", REFERENCE_TEMPERATURE)?;
        let flow_rate = node_flow_rate(node)?;
        let area = param_or(node, "area", DEFAULT_AREA)?;
        let coefficient = param_or(node, "coefficient", DEFAULT_COEFFICIENT)?;

        if t1 == t2 {
            return Ok(HeatTransferRecord {
                id: node.id.clone(),
                name: node.display_name(),
                heat_duty: 0.0,
                lmtd: 0.0,
                coefficient,
                effectiveness: 0.0,
            });
        }

        let lmtd = check_finite((t1 - t2).abs(), "temperature difference")?;
        let heat_duty = check_finite(coefficient * area * lmtd, "heat duty")?;
        let effectiveness = if flow_rate > 0.0 {
            check_finite(
                heat_duty / (flow_rate * CP_EFFECTIVENESS_PROXY * lmtd),
                "effectiveness",
            )?
        } else {
            0.0
        };

        Ok(HeatTransferRecord {
            id: node.id.clone(),
            name: node.display_name(),
            heat_duty,
            lmtd,
            coefficient,
            effectiveness: effectiveness.min(1.0),
        })
    }

    fn fallback(&self, node: &Equipment) -> HeatTransferRecord {
        HeatTransferRecord {
            id: node.id.clone(),
            name: node.display_name(),
            heat_duty: 0.0,
            lmtd: 0.0,
            coefficient: DEFAULT_COEFFICIENT,
            effectiveness: 0.0,
        }
    }
}

/// Heat-transfer records for every generic heat exchanger; heaters, coolers
/// and the other exchanger styles are left out.
pub fn calculate_heat_transfer(graph: &ProcessGraph) -> Vec<HeatTransferRecord> {
    run_nodes(&HeatTransfer, graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::numeric::{Tolerances, nearly_equal};
    use pf_model::{EquipmentType, FLOW_RATE, Parameters, TEMPERATURE};

    fn exchanger(kind: EquipmentType, params: Parameters) -> ProcessGraph {
        ProcessGraph::from_parts(
            vec![Equipment::bare("hx", kind).with_parameters(params)],
            vec![],
        )
    }

    #[test]
    fn equal_temperatures_give_no_duty() {
        let graph = exchanger(
            EquipmentType::HeatExchanger,
            Parameters::new()
                .with(TEMPERATURE, 70.0)
                .with("inletTemp", 70.0)
                .with("coefficient", 650.0),
        );
        let r = &calculate_heat_transfer(&graph)[0];
        assert_eq!(r.heat_duty, 0.0);
        assert_eq!(r.lmtd, 0.0);
        assert_eq!(r.effectiveness, 0.0);
        assert_eq!(r.coefficient, 650.0);
    }

    #[test]
    fn duty_and_effectiveness() {
        let graph = exchanger(
            EquipmentType::HeatExchanger,
            Parameters::new()
                .with(TEMPERATURE, 80.0)
                .with("inletTemp", 25.0)
                .with(FLOW_RATE, 10.0),
        );
        let r = &calculate_heat_transfer(&graph)[0];
        assert_eq!(r.lmtd, 55.0);
        assert_eq!(r.heat_duty, 500.0 * 10.0 * 55.0);
        assert!(nearly_equal(
            r.effectiveness,
            (500.0 * 10.0 * 55.0) / (10.0 * 4186.0 * 55.0),
            Tolerances::default()
        ));
    }

    #[test]
    fn effectiveness_is_capped_and_needs_flow() {
        let tiny_flow = exchanger(
            EquipmentType::HeatExchanger,
            Parameters::new()
                .with(TEMPERATURE, 30.0)
                .with("inletTemp", 80.0)
                .with(FLOW_RATE, 0.001),
        );
        assert_eq!(calculate_heat_transfer(&tiny_flow)[0].effectiveness, 1.0);

        let no_flow = exchanger(
            EquipmentType::HeatExchanger,
            Parameters::new().with(TEMPERATURE, 30.0),
        );
        let r = &calculate_heat_transfer(&no_flow)[0];
        assert_eq!(r.effectiveness, 0.0);
        assert_eq!(r.lmtd, 5.0);
    }

    #[test]
    fn only_exchangers_are_reported() {
        let graph = ProcessGraph::from_parts(
            vec![
                Equipment::new("p", EquipmentType::Pump),
                Equipment::new("a", EquipmentType::AirCooled),
                Equipment::new("x", EquipmentType::HeatExchanger),
                Equipment::new("h", EquipmentType::Heater),
                Equipment::new("c", EquipmentType::Cooler),
                Equipment::new("b", EquipmentType::Boiler),
                Equipment::new("pl", EquipmentType::Plate),
                Equipment::new("d", EquipmentType::DoublePipe),
            ],
            vec![],
        );
        let ids: Vec<_> = calculate_heat_transfer(&graph)
            .into_iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(ids, ["x"]);
    }

    #[test]
    fn serialized_lmtd_key() {
        let graph = exchanger(EquipmentType::HeatExchanger, Parameters::new());
        let json = serde_json::to_value(&calculate_heat_transfer(&graph)[0]).unwrap();
        assert!(json.get("LMTD").is_some());
        assert!(json.get("heatDuty").is_some());
    }

    #[test]
    fn textual_area_falls_back() {
        let graph = exchanger(
            EquipmentType::HeatExchanger,
            Parameters::new().with(TEMPERATURE, 90.0).with("area", "big"),
        );
        let r = &calculate_heat_transfer(&graph)[0];
        assert_eq!(*r, HeatTransfer.fallback(&graph.nodes()[0]));
        assert_eq!(r.coefficient, 500.0);
    }
}
