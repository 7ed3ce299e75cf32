//! Full analysis of one graph snapshot.

use pf_calc::{
    EnergyBalanceRecord, HeatTransferRecord, MassBalanceRecord, PressureDropRecord, VleRecord,
    calculate_energy_balance, calculate_heat_transfer, calculate_mass_balance,
    calculate_pressure_drop, calculate_vle,
};
use pf_graph::ProcessGraph;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{AppError, AppResult};

/// Every calculator's records for one snapshot.
///
/// Recomputed wholesale on each graph change; any entry may be its
/// calculator's fallback record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub mass_balance: Vec<MassBalanceRecord>,
    pub energy_balance: Vec<EnergyBalanceRecord>,
    pub vle: Vec<VleRecord>,
    pub pressure_drops: Vec<PressureDropRecord>,
    pub heat_transfer: Vec<HeatTransferRecord>,
}

/// Run every calculator over `graph`.
///
/// Fails only for faults no single unit can absorb: duplicate unit ids make
/// the per-unit records ambiguous. Dangling streams are logged and tolerated.
pub fn try_analyze(graph: &ProcessGraph) -> AppResult<AnalysisResult> {
    let report = graph.validate();
    if let Some(err) = report.first_error() {
        return Err(AppError::Graph(err.clone()));
    }
    for warning in &report.warnings {
        debug!("analyzing despite: {}", warning);
    }

    Ok(AnalysisResult {
        mass_balance: calculate_mass_balance(graph),
        energy_balance: calculate_energy_balance(graph),
        vle: calculate_vle(graph),
        pressure_drops: calculate_pressure_drop(graph),
        heat_transfer: calculate_heat_transfer(graph),
    })
}

/// Like [`try_analyze`], but a batch fault is logged and reported as "no
/// analysis available". Duplicate unit ids are the only way to get `None`;
/// per-unit faults fall back inside their own records.
pub fn analyze(graph: &ProcessGraph) -> Option<AnalysisResult> {
    match try_analyze(graph) {
        Ok(result) => Some(result),
        Err(err) => {
            error!("analysis unavailable: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_model::{Equipment, EquipmentType, ProcessStream};

    #[test]
    fn every_calculator_contributes() {
        let graph = ProcessGraph::from_parts(
            vec![
                Equipment::new("feed", EquipmentType::Feed),
                Equipment::new("hx", EquipmentType::HeatExchanger),
                Equipment::new("flash", EquipmentType::Flash),
            ],
            vec![
                ProcessStream::new("s1", "feed", "hx").with_total_flow(10.0),
                ProcessStream::new("s2", "hx", "flash").with_total_flow(10.0),
            ],
        );

        let result = analyze(&graph).unwrap();
        assert_eq!(result.mass_balance.len(), 3);
        assert_eq!(result.energy_balance.len(), 3);
        assert_eq!(result.vle.len(), 1);
        assert_eq!(result.pressure_drops.len(), 2);
        assert_eq!(result.heat_transfer.len(), 1);
    }

    #[test]
    fn duplicate_ids_void_the_snapshot() {
        let graph = ProcessGraph::from_parts(
            vec![
                Equipment::new("n", EquipmentType::Pump),
                Equipment::new("n", EquipmentType::Valve),
            ],
            vec![],
        );
        assert!(matches!(try_analyze(&graph), Err(AppError::Graph(_))));
        assert!(analyze(&graph).is_none());
    }

    #[test]
    fn dangling_streams_are_tolerated() {
        let graph = ProcessGraph::from_parts(
            vec![Equipment::new("a", EquipmentType::Tank)],
            vec![ProcessStream::new("s1", "a", "ghost").with_total_flow(3.0)],
        );
        let result = analyze(&graph).unwrap();
        assert_eq!(result.mass_balance[0].out_flow, 3.0);
        assert_eq!(result.pressure_drops.len(), 1);
    }

    #[test]
    fn empty_graph_has_empty_result() {
        let result = analyze(&ProcessGraph::empty()).unwrap();
        assert!(result.mass_balance.is_empty());
        assert!(result.pressure_drops.is_empty());
    }

    #[test]
    fn wire_names() {
        let json = serde_json::to_value(analyze(&ProcessGraph::empty()).unwrap()).unwrap();
        for key in [
            "massBalance",
            "energyBalance",
            "vle",
            "pressureDrops",
            "heatTransfer",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
