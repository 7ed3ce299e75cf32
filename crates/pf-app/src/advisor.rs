//! Rule-based process recommendations.

use std::fmt;

use pf_model::{Equipment, PRESSURE, ThermodynamicModel};
use serde::Serialize;

/// Below this share of heat-exchanger units, heat integration is suggested.
pub const MIN_HEAT_EXCHANGER_SHARE: f64 = 0.2;

/// Fewer pressure changers than this triggers a pressure-control hint.
pub const MIN_PRESSURE_CHANGERS: usize = 2;

/// Unit pressure (bar) above which the ideal-gas model is questioned.
pub const IDEAL_GAS_PRESSURE_LIMIT: f64 = 5.0;

/// More selected chemicals than this and Wilson is questioned.
pub const WILSON_CHEMICAL_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Recommendation {
    AddHeatExchangers,
    AddPressureControl,
    AvoidIdealGasAtPressure,
    AvoidWilsonForComplexMixture,
    PinchAnalysis,
    AdvancedControl,
    SizingTradeoff,
}

impl Recommendation {
    pub fn message(self) -> &'static str {
        match self {
            Recommendation::AddHeatExchangers => {
                "Consider adding more heat exchangers for better energy integration and recovery."
            }
            Recommendation::AddPressureControl => {
                "Your process may need additional pressure control equipment to maintain optimal operating conditions."
            }
            Recommendation::AvoidIdealGasAtPressure => {
                "The Ideal Gas model may not be accurate for your high-pressure operations. Consider using Peng-Robinson instead."
            }
            Recommendation::AvoidWilsonForComplexMixture => {
                "Wilson model may have convergence issues with your complex mixture. NRTL or UNIQUAC might be more suitable."
            }
            Recommendation::PinchAnalysis => {
                "Optimize heat integration to reduce utility costs by implementing a pinch analysis."
            }
            Recommendation::AdvancedControl => {
                "Consider implementing advanced control strategies for critical process units to improve stability and efficiency."
            }
            Recommendation::SizingTradeoff => {
                "Evaluate the economic impact of increasing equipment sizes versus operating at higher throughput."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Recommendations for a flowsheet, specific ones first, then the three
/// general ones that always apply.
pub fn recommendations(
    nodes: &[Equipment],
    model: Option<&ThermodynamicModel>,
    selected_chemical_count: usize,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    let exchangers = nodes.iter().filter(|n| n.kind.is_heat_exchanger()).count();
    if (exchangers as f64) < nodes.len() as f64 * MIN_HEAT_EXCHANGER_SHARE {
        recs.push(Recommendation::AddHeatExchangers);
    }

    let pressure_changers = nodes
        .iter()
        .filter(|n| n.kind.is_pressure_changer())
        .count();
    if pressure_changers < MIN_PRESSURE_CHANGERS {
        recs.push(Recommendation::AddPressureControl);
    }

    if let Some(model) = model {
        match model.id.as_str() {
            "ideal-gas" if nodes.iter().any(above_ideal_gas_limit) => {
                recs.push(Recommendation::AvoidIdealGasAtPressure);
            }
            "wilson" if selected_chemical_count > WILSON_CHEMICAL_LIMIT => {
                recs.push(Recommendation::AvoidWilsonForComplexMixture);
            }
            _ => {}
        }
    }

    recs.extend([
        Recommendation::PinchAnalysis,
        Recommendation::AdvancedControl,
        Recommendation::SizingTradeoff,
    ]);
    recs
}

fn above_ideal_gas_limit(node: &Equipment) -> bool {
    matches!(node.parameters.number(PRESSURE), Ok(Some(p)) if p > IDEAL_GAS_PRESSURE_LIMIT)
}
