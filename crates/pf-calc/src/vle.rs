//! Single-pass vapor-liquid equilibrium estimate for separation units.
//!
//! Saturation pressure comes from one Antoine correlation applied to every
//! component, and the vapor fraction is fixed rather than solved for. See
//! [`VleAssumptions`].

use pf_core::units::celsius_to_kelvin;
use pf_core::{ChemicalId, NodeId};
use pf_graph::ProcessGraph;
use pf_model::Equipment;
use serde::{Deserialize, Serialize};

use crate::common::{
    REFERENCE_PRESSURE, REFERENCE_TEMPERATURE, check_finite, node_pressure, node_temperature,
};
use crate::error::{CalcError, CalcResult};
use crate::traits::{NodeCalculation, run_nodes};

/// `Psat = exp(a − b / (T_K + c))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Antoine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Antoine {
    pub fn saturation_pressure(&self, t_kelvin: f64) -> f64 {
        (self.a - self.b / (t_kelvin + self.c)).exp()
    }
}

/// Fixed inputs of the VLE estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VleAssumptions {
    /// Applied to every component (water-like constants by default).
    pub antoine: Antoine,
    /// Assumed vapor fraction β.
    pub vapor_fraction: f64,
}

impl Default for VleAssumptions {
    fn default() -> Self {
        Self {
            antoine: Antoine {
                a: 8.07131,
                b: 1730.63,
                c: 233.426,
            },
            vapor_fraction: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VleComponentResult {
    pub chemical_id: ChemicalId,
    pub vapor_pressure: f64,
    pub k_value: f64,
    pub liquid_composition: f64,
    pub vapor_composition: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VleRecord {
    pub id: NodeId,
    pub name: String,
    pub temperature: f64,
    pub pressure: f64,
    pub results: Vec<VleComponentResult>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Vle {
    pub assumptions: VleAssumptions,
}

impl Vle {
    pub fn new(assumptions: VleAssumptions) -> Self {
        Self { assumptions }
    }
}

impl NodeCalculation for Vle {
    type Record = VleRecord;

    fn name(&self) -> &'static str {
        "VLE"
    }

    fn applies_to(&self, node: &Equipment) -> bool {
        node.kind.supports_vle()
    }

    fn compute(&self, _graph: &ProcessGraph, node: &Equipment) -> CalcResult<VleRecord> {
        let temperature = node_temperature(node)?;
        let pressure = node_pressure(node)?;
        if pressure < 0.0 {
            return Err(CalcError::NonPhysical {
                what: "negative pressure",
            });
        }

        let psat = check_finite(
            self.assumptions
                .antoine
                .saturation_pressure(celsius_to_kelvin(temperature)),
            "saturation pressure",
        )?;
        let k = check_finite(psat / pressure, "K-value")?;
        let beta = self.assumptions.vapor_fraction;

        let results = node
            .composition
            .iter()
            .map(|entry| {
                let z = entry.mole_fraction;
                let x = check_finite(z / (1.0 + beta * (k - 1.0)), "liquid composition")?;
                let y = check_finite(k * x, "vapor composition")?;
                Ok(VleComponentResult {
                    chemical_id: entry.chemical_id.clone(),
                    vapor_pressure: psat,
                    k_value: k,
                    liquid_composition: x,
                    vapor_composition: y,
                })
            })
            .collect::<CalcResult<Vec<_>>>()?;

        Ok(VleRecord {
            id: node.id.clone(),
            name: node.display_name(),
            temperature,
            pressure,
            results,
        })
    }

    fn fallback(&self, node: &Equipment) -> VleRecord {
        VleRecord {
            id: node.id.clone(),
            name: node.display_name(),
            temperature: REFERENCE_TEMPERATURE,
            pressure: REFERENCE_PRESSURE,
            results: Vec::new(),
        }
    }
}

/// VLE records for distillation, flash and evaporator units; other units are
/// left out.
pub fn calculate_vle(graph: &ProcessGraph) -> Vec<VleRecord> {
    run_nodes(&Vle::default(), graph)
}
