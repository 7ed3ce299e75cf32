//! Process streams: directed edges between equipment.

use pf_core::{NodeId, StreamId};
use serde::{Deserialize, Serialize};

use crate::composition::ChemicalComposition;
use crate::equipment::Equipment;
use crate::error::ParamError;
use crate::parameters::{FLOW_RATE, PRESSURE, TEMPERATURE};

/// A directed stream `source → target` carrying a multi-component flow.
///
/// Parallel streams between the same pair of units are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStream {
    pub id: StreamId,
    pub source_id: NodeId,
    pub target_id: NodeId,
    #[serde(default)]
    pub composition: Vec<ChemicalComposition>,
    /// Aggregate temperature (°C), 25 when absent.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Aggregate pressure (bar).
    #[serde(default)]
    pub pressure: f64,
    /// Total flow; kg/h for balances, read as m³/h by the pressure-drop estimate.
    #[serde(default)]
    pub total_flow: f64,
}

/// Temperature of a stream nobody has specified (°C).
pub const DEFAULT_STREAM_TEMPERATURE: f64 = 25.0;

fn default_temperature() -> f64 {
    DEFAULT_STREAM_TEMPERATURE
}

impl ProcessStream {
    pub fn new(
        id: impl Into<StreamId>,
        source_id: impl Into<NodeId>,
        target_id: impl Into<NodeId>,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            composition: Vec::new(),
            temperature: DEFAULT_STREAM_TEMPERATURE,
            pressure: 0.0,
            total_flow: 0.0,
        }
    }

    pub fn with_total_flow(mut self, total_flow: f64) -> Self {
        self.total_flow = total_flow;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = pressure;
        self
    }

    pub fn with_composition(mut self, composition: Vec<ChemicalComposition>) -> Self {
        self.composition = composition;
        self
    }

    /// Derive a stream from its source unit's conditions.
    ///
    /// Composition, temperature, pressure and total flow are copied from the
    /// source's composition and `temperature`/`pressure`/`flowRate`. A missing
    /// temperature becomes 25 °C; missing pressure and flow become 0.
    pub fn from_source(
        id: impl Into<StreamId>,
        source: &Equipment,
        target_id: impl Into<NodeId>,
    ) -> Result<Self, ParamError> {
        let params = &source.parameters;
        Ok(Self {
            id: id.into(),
            source_id: source.id.clone(),
            target_id: target_id.into(),
            composition: source.composition.clone(),
            temperature: params.number_or(TEMPERATURE, DEFAULT_STREAM_TEMPERATURE)?,
            pressure: params.number_or(PRESSURE, 0.0)?,
            total_flow: params.number_or(FLOW_RATE, 0.0)?,
        })
    }

    /// Whether this stream touches `node` at either end.
    pub fn touches(&self, node: &NodeId) -> bool {
        &self.source_id == node || &self.target_id == node
    }
}
