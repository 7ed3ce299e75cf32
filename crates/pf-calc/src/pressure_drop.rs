//! Pressure drop along each stream using Darcy-Weisbach.
//!
//! Every stream is treated as the same straight pipe carrying a water-like fluid;
//! the stream's total flow is read as m³/h.

use std::f64::consts::PI;

use pf_core::StreamId;
use pf_core::units::{
    Area, Density, DynVisc, Length, kg_per_m3, m, pa_s, per_hour_to_per_second,
};
use pf_graph::ProcessGraph;
use pf_model::ProcessStream;
use serde::{Deserialize, Serialize};

use crate::common::check_finite;
use crate::error::CalcResult;
use crate::traits::{StreamCalculation, run_streams};

/// Reynolds number above which the flow is treated as turbulent.
const TURBULENT_REYNOLDS: f64 = 4000.0;

/// Pipe geometry and fluid properties shared by all streams.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeAssumptions {
    pub diameter: Length,
    pub length: Length,
    pub density: Density,
    pub viscosity: DynVisc,
}

impl Default for PipeAssumptions {
    /// 0.1 m × 10 m pipe, ρ = 1000 kg/m³, μ = 0.001 Pa·s.
    fn default() -> Self {
        Self {
            diameter: m(0.1),
            length: m(10.0),
            density: kg_per_m3(1000.0),
            viscosity: pa_s(0.001),
        }
    }
}

impl PipeAssumptions {
    /// Flow cross-section.
    pub fn area(&self) -> Area {
        let radius = self.diameter / 2.0;
        radius * radius * PI
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PressureDropRecord {
    pub stream_id: StreamId,
    /// Pa.
    pub pressure_drop: f64,
    pub reynolds_number: f64,
    pub friction_factor: f64,
    /// m/s.
    pub velocity: f64,
}

impl PressureDropRecord {
    pub fn zero(stream_id: StreamId) -> Self {
        Self {
            stream_id,
            pressure_drop: 0.0,
            reynolds_number: 0.0,
            friction_factor: 0.0,
            velocity: 0.0,
        }
    }
}

/// Blasius above Re 4000, laminar 64/Re otherwise; no flow means no friction.
pub fn friction_factor(reynolds: f64) -> f64 {
    if reynolds > TURBULENT_REYNOLDS {
        0.316 * reynolds.powf(-0.25)
    } else if reynolds > 0.0 {
        64.0 / reynolds
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PressureDrop {
    pub pipe: PipeAssumptions,
}

impl StreamCalculation for PressureDrop {
    type Record = PressureDropRecord;

    fn name(&self) -> &'static str {
        "pressure drop"
    }

    fn compute(&self, stream: &ProcessStream) -> CalcResult<PressureDropRecord> {
        let flow = check_finite(stream.total_flow, "stream total flow")?;
        let d = self.pipe.diameter.value;
        let l = self.pipe.length.value;
        let rho = self.pipe.density.value;
        let mu = self.pipe.viscosity.value;

        let velocity = per_hour_to_per_second(flow) / self.pipe.area().value;
        let reynolds = check_finite(rho * velocity * d / mu, "Reynolds number")?;
        let f = friction_factor(reynolds);
        let dp = check_finite(f * l * rho * velocity.powi(2) / (2.0 * d), "pressure drop")?;

        Ok(PressureDropRecord {
            stream_id: stream.id.clone(),
            pressure_drop: dp,
            reynolds_number: reynolds,
            friction_factor: f,
            velocity,
        })
    }

    fn fallback(&self, stream: &ProcessStream) -> PressureDropRecord {
        PressureDropRecord::zero(stream.id.clone())
    }
}

/// Pressure drop for every stream, in stream order.
pub fn calculate_pressure_drop(graph: &ProcessGraph) -> Vec<PressureDropRecord> {
    run_streams(&PressureDrop::default(), graph)
}
