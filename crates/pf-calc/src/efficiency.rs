//! Per-class efficiency heuristics.
//!
//! Every estimator yields a dimensionless value in [0, 1]. Degenerate inputs
//! (no shaft power, no target temperature) short-circuit to
//! [`NOMINAL_EFFICIENCY`] before any division happens, and any fault reading
//! the unit's parameters also lands on that value.

use pf_core::numeric::clamp_unit;
use pf_model::{EfficiencyMethod, Equipment, FLOW_RATE, PRESSURE, Parameters};
use tracing::debug;

use crate::common::{NOMINAL_EFFICIENCY, check_finite};
use crate::error::CalcResult;

/// Scale between flow × pressure and the shaft power parameter.
const SHAFT_POWER_FACTOR: f64 = 100.0;

/// Efficiency of `node`, never failing.
pub fn estimate_efficiency(node: &Equipment) -> f64 {
    match try_estimate_efficiency(node) {
        Ok(eff) => eff,
        Err(err) => {
            debug!("efficiency of {} falls back to nominal: {}", node.id, err);
            NOMINAL_EFFICIENCY
        }
    }
}

/// Efficiency of `node`, surfacing the reason when it cannot be estimated.
pub fn try_estimate_efficiency(node: &Equipment) -> CalcResult<f64> {
    let params = &node.parameters;
    match node.kind.efficiency_method() {
        EfficiencyMethod::Shaft => shaft_efficiency(params),
        EfficiencyMethod::ThermalApproach => thermal_approach_efficiency(params),
        EfficiencyMethod::Reaction => reaction_efficiency(params),
        EfficiencyMethod::Declared => declared_efficiency(params),
    }
}

/// Hydraulic over shaft power: `flowRate × pressure × 100 / power`.
fn shaft_efficiency(params: &Parameters) -> CalcResult<f64> {
    let flow = params.number_or(FLOW_RATE, 0.0)?;
    let pressure = params.number_or(PRESSURE, 1.0)?;
    let power = params.number_or("power", 0.0)?;
    if power == 0.0 {
        return Ok(NOMINAL_EFFICIENCY);
    }

    let theoretical = flow * pressure * SHAFT_POWER_FACTOR;
    let ratio = check_finite(theoretical / power, "shaft efficiency")?;
    Ok(clamp_unit(ratio))
}

/// Achieved over targeted approach: `|out − in| / |target − in|`.
fn thermal_approach_efficiency(params: &Parameters) -> CalcResult<f64> {
    let inlet = params.number_or("inletTemp", 25.0)?;
    let outlet = params.number_or("outletTemp", 25.0)?;
    let Some(target) = params.number("targetTemp")? else {
        return Ok(NOMINAL_EFFICIENCY);
    };
    if inlet == target {
        return Ok(NOMINAL_EFFICIENCY);
    }

    let ratio = check_finite(
        ((outlet - inlet) / (target - inlet)).abs(),
        "thermal approach efficiency",
    )?;
    Ok(clamp_unit(ratio))
}

/// Conversion × selectivity × yield, each 1 when absent.
fn reaction_efficiency(params: &Parameters) -> CalcResult<f64> {
    let conversion = params.number_or("conversion", 1.0)?;
    let selectivity = params.number_or("selectivity", 1.0)?;
    let yield_ = params.number_or("yield", 1.0)?;

    let product = check_finite(conversion * selectivity * yield_, "reaction efficiency")?;
    Ok(clamp_unit(product))
}

fn declared_efficiency(params: &Parameters) -> CalcResult<f64> {
    Ok(clamp_unit(params.number_or("efficiency", NOMINAL_EFFICIENCY)?))
}
