//! Shared constants and helpers for the calculators.

use crate::error::{CalcError, CalcResult};
use pf_core::numeric::ensure_finite;
use pf_model::{Equipment, FLOW_RATE, PRESSURE, ParamError, TEMPERATURE};

/// Efficiency assumed when nothing better can be estimated.
pub const NOMINAL_EFFICIENCY: f64 = 0.85;

/// Reference temperature of the enthalpy proxy (°C).
pub const REFERENCE_TEMPERATURE: f64 = 25.0;

/// Default unit pressure when none is declared (bar).
pub const REFERENCE_PRESSURE: f64 = 1.0;

/// Specific heat proxy used by the energy balance (kJ/(kg·K)).
pub const CP_ENTHALPY_PROXY: f64 = 4.186;

/// Specific heat proxy used for exchanger effectiveness (J/(kg·K)).
pub const CP_EFFECTIVENESS_PROXY: f64 = 4186.0;

/// Ensure a value is finite, returning CalcError if not.
pub fn check_finite(value: f64, what: &'static str) -> CalcResult<f64> {
    Ok(ensure_finite(value, what)?)
}

/// Fail when any of the unit's required parameters is present but unreadable.
pub fn check_required(node: &Equipment) -> CalcResult<()> {
    node.parameters.check_required()?;
    Ok(())
}

/// Read a numeric parameter, substituting `default` when absent.
pub fn param_or(node: &Equipment, key: &str, default: f64) -> Result<f64, ParamError> {
    node.parameters.number_or(key, default)
}

/// Unit temperature (°C), 25 when absent.
pub fn node_temperature(node: &Equipment) -> Result<f64, ParamError> {
    param_or(node, TEMPERATURE, REFERENCE_TEMPERATURE)
}

/// Unit pressure (bar); absent or zero reads as 1.
pub fn node_pressure(node: &Equipment) -> Result<f64, ParamError> {
    let p = param_or(node, PRESSURE, REFERENCE_PRESSURE)?;
    Ok(if p == 0.0 { REFERENCE_PRESSURE } else { p })
}

/// Unit flow rate, 0 when absent.
pub fn node_flow_rate(node: &Equipment) -> Result<f64, ParamError> {
    param_or(node, FLOW_RATE, 0.0)
}
