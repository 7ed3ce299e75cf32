//! Open parameter bag attached to every piece of equipment.
//!
//! Keys follow the flow-diagram vocabulary (`temperature`, `flowRate`, `heatDuty`, ...).
//! Three keys are required of every unit: [`TEMPERATURE`], [`PRESSURE`] and
//! [`FLOW_RATE`]. Their absence is tolerated (calculations fall back to documented
//! defaults) but when present they must be finite numbers. All other keys vary by
//! equipment type and may also hold free text, e.g. `packingType`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ParamError;

pub const TEMPERATURE: &str = "temperature";
pub const PRESSURE: &str = "pressure";
pub const FLOW_RATE: &str = "flowRate";

/// Keys every equipment type is expected to carry.
pub const REQUIRED_KEYS: [&str; 3] = [TEMPERATURE, PRESSURE, FLOW_RATE];

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Number(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

/// Ordered string → value map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(BTreeMap<String, ParamValue>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters holding just the three required keys.
    pub fn process(temperature: f64, pressure: f64, flow_rate: f64) -> Self {
        Self::new()
            .with(TEMPERATURE, temperature)
            .with(PRESSURE, pressure)
            .with(FLOW_RATE, flow_rate)
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Read a numeric parameter.
    ///
    /// `Ok(None)` when the key is absent; an error when it holds text or a
    /// non-finite number.
    pub fn number(&self, key: &str) -> Result<Option<f64>, ParamError> {
        match self.0.get(key) {
            None => Ok(None),
            Some(ParamValue::Number(v)) if v.is_finite() => Ok(Some(*v)),
            Some(ParamValue::Number(v)) => Err(ParamError::NonFinite {
                key: key.to_string(),
                value: *v,
            }),
            Some(ParamValue::Text(s)) => Err(ParamError::NotNumeric {
                key: key.to_string(),
                value: s.clone(),
            }),
        }
    }

    /// Read a numeric parameter, substituting `default` when absent.
    pub fn number_or(&self, key: &str, default: f64) -> Result<f64, ParamError> {
        Ok(self.number(key)?.unwrap_or(default))
    }

    /// Read a text parameter, if present and textual.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(ParamValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Check that every required key that is present holds a finite number.
    pub fn check_required(&self) -> Result<(), ParamError> {
        for key in REQUIRED_KEYS {
            self.number(key)?;
        }
        Ok(())
    }

    /// Overlay `other` on top of `self`, key by key.
    pub fn merge(&mut self, other: Parameters) {
        self.0.extend(other.0);
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
