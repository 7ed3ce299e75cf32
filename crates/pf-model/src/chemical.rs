//! Chemical species as the catalog knows them.

use pf_core::ChemicalId;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Physical state at reference conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicalState {
    Solid,
    Liquid,
    Gas,
}

/// A chemical in the catalog.
///
/// Temperatures are in °C and pressures in bar. Substances without a meaningful
/// boiling or critical point (ionic solids, salts that decompose) carry `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chemical {
    pub id: ChemicalId,
    pub name: String,
    pub formula: String,
    pub molecular_weight: f64,
    #[serde(default)]
    pub boiling_point: Option<f64>,
    #[serde(default)]
    pub critical_temperature: Option<f64>,
    #[serde(default)]
    pub critical_pressure: Option<f64>,
    pub state: PhysicalState,
}

impl Chemical {
    /// Case-insensitive substring match over name and formula.
    ///
    /// An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.name.to_ascii_lowercase().contains(&query)
            || self.formula.to_ascii_lowercase().contains(&query)
    }
}

/// User-supplied data for a custom chemical; the library assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChemical {
    pub name: String,
    pub formula: String,
    pub molecular_weight: f64,
    #[serde(default)]
    pub boiling_point: Option<f64>,
    #[serde(default)]
    pub critical_temperature: Option<f64>,
    #[serde(default)]
    pub critical_pressure: Option<f64>,
    pub state: PhysicalState,
}

impl NewChemical {
    /// Check the fields a custom entry must carry, then attach `id`.
    pub fn into_chemical(self, id: ChemicalId) -> ModelResult<Chemical> {
        if self.name.trim().is_empty() {
            return Err(ModelError::InvalidChemical {
                what: "name must not be empty",
            });
        }
        if !self.molecular_weight.is_finite() || self.molecular_weight <= 0.0 {
            return Err(ModelError::InvalidChemical {
                what: "molecular weight must be positive",
            });
        }
        let optionals = [
            self.boiling_point,
            self.critical_temperature,
            self.critical_pressure,
        ];
        if optionals.iter().flatten().any(|v| !v.is_finite()) {
            return Err(ModelError::InvalidChemical {
                what: "physical constants must be finite",
            });
        }

        Ok(Chemical {
            id,
            name: self.name.trim().to_string(),
            formula: self.formula.trim().to_string(),
            molecular_weight: self.molecular_weight,
            boiling_point: self.boiling_point,
            critical_temperature: self.critical_temperature,
            critical_pressure: self.critical_pressure,
            state: self.state,
        })
    }
}

/// Turn a display name into an id slug: `"Acetic Acid"` → `"acetic-acid"`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewChemical {
        NewChemical {
            name: "Dimethyl Carbonate".into(),
            formula: "C3H6O3".into(),
            molecular_weight: 90.08,
            boiling_point: Some(90.0),
            critical_temperature: Some(284.0),
            critical_pressure: Some(46.3),
            state: PhysicalState::Liquid,
        }
    }

    #[test]
    fn slug_from_name() {
        assert_eq!(slugify("Acetic Acid"), "acetic-acid");
        assert_eq!(slugify("  Tetrahydrofuran (THF) "), "tetrahydrofuran-thf");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn custom_chemical_accepts_valid_data() {
        let chem = sample().into_chemical(ChemicalId::from("dmc")).unwrap();
        assert_eq!(chem.id.as_str(), "dmc");
        assert_eq!(chem.state, PhysicalState::Liquid);
    }

    #[test]
    fn custom_chemical_rejects_bad_weight() {
        let mut bad = sample();
        bad.molecular_weight = 0.0;
        assert!(bad.into_chemical(ChemicalId::from("x")).is_err());
    }

    #[test]
    fn custom_chemical_rejects_blank_name() {
        let mut bad = sample();
        bad.name = "   ".into();
        assert!(matches!(
            bad.into_chemical(ChemicalId::from("x")),
            Err(ModelError::InvalidChemical { .. })
        ));
    }

    #[test]
    fn query_matches_formula_case_insensitive() {
        let chem = sample().into_chemical(ChemicalId::from("dmc")).unwrap();
        assert!(chem.matches_query("c3h6"));
        assert!(chem.matches_query("carbonate"));
        assert!(chem.matches_query(""));
        assert!(!chem.matches_query("benzene"));
    }

    #[test]
    fn null_critical_point_deserializes() {
        let json = r#"{"id":"nacl","name":"Sodium Chloride","formula":"NaCl",
            "molecularWeight":58.44,"boilingPoint":1465.0,
            "criticalTemperature":null,"criticalPressure":null,"state":"solid"}"#;
        let chem: Chemical = serde_json::from_str(json).unwrap();
        assert_eq!(chem.critical_temperature, None);
        assert_eq!(chem.state, PhysicalState::Solid);
    }
}
