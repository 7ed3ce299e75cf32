//! Per-chemical shares of a stream or feed.

use pf_core::ChemicalId;
use pf_core::numeric::{Tolerances, nearly_equal};
use serde::{Deserialize, Serialize};

/// One chemical's share within a stream or feed.
///
/// Mole fractions of all entries attached to one stream should sum to 1. That is
/// the supplier's responsibility; nothing here normalizes or enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChemicalComposition {
    pub chemical_id: ChemicalId,
    #[serde(default)]
    pub mole_fraction: f64,
    /// Mass flow of this chemical (kg/h).
    #[serde(default)]
    pub mass_flow: f64,
    /// Local temperature (°C).
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Local pressure (bar).
    #[serde(default = "default_pressure")]
    pub pressure: f64,
}

fn default_temperature() -> f64 {
    25.0
}

fn default_pressure() -> f64 {
    1.0
}

impl ChemicalComposition {
    /// A pure-chemical entry at 25 °C and 1 bar with no mass flow yet.
    pub fn pure(chemical_id: impl Into<ChemicalId>) -> Self {
        Self {
            chemical_id: chemical_id.into(),
            mole_fraction: 1.0,
            mass_flow: 0.0,
            temperature: default_temperature(),
            pressure: default_pressure(),
        }
    }

    pub fn new(chemical_id: impl Into<ChemicalId>, mole_fraction: f64, mass_flow: f64) -> Self {
        Self {
            chemical_id: chemical_id.into(),
            mole_fraction,
            mass_flow,
            temperature: default_temperature(),
            pressure: default_pressure(),
        }
    }
}

/// First entry for `chemical` in a composition list, if any.
pub fn find_component<'a>(
    entries: &'a [ChemicalComposition],
    chemical: &ChemicalId,
) -> Option<&'a ChemicalComposition> {
    entries.iter().find(|c| &c.chemical_id == chemical)
}

/// Sum of mole fractions.
pub fn mole_fraction_sum(entries: &[ChemicalComposition]) -> f64 {
    entries.iter().map(|c| c.mole_fraction).sum()
}

/// Whether the mole fractions sum to 1 within tolerance.
pub fn is_normalized(entries: &[ChemicalComposition], tol: Tolerances) -> bool {
    nearly_equal(mole_fraction_sum(entries), 1.0, tol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_entry_defaults() {
        let c = ChemicalComposition::pure("water");
        assert_eq!(c.mole_fraction, 1.0);
        assert_eq!(c.mass_flow, 0.0);
        assert_eq!(c.temperature, 25.0);
        assert_eq!(c.pressure, 1.0);
    }

    #[test]
    fn find_returns_first_match() {
        let entries = vec![
            ChemicalComposition::new("water", 0.4, 10.0),
            ChemicalComposition::new("ethanol", 0.6, 20.0),
            ChemicalComposition::new("water", 0.0, 99.0),
        ];
        let found = find_component(&entries, &ChemicalId::from("water")).unwrap();
        assert_eq!(found.mass_flow, 10.0);
        assert!(find_component(&entries, &ChemicalId::from("benzene")).is_none());
    }

    #[test]
    fn normalization_check() {
        let entries = vec![
            ChemicalComposition::new("a", 0.25, 0.0),
            ChemicalComposition::new("b", 0.75, 0.0),
        ];
        assert!(is_normalized(&entries, Tolerances::default()));
        assert!(!is_normalized(&entries[..1], Tolerances::default()));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let c: ChemicalComposition = serde_json::from_str(r#"{"chemicalId":"water"}"#).unwrap();
        assert_eq!(c.mole_fraction, 0.0);
        assert_eq!(c.temperature, 25.0);
    }
}
