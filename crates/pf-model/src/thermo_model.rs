//! Thermodynamic property models offered to the user.
//!
//! The engine never evaluates these; the selected model is carried alongside the
//! graph and consulted by the advisor.

use serde::{Deserialize, Serialize};

/// Pressure regime a model is suited for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureRegime {
    Low,
    Medium,
    High,
}

/// Phase a model can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Vapor,
    Liquid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicability {
    pub polar: bool,
    pub non_polar: bool,
    pub pressure: PressureRegime,
    pub phase: Vec<Phase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermodynamicModel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub applicable_for: Applicability,
}

impl ThermodynamicModel {
    pub fn supports_phase(&self, phase: Phase) -> bool {
        self.applicable_for.phase.contains(&phase)
    }
}

struct ModelSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    polar: bool,
    non_polar: bool,
    pressure: PressureRegime,
    phase: &'static [Phase],
}

const VL: &[Phase] = &[Phase::Vapor, Phase::Liquid];
const L: &[Phase] = &[Phase::Liquid];
const V: &[Phase] = &[Phase::Vapor];

const MODEL_CATALOG: [ModelSeed; 10] = [
    ModelSeed {
        id: "peng-robinson",
        name: "Peng-Robinson",
        description: "Best for non-polar and slightly polar components at high pressure",
        polar: false,
        non_polar: true,
        pressure: PressureRegime::High,
        phase: VL,
    },
    ModelSeed {
        id: "nrtl",
        name: "NRTL",
        description: "Suitable for highly non-ideal liquid mixtures",
        polar: true,
        non_polar: true,
        pressure: PressureRegime::Low,
        phase: L,
    },
    ModelSeed {
        id: "uniquac",
        name: "UNIQUAC",
        description: "Ideal for liquid-liquid and vapor-liquid equilibria",
        polar: true,
        non_polar: true,
        pressure: PressureRegime::Medium,
        phase: VL,
    },
    ModelSeed {
        id: "wilson",
        name: "Wilson",
        description: "Suitable for strongly non-ideal liquid mixtures",
        polar: true,
        non_polar: false,
        pressure: PressureRegime::Low,
        phase: L,
    },
    ModelSeed {
        id: "ideal-gas",
        name: "Ideal Gas",
        description: "Assumes ideal behavior for gases under low pressure conditions",
        polar: true,
        non_polar: true,
        pressure: PressureRegime::Low,
        phase: V,
    },
    ModelSeed {
        id: "soave-redlich-kwong",
        name: "Soave-Redlich-Kwong",
        description: "Good for hydrocarbon systems at moderate to high pressures",
        polar: false,
        non_polar: true,
        pressure: PressureRegime::High,
        phase: VL,
    },
    ModelSeed {
        id: "unifac",
        name: "UNIFAC",
        description: "Predictive model for liquid-phase activity coefficients",
        polar: true,
        non_polar: true,
        pressure: PressureRegime::Low,
        phase: L,
    },
    ModelSeed {
        id: "chao-seader",
        name: "Chao-Seader",
        description: "For hydrocarbon systems with hydrogen",
        polar: false,
        non_polar: true,
        pressure: PressureRegime::Medium,
        phase: VL,
    },
    ModelSeed {
        id: "grayson-streed",
        name: "Grayson-Streed",
        description: "Extension of Chao-Seader for high-pressure hydrogen-rich systems",
        polar: false,
        non_polar: true,
        pressure: PressureRegime::High,
        phase: VL,
    },
    ModelSeed {
        id: "lee-kesler",
        name: "Lee-Kesler",
        description: "Accurate for non-polar components over wide temperature and pressure ranges",
        polar: false,
        non_polar: true,
        pressure: PressureRegime::High,
        phase: VL,
    },
];

impl ModelSeed {
    fn to_model(&self) -> ThermodynamicModel {
        ThermodynamicModel {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            applicable_for: Applicability {
                polar: self.polar,
                non_polar: self.non_polar,
                pressure: self.pressure,
                phase: self.phase.to_vec(),
            },
        }
    }
}

/// The static list of thermodynamic models, in display order.
pub fn thermodynamic_models() -> Vec<ThermodynamicModel> {
    MODEL_CATALOG.iter().map(ModelSeed::to_model).collect()
}

/// Look up a model by its id (e.g. `"peng-robinson"`).
pub fn find_model(id: &str) -> Option<ThermodynamicModel> {
    MODEL_CATALOG
        .iter()
        .find(|seed| seed.id == id)
        .map(ModelSeed::to_model)
}
