//! pf-model: domain model for process flow diagrams.
//!
//! Provides:
//! - Equipment units with their closed set of type tags and parameter templates
//! - Process streams and per-chemical compositions
//! - The built-in chemical catalog and thermodynamic model list
//!
//! Everything here is plain data. Calculations live in `pf-calc`; the graph that
//! ties units and streams together lives in `pf-graph`.

pub mod catalog;
pub mod chemical;
pub mod composition;
pub mod equipment;
pub mod error;
pub mod parameters;
pub mod stream;
pub mod templates;
pub mod thermo_model;

pub use catalog::{find_chemical, seed_chemicals};
pub use chemical::{Chemical, NewChemical, PhysicalState, slugify};
pub use composition::{ChemicalComposition, find_component, is_normalized, mole_fraction_sum};
pub use equipment::{
    EfficiencyMethod, Equipment, EquipmentCategory, EquipmentPatch, EquipmentType, Position,
};
pub use error::{ModelError, ModelResult, ParamError};
pub use parameters::{FLOW_RATE, PRESSURE, ParamValue, Parameters, REQUIRED_KEYS, TEMPERATURE};
pub use stream::{DEFAULT_STREAM_TEMPERATURE, ProcessStream};
pub use thermo_model::{
    Applicability, Phase, PressureRegime, ThermodynamicModel, find_model, thermodynamic_models,
};
