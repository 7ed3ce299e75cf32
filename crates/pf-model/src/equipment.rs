//! Equipment units (graph nodes) and their type tags.

use std::fmt;
use std::str::FromStr;

use pf_core::NodeId;
use serde::{Deserialize, Serialize};

use crate::composition::ChemicalComposition;
use crate::error::ModelError;
use crate::parameters::Parameters;

/// Canvas position. Irrelevant to every calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Library grouping of equipment types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    RawMaterial,
    Reactor,
    HeatExchanger,
    Separation,
    PressureChanger,
    MixerSplitter,
    Specialized,
    Utility,
    Analysis,
}

/// How a unit's dimensionless efficiency is estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EfficiencyMethod {
    /// Hydraulic power over shaft power (pumps, compressors).
    Shaft,
    /// Achieved over targeted temperature approach (heat exchangers).
    ThermalApproach,
    /// Conversion × selectivity × yield (reactors).
    Reaction,
    /// The unit's own `efficiency` parameter.
    Declared,
}

macro_rules! equipment_types {
    ($($variant:ident => $tag:literal, $label:literal, $category:ident;)+) => {
        /// Closed set of equipment type tags.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum EquipmentType {
            $($variant,)+
        }

        impl EquipmentType {
            pub const ALL: &'static [EquipmentType] = &[$(EquipmentType::$variant,)+];

            /// Snake-case tag used in files and on the wire.
            pub fn tag(self) -> &'static str {
                match self {
                    $(EquipmentType::$variant => $tag,)+
                }
            }

            /// Human-readable name.
            pub fn label(self) -> &'static str {
                match self {
                    $(EquipmentType::$variant => $label,)+
                }
            }

            pub fn category(self) -> EquipmentCategory {
                match self {
                    $(EquipmentType::$variant => EquipmentCategory::$category,)+
                }
            }
        }

        impl FromStr for EquipmentType {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok(EquipmentType::$variant),)+
                    other => Err(ModelError::UnknownEquipmentType(other.to_string())),
                }
            }
        }
    };
}

equipment_types! {
    Feed => "feed", "Feed", RawMaterial;
    FeedTank => "feed_tank", "Feed Tank", RawMaterial;
    StorageTank => "storage_tank", "Storage Tank", RawMaterial;
    SteamInput => "steam_input", "Steam Input", RawMaterial;
    SteamOutput => "steam_output", "Steam Output", RawMaterial;
    Pfr => "pfr", "PFR", Reactor;
    Cstr => "cstr", "CSTR", Reactor;
    BatchReactor => "batch_reactor", "Batch Reactor", Reactor;
    FluidizedBed => "fluidized_bed", "Fluidized Bed", Reactor;
    PackedBed => "packed_bed", "Packed Bed", Reactor;
    Reactor => "reactor", "Reactor", Reactor;
    ShellAndTube => "shell_and_tube", "Shell & Tube", HeatExchanger;
    Plate => "plate", "Plate Exchanger", HeatExchanger;
    AirCooled => "air_cooled", "Air Cooled", HeatExchanger;
    Spiral => "spiral", "Spiral Exchanger", HeatExchanger;
    DoublePipe => "double_pipe", "Double Pipe", HeatExchanger;
    Heater => "heater", "Heater", HeatExchanger;
    Cooler => "cooler", "Cooler", HeatExchanger;
    HeatExchanger => "heat_exchanger", "Heat Exchanger", HeatExchanger;
    Distillation => "distillation", "Distillation Column", Separation;
    Flash => "flash", "Flash Drum", Separation;
    Absorber => "absorber", "Absorber", Separation;
    Extractor => "extractor", "Extractor", Separation;
    Cyclone => "cyclone", "Cyclone", Separation;
    Crystallizer => "crystallizer", "Crystallizer", Specialized;
    Membrane => "membrane", "Membrane", Separation;
    Pump => "pump", "Pump", PressureChanger;
    Compressor => "compressor", "Compressor", PressureChanger;
    Valve => "valve", "Valve", PressureChanger;
    Turbine => "turbine", "Turbine", PressureChanger;
    AirCompressor => "air_compressor", "Air Compressor", Utility;
    Mixer => "mixer", "Mixer", MixerSplitter;
    Splitter => "splitter", "Splitter", MixerSplitter;
    StaticMixer => "static_mixer", "Static Mixer", MixerSplitter;
    Tank => "tank", "Tank", MixerSplitter;
    Filter => "filter", "Filter", Specialized;
    Dryer => "dryer", "Dryer", Specialized;
    Evaporator => "evaporator", "Evaporator", Specialized;
    Analyzer => "analyzer", "Analyzer", Analysis;
    Sensor => "sensor", "Sensor", Analysis;
    Sampler => "sampler", "Sampler", Analysis;
    CatalystBed => "catalyst_bed", "Catalyst Bed", Analysis;
    Boiler => "boiler", "Boiler", Utility;
    CoolingTower => "cooling_tower", "Cooling Tower", Utility;
    Chiller => "chiller", "Chiller", Utility;
}

impl EquipmentType {
    /// Any unit of the heat-exchanger category.
    pub fn is_heat_exchanger(self) -> bool {
        self.category() == EquipmentCategory::HeatExchanger
    }

    /// Units that get a duty and effectiveness estimate. Only the generic
    /// two-sided exchanger carries the `inletTemp`/`area`/`coefficient` set.
    pub fn reports_heat_transfer(self) -> bool {
        self == EquipmentType::HeatExchanger
    }

    /// Units for which a vapor-liquid equilibrium is reported.
    pub fn supports_vle(self) -> bool {
        matches!(
            self,
            EquipmentType::Distillation | EquipmentType::Flash | EquipmentType::Evaporator
        )
    }

    /// Units that raise or drop stream pressure.
    pub fn is_pressure_changer(self) -> bool {
        matches!(
            self,
            EquipmentType::Pump | EquipmentType::Compressor | EquipmentType::Valve
        )
    }

    pub fn efficiency_method(self) -> EfficiencyMethod {
        match self {
            EquipmentType::Pump | EquipmentType::Compressor => EfficiencyMethod::Shaft,
            EquipmentType::HeatExchanger => EfficiencyMethod::ThermalApproach,
            EquipmentType::Reactor => EfficiencyMethod::Reaction,
            _ => EfficiencyMethod::Declared,
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A piece of process equipment: one node of the flow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: EquipmentType,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parameters: Parameters,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub composition: Vec<ChemicalComposition>,
}

impl Equipment {
    /// A unit of `kind` with its library parameter template and label as name.
    pub fn new(id: impl Into<NodeId>, kind: EquipmentType) -> Self {
        Self {
            id: id.into(),
            kind,
            position: Position::default(),
            name: kind.label().to_string(),
            parameters: kind.default_parameters(),
            composition: Vec::new(),
        }
    }

    /// A unit of `kind` with an empty parameter bag.
    pub fn bare(id: impl Into<NodeId>, kind: EquipmentType) -> Self {
        Self {
            id: id.into(),
            kind,
            position: Position::default(),
            name: String::new(),
            parameters: Parameters::new(),
            composition: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_param(mut self, key: &str, value: f64) -> Self {
        self.parameters.set(key, value);
        self
    }

    pub fn with_composition(mut self, composition: Vec<ChemicalComposition>) -> Self {
        self.composition = composition;
        self
    }

    /// Name for reports: the unit's name, or `Equipment <id>` when blank.
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            format!("Equipment {}", self.id)
        } else {
            self.name.clone()
        }
    }
}

/// Partial update to an [`Equipment`]. `None` fields are left untouched;
/// `parameters`, when given, replaces the whole bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<EquipmentType>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub parameters: Option<Parameters>,
    #[serde(default)]
    pub composition: Option<Vec<ChemicalComposition>>,
}

impl EquipmentPatch {
    /// Produce the patched copy; the original is left as is.
    pub fn apply_to(&self, equipment: &Equipment) -> Equipment {
        let mut next = equipment.clone();
        if let Some(name) = &self.name {
            next.name = name.clone();
        }
        if let Some(kind) = self.kind {
            next.kind = kind;
        }
        if let Some(position) = self.position {
            next.position = position;
        }
        if let Some(parameters) = &self.parameters {
            next.parameters = parameters.clone();
        }
        if let Some(composition) = &self.composition {
            next.composition = composition.clone();
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::{FLOW_RATE, PRESSURE};

    #[test]
    fn tags_round_trip_through_from_str() {
        for &kind in EquipmentType::ALL {
            assert_eq!(kind.tag().parse::<EquipmentType>().unwrap(), kind);
        }
        assert_eq!(EquipmentType::ALL.len(), 45);
        assert!("warp_core".parse::<EquipmentType>().is_err());
    }

    #[test]
    fn serde_uses_snake_case_tags() {
        let json = serde_json::to_string(&EquipmentType::ShellAndTube).unwrap();
        assert_eq!(json, "\"shell_and_tube\"");
        let kind: EquipmentType = serde_json::from_str("\"air_compressor\"").unwrap();
        assert_eq!(kind, EquipmentType::AirCompressor);
    }

    #[test]
    fn capability_tags() {
        assert!(EquipmentType::HeatExchanger.is_heat_exchanger());
        assert!(EquipmentType::Cooler.is_heat_exchanger());
        assert!(!EquipmentType::Boiler.is_heat_exchanger());

        assert!(EquipmentType::Flash.supports_vle());
        assert!(EquipmentType::Evaporator.supports_vle());
        assert!(!EquipmentType::Pump.supports_vle());

        assert_eq!(
            EquipmentType::Pump.efficiency_method(),
            EfficiencyMethod::Shaft
        );
        assert_eq!(
            EquipmentType::HeatExchanger.efficiency_method(),
            EfficiencyMethod::ThermalApproach
        );
        assert_eq!(
            EquipmentType::Reactor.efficiency_method(),
            EfficiencyMethod::Reaction
        );
        assert_eq!(
            EquipmentType::Turbine.efficiency_method(),
            EfficiencyMethod::Declared
        );
    }

    #[test]
    fn heuristics_follow_exact_tags() {
        for kind in [
            EquipmentType::Cstr,
            EquipmentType::Pfr,
            EquipmentType::PackedBed,
            EquipmentType::Plate,
            EquipmentType::Heater,
            EquipmentType::Cooler,
            EquipmentType::AirCompressor,
        ] {
            assert_eq!(kind.efficiency_method(), EfficiencyMethod::Declared, "{kind}");
        }

        assert!(EquipmentType::HeatExchanger.reports_heat_transfer());
        assert!(!EquipmentType::Heater.reports_heat_transfer());
        assert!(!EquipmentType::ShellAndTube.reports_heat_transfer());
        assert!(EquipmentType::ShellAndTube.is_heat_exchanger());
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let unit = Equipment::bare("n7", EquipmentType::Tank);
        assert_eq!(unit.display_name(), "Equipment n7");
        assert_eq!(unit.with_name("T-101").display_name(), "T-101");
    }

    #[test]
    fn patch_replaces_only_given_fields() {
        let unit = Equipment::new("p1", EquipmentType::Pump).at(Position::new(10.0, 20.0));
        let patch = EquipmentPatch {
            name: Some("P-101".into()),
            parameters: Some(Parameters::new().with(FLOW_RATE, 10.0)),
            ..Default::default()
        };
        let next = patch.apply_to(&unit);
        assert_eq!(next.name, "P-101");
        assert_eq!(next.position, Position::new(10.0, 20.0));
        assert_eq!(next.parameters.number(FLOW_RATE), Ok(Some(10.0)));
        assert_eq!(next.parameters.number(PRESSURE), Ok(None));
        assert_eq!(unit.name, "Pump");
    }

    #[test]
    fn equipment_serializes_kind_as_type() {
        let unit = Equipment::bare("f1", EquipmentType::Feed);
        let json = serde_json::to_string(&unit).unwrap();
        assert!(json.contains("\"type\":\"feed\""));
        let back: Equipment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, unit);
    }
}
