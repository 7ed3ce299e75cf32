//! Parameter templates attached to equipment when it is dropped on the canvas.

use crate::equipment::EquipmentType;
use crate::parameters::{FLOW_RATE, PRESSURE, Parameters, TEMPERATURE};

impl EquipmentType {
    /// The library's default parameter bag for this type.
    ///
    /// Types without a dedicated template get `temperature=25`, `pressure=1`,
    /// `flowRate=100`.
    pub fn default_parameters(self) -> Parameters {
        use EquipmentType as E;

        match self {
            E::Feed => Parameters::process(25.0, 1.0, 100.0)
                .with("vaporFraction", 0.0)
                .with("enthalpy", 0.0)
                .with("entropy", 0.0)
                .with("density", 0.0)
                .with("viscosity", 0.0),
            E::SteamInput => Parameters::process(150.0, 5.0, 50.0)
                .with("quality", 1.0)
                .with("enthalpy", 2800.0)
                .with("entropy", 6.5),
            E::SteamOutput => Parameters::process(100.0, 1.0, 50.0)
                .with("quality", 0.9)
                .with("enthalpy", 2600.0)
                .with("entropy", 6.0),
            E::FeedTank => Parameters::process(25.0, 1.0, 100.0)
                .with("volume", 10.0)
                .with("level", 5.0),
            E::Cstr => Parameters::new()
                .with(TEMPERATURE, 80.0)
                .with(PRESSURE, 2.0)
                .with("volume", 10.0)
                .with("conversion", 0.85)
                .with("selectivity", 0.9)
                .with("yield", 0.75)
                .with("residence", 30.0)
                .with("heatDuty", 500.0)
                .with("agitatorPower", 5.0)
                .with("reactionRate", 0.05),
            E::Pfr => Parameters::new()
                .with(TEMPERATURE, 90.0)
                .with(PRESSURE, 3.0)
                .with("length", 5.0)
                .with("diameter", 0.5)
                .with("conversion", 0.9)
                .with("selectivity", 0.95)
                .with("yield", 0.85)
                .with("residence", 20.0)
                .with("heatDuty", 600.0)
                .with("reactionRate", 0.08),
            E::BatchReactor => Parameters::new()
                .with(TEMPERATURE, 75.0)
                .with(PRESSURE, 2.0)
                .with("volume", 5.0)
                .with("batchTime", 120.0)
                .with("conversion", 0.92)
                .with("yield", 0.88)
                .with("heatDuty", 400.0)
                .with("agitatorPower", 3.0),
            E::FluidizedBed => Parameters::new()
                .with(TEMPERATURE, 120.0)
                .with(PRESSURE, 5.0)
                .with("bedHeight", 2.0)
                .with("diameter", 1.0)
                .with("particleSize", 0.002)
                .with("minimumFluidizationVelocity", 0.5)
                .with("bedVoidage", 0.45)
                .with("heatDuty", 1200.0),
            E::PackedBed => Parameters::new()
                .with(TEMPERATURE, 100.0)
                .with(PRESSURE, 4.0)
                .with("length", 3.0)
                .with("diameter", 0.8)
                .with("particleSize", 0.005)
                .with("bedVoidage", 0.4)
                .with("pressureDrop", 0.5)
                .with("heatDuty", 800.0),
            E::Flash => Parameters::new()
                .with(TEMPERATURE, 60.0)
                .with(PRESSURE, 1.5)
                .with("vaporFraction", 0.4)
                .with("efficiency", 0.85)
                .with("diameter", 1.2)
                .with("height", 3.0)
                .with("heatDuty", 200.0),
            E::Distillation => Parameters::new()
                .with("stages", 20.0)
                .with("feedStage", 10.0)
                .with("refluxRatio", 1.5)
                .with("boilupRatio", 2.0)
                .with(PRESSURE, 1.2)
                .with("efficiency", 0.75)
                .with("diameter", 1.5)
                .with("height", 15.0)
                .with("condenserDuty", -500.0)
                .with("reboilerDuty", 600.0),
            E::Absorber => Parameters::new()
                .with("stages", 10.0)
                .with(PRESSURE, 2.0)
                .with(TEMPERATURE, 30.0)
                .with("solventRate", 50.0)
                .with("efficiency", 0.8)
                .with("diameter", 1.0)
                .with("height", 8.0)
                .with("packingType", "Raschig Rings"),
            E::Extractor => Parameters::new()
                .with("stages", 8.0)
                .with("solventRate", 40.0)
                .with(TEMPERATURE, 25.0)
                .with(PRESSURE, 1.0)
                .with("efficiency", 0.7)
                .with("diameter", 0.8)
                .with("height", 6.0),
            E::Cyclone => Parameters::new()
                .with("diameter", 0.6)
                .with(PRESSURE, 1.5)
                .with(FLOW_RATE, 200.0)
                .with("cutDiameter", 10.0)
                .with("efficiency", 0.9)
                .with("pressureDrop", 0.2),
            E::Membrane => Parameters::new()
                .with("area", 5.0)
                .with(PRESSURE, 4.0)
                .with(TEMPERATURE, 35.0)
                .with("permeability", 0.001)
                .with("selectivity", 20.0)
                .with("thickness", 0.0001)
                .with("recovery", 0.85),
            E::Cooler => Parameters::new()
                .with("duty", -500.0)
                .with(TEMPERATURE, 25.0)
                .with(PRESSURE, 1.0)
                .with("area", 10.0)
                .with("coefficient", 500.0)
                .with("inletTemp", 80.0)
                .with("outletTemp", 25.0)
                .with("coolantInletTemp", 15.0)
                .with("coolantOutletTemp", 25.0)
                .with("coolantFlow", 20.0),
            E::Heater => Parameters::new()
                .with("duty", 500.0)
                .with(TEMPERATURE, 80.0)
                .with(PRESSURE, 1.0)
                .with("area", 10.0)
                .with("coefficient", 500.0)
                .with("inletTemp", 25.0)
                .with("outletTemp", 80.0)
                .with("heatingMediumTemp", 150.0)
                .with("heatingMediumFlow", 15.0),
            E::ShellAndTube => Parameters::new()
                .with("duty", 800.0)
                .with("shellSideTemp", 120.0)
                .with("tubeSideTemp", 30.0)
                .with("shellSidePressure", 3.0)
                .with("tubeSidePressure", 5.0)
                .with("area", 25.0)
                .with("coefficient", 600.0)
                .with("tubes", 100.0)
                .with("passes", 2.0)
                .with("foulingFactor", 0.0002),
            E::Plate => Parameters::new()
                .with("duty", 600.0)
                .with("hotSideTemp", 90.0)
                .with("coldSideTemp", 20.0)
                .with("hotSidePressure", 2.0)
                .with("coldSidePressure", 4.0)
                .with("area", 15.0)
                .with("coefficient", 1000.0)
                .with("plates", 50.0)
                .with("plateSpacing", 0.005),
            E::AirCooled => Parameters::new()
                .with("duty", -1000.0)
                .with("processTemp", 150.0)
                .with("airTemp", 25.0)
                .with(PRESSURE, 1.0)
                .with("area", 100.0)
                .with("coefficient", 35.0)
                .with("fans", 4.0)
                .with("fanPower", 15.0)
                .with("tubes", 200.0),
            E::Pump => Parameters::new()
                .with(PRESSURE, 5.0)
                .with("efficiency", 0.75)
                .with("power", 10.0)
                .with(FLOW_RATE, 50.0)
                .with("head", 50.0)
                .with("npsh", 3.0)
                .with("speed", 1450.0),
            E::Compressor => Parameters::new()
                .with(PRESSURE, 10.0)
                .with("efficiency", 0.7)
                .with("power", 50.0)
                .with(FLOW_RATE, 100.0)
                .with("ratio", 3.0)
                .with(TEMPERATURE, 80.0)
                .with("stages", 2.0),
            E::Valve => Parameters::new()
                .with("pressureDrop", 2.0)
                .with("flowCoefficient", 25.0)
                .with("openingPercentage", 60.0)
                .with(FLOW_RATE, 40.0)
                .with(TEMPERATURE, 25.0),
            E::Turbine => Parameters::new()
                .with("inletPressure", 20.0)
                .with("outletPressure", 1.0)
                .with("efficiency", 0.85)
                .with("power", -200.0)
                .with(FLOW_RATE, 150.0)
                .with("inletTemperature", 400.0)
                .with("outletTemperature", 150.0),
            E::Mixer => Parameters::process(25.0, 1.0, 150.0).with("pressureDrop", 0.1),
            E::Splitter => Parameters::process(25.0, 1.0, 100.0).with("splitRatio", 0.5),
            E::StaticMixer => Parameters::process(30.0, 2.0, 80.0)
                .with("pressureDrop", 0.3)
                .with("elements", 12.0)
                .with("diameter", 0.15)
                .with("length", 1.0),
            E::Crystallizer => Parameters::new()
                .with(TEMPERATURE, 15.0)
                .with(PRESSURE, 1.0)
                .with("supersaturation", 1.2)
                .with("yield", 0.8)
                .with("crystalSize", 0.5)
                .with("residence", 60.0)
                .with("coolingDuty", -300.0),
            E::Dryer => Parameters::new()
                .with(TEMPERATURE, 80.0)
                .with(PRESSURE, 1.0)
                .with("initialMoisture", 0.3)
                .with("finalMoisture", 0.05)
                .with("residence", 45.0)
                .with("heatDuty", 400.0)
                .with("airFlow", 200.0),
            E::Evaporator => Parameters::new()
                .with(TEMPERATURE, 85.0)
                .with(PRESSURE, 0.5)
                .with("feedConcentration", 0.1)
                .with("productConcentration", 0.5)
                .with("heatDuty", 800.0)
                .with("area", 20.0)
                .with("coefficient", 1500.0),
            E::Filter => Parameters::new()
                .with(PRESSURE, 3.0)
                .with(TEMPERATURE, 25.0)
                .with("area", 5.0)
                .with("cakeThickness", 0.02)
                .with("porosity", 0.4)
                .with("efficiency", 0.95)
                .with(FLOW_RATE, 20.0),
            E::Boiler => Parameters::new()
                .with("steamPressure", 10.0)
                .with("steamTemperature", 180.0)
                .with("steamFlow", 50.0)
                .with("efficiency", 0.85)
                .with("fuelType", "Natural Gas")
                .with("fuelConsumption", 5.0)
                .with("duty", 2500.0),
            E::CoolingTower => Parameters::new()
                .with("waterFlow", 200.0)
                .with("inletTemp", 35.0)
                .with("outletTemp", 25.0)
                .with("wetBulbTemp", 20.0)
                .with("approach", 5.0)
                .with("fanPower", 30.0)
                .with("makeupWater", 5.0),
            _ => Parameters::process(25.0, 1.0, 100.0),
        }
    }
}
