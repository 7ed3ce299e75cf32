//! Built-in chemical catalog.
//!
//! Boiling and critical temperatures are in °C, critical pressures in bar.

use pf_core::ChemicalId;

use crate::chemical::{Chemical, PhysicalState};

struct ChemicalSeed {
    id: &'static str,
    name: &'static str,
    formula: &'static str,
    molecular_weight: f64,
    boiling_point: Option<f64>,
    critical_temperature: Option<f64>,
    critical_pressure: Option<f64>,
    state: PhysicalState,
}

#[allow(clippy::too_many_arguments)]
const fn seed(
    id: &'static str,
    name: &'static str,
    formula: &'static str,
    molecular_weight: f64,
    boiling_point: Option<f64>,
    critical_temperature: Option<f64>,
    critical_pressure: Option<f64>,
    state: PhysicalState,
) -> ChemicalSeed {
    ChemicalSeed {
        id,
        name,
        formula,
        molecular_weight,
        boiling_point,
        critical_temperature,
        critical_pressure,
        state,
    }
}

use PhysicalState::{Gas, Liquid, Solid};

const CHEMICAL_CATALOG: [ChemicalSeed; 43] = [
    seed("methanol", "Methanol", "CH3OH", 32.04, Some(64.7), Some(239.4), Some(81.0), Liquid),
    seed("ethanol", "Ethanol", "C2H5OH", 46.07, Some(78.3), Some(241.0), Some(62.7), Liquid),
    seed("acetone", "Acetone", "C3H6O", 58.08, Some(56.2), Some(235.0), Some(47.0), Liquid),
    seed("formaldehyde", "Formaldehyde", "CH2O", 30.03, Some(-19.5), Some(181.0), Some(65.0), Gas),
    seed("acetic-acid", "Acetic Acid", "C2H4O2", 60.05, Some(118.1), Some(321.0), Some(57.9), Liquid),
    seed("propane", "Propane", "C3H8", 44.1, Some(-42.1), Some(96.7), Some(42.5), Gas),
    seed("butane", "Butane", "C4H10", 58.12, Some(-0.5), Some(152.0), Some(38.0), Gas),
    seed("hydrogen-peroxide", "Hydrogen Peroxide", "H2O2", 34.02, Some(150.2), Some(187.0), Some(1.47), Liquid),
    seed("nitric-acid", "Nitric Acid", "HNO3", 63.01, Some(83.0), Some(232.0), Some(62.0), Liquid),
    seed("sodium-chloride", "Sodium Chloride", "NaCl", 58.44, Some(1465.0), None, None, Solid),
    seed("potassium-hydroxide", "Potassium Hydroxide", "KOH", 56.11, Some(1327.0), None, None, Solid),
    seed("calcium-carbonate", "Calcium Carbonate", "CaCO3", 100.09, None, None, None, Solid),
    seed("sodium-bicarbonate", "Sodium Bicarbonate", "NaHCO3", 84.01, None, None, None, Solid),
    seed("benzene", "Benzene", "C6H6", 78.11, Some(80.1), Some(289.0), Some(48.9), Liquid),
    seed("toluene", "Toluene", "C7H8", 92.14, Some(110.6), Some(318.6), Some(41.0), Liquid),
    seed("xylene", "Xylene", "C8H10", 106.16, Some(138.5), Some(343.0), Some(35.0), Liquid),
    seed("chloroform", "Chloroform", "CHCl3", 119.38, Some(61.2), Some(263.2), Some(54.0), Liquid),
    seed("carbon-tetrachloride", "Carbon Tetrachloride", "CCl4", 153.82, Some(76.7), Some(283.0), Some(45.0), Liquid),
    seed("ammonia", "Ammonia", "NH3", 17.03, Some(-33.3), Some(132.4), Some(112.8), Gas),
    seed("hydrogen-sulfide", "Hydrogen Sulfide", "H2S", 34.08, Some(-60.3), Some(100.4), Some(89.4), Gas),
    seed("sulfuric-acid", "Sulfuric Acid", "H2SO4", 98.08, Some(337.0), None, None, Liquid),
    seed("hydrochloric-acid", "Hydrochloric Acid", "HCl", 36.46, Some(-85.0), Some(51.4), Some(82.0), Gas),
    seed("ethylene", "Ethylene", "C2H4", 28.05, Some(-103.7), Some(9.2), Some(50.4), Gas),
    seed("propylene", "Propylene", "C3H6", 42.08, Some(-47.6), Some(91.8), Some(46.0), Gas),
    seed("styrene", "Styrene", "C8H8", 104.15, Some(145.0), Some(373.0), Some(39.0), Liquid),
    seed("glycerol", "Glycerol", "C3H8O3", 92.09, Some(290.0), Some(452.0), Some(42.5), Liquid),
    seed("ethylene-glycol", "Ethylene Glycol", "C2H6O2", 62.07, Some(197.3), Some(372.0), Some(77.0), Liquid),
    seed("isopropanol", "Isopropanol", "C3H8O", 60.1, Some(82.6), Some(235.2), Some(47.6), Liquid),
    seed("acetylene", "Acetylene", "C2H2", 26.04, Some(-84.0), Some(305.4), Some(61.0), Gas),
    seed("methane", "Methane", "CH4", 16.04, Some(-161.5), Some(190.6), Some(46.0), Gas),
    seed("tetrahydrofuran", "Tetrahydrofuran (THF)", "C4H8O", 72.11, Some(66.0), Some(287.0), Some(42.3), Liquid),
    seed("dimethyl-ether", "Dimethyl Ether", "CH3OCH3", 46.07, Some(-24.9), Some(126.0), Some(52.3), Gas),
    seed("chlorine", "Chlorine", "Cl2", 70.91, Some(-34.0), Some(144.0), Some(75.0), Gas),
    seed("sulfur-dioxide", "Sulfur Dioxide", "SO2", 64.06, Some(-10.0), Some(157.0), Some(72.0), Gas),
    seed("nitrogen", "Nitrogen", "N2", 28.02, Some(-195.8), Some(-147.0), Some(33.5), Gas),
    seed("carbon-monoxide", "Carbon Monoxide", "CO", 28.01, Some(-191.5), Some(133.0), Some(34.9), Gas),
    seed("oxygen", "Oxygen", "O2", 32.00, Some(-183.0), Some(-118.6), Some(50.4), Gas),
    seed("acetonitrile", "Acetonitrile", "CH3CN", 41.05, Some(81.6), Some(246.0), Some(48.1), Liquid),
    seed("dichloromethane", "Dichloromethane (Methylene Chloride)", "CH2Cl2", 84.93, Some(39.6), Some(227.0), Some(56.0), Liquid),
    seed("isoprene", "Isoprene", "C5H8", 68.10, Some(34.1), Some(235.0), Some(43.0), Liquid),
    seed("cyclohexane", "Cyclohexane", "C6H12", 84.16, Some(80.7), Some(280.0), Some(40.6), Liquid),
    seed("phenol", "Phenol", "C6H6O", 94.11, Some(181.7), Some(319.0), Some(41.6), Solid),
    seed("propylene-glycol", "Propylene Glycol", "C3H8O2", 76.09, Some(188.2), Some(326.0), Some(46.0), Liquid),
];

impl ChemicalSeed {
    fn to_chemical(&self) -> Chemical {
        Chemical {
            id: ChemicalId::new(self.id),
            name: self.name.to_string(),
            formula: self.formula.to_string(),
            molecular_weight: self.molecular_weight,
            boiling_point: self.boiling_point,
            critical_temperature: self.critical_temperature,
            critical_pressure: self.critical_pressure,
            state: self.state,
        }
    }
}

/// The catalog every chemical library starts from, in display order.
pub fn seed_chemicals() -> Vec<Chemical> {
    CHEMICAL_CATALOG.iter().map(ChemicalSeed::to_chemical).collect()
}

pub fn find_chemical(id: &str) -> Option<Chemical> {
    CHEMICAL_CATALOG
        .iter()
        .find(|seed| seed.id == id)
        .map(ChemicalSeed::to_chemical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_unique_ids() {
        let chemicals = seed_chemicals();
        assert_eq!(chemicals.len(), 43);
        let mut ids: Vec<_> = chemicals.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), chemicals.len());
    }

    #[test]
    fn salts_have_no_critical_point() {
        let nacl = find_chemical("sodium-chloride").unwrap();
        assert_eq!(nacl.critical_temperature, None);
        assert_eq!(nacl.boiling_point, Some(1465.0));

        let caco3 = find_chemical("calcium-carbonate").unwrap();
        assert_eq!(caco3.boiling_point, None);
        assert_eq!(caco3.state, PhysicalState::Solid);
    }

    #[test]
    fn search_by_formula() {
        let hits: Vec<_> = seed_chemicals()
            .into_iter()
            .filter(|c| c.matches_query("c2h5oh"))
            .collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "ethanol");
    }

    #[test]
    fn weights_are_positive() {
        assert!(seed_chemicals().iter().all(|c| c.molecular_weight > 0.0));
        assert!(find_chemical("unobtainium").is_none());
    }
}
