//! Session and flowsheet round trips through the public API.

use std::path::PathBuf;

use pf_app::{
    AppError, Flowsheet, ProcessSession, Recommendation, analyze, load_flowsheet, try_analyze,
};
use pf_model::{EquipmentPatch, EquipmentType, FLOW_RATE, Parameters, Position};
use proptest::prelude::*;

fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pf-app-{}-{}", std::process::id(), name));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn build_a_flowsheet_interactively() {
    let mut session = ProcessSession::new();
    session.set_selected_model("peng-robinson").unwrap();
    session.chemicals_mut().select(&"benzene".into()).unwrap();

    let feed = session
        .add_chemical_node(&"benzene".into(), Position::new(0.0, 0.0))
        .unwrap()
        .graph
        .nodes()[0]
        .id
        .clone();
    let snap = session
        .place_equipment(EquipmentType::Distillation, Position::new(200.0, 0.0))
        .unwrap();
    let column = snap.graph.nodes()[1].id.clone();

    let snap = session.add_connection(&feed, &column).unwrap();
    let analysis = snap.analysis.expect("analysis after connection");

    assert_eq!(analysis.mass_balance.len(), 2);
    assert_eq!(analysis.mass_balance[1].in_flow, 100.0);
    assert_eq!(analysis.vle.len(), 1);
    assert_eq!(analysis.pressure_drops.len(), 1);
    assert!(analysis.pressure_drops[0].reynolds_number > 4000.0);

    let recs = session.recommendations();
    assert!(recs.contains(&Recommendation::AddHeatExchangers));
    assert_eq!(recs.last(), Some(&Recommendation::SizingTradeoff));
}

#[test]
fn malformed_update_is_rejected_and_state_kept() {
    let mut session = ProcessSession::new();
    session
        .place_equipment(EquipmentType::Mixer, Position::default())
        .unwrap();
    let before = session.graph().nodes()[0].clone();
    let id = before.id.clone();

    let patch = EquipmentPatch {
        parameters: Some(Parameters::new().with(FLOW_RATE, "plenty")),
        ..Default::default()
    };
    assert!(matches!(
        session.update_node(&id, &patch),
        Err(AppError::Graph(_))
    ));
    assert_eq!(session.graph().nodes()[0], before);
}

#[test]
fn load_yaml_and_json_files() {
    let yaml = temp_file(
        "sheet.yaml",
        "name: demo\nequipment:\n  - { id: a, type: pump, parameters: { flowRate: 20 } }\n  - { id: b, type: tank }\nstreams:\n  - { source: a, target: b }\n",
    );
    let sheet = load_flowsheet(&yaml).unwrap();
    assert_eq!(sheet.name, "demo");
    let result = try_analyze(&sheet.to_graph().unwrap()).unwrap();
    assert_eq!(result.mass_balance[1].in_flow, 20.0);

    let json = temp_file(
        "sheet.json",
        r#"{"equipment":[{"id":"x","type":"flash"}],"streams":[]}"#,
    );
    let sheet = load_flowsheet(&json).unwrap();
    assert_eq!(analyze(&sheet.lenient_graph().unwrap()).unwrap().vle.len(), 1);

    let txt = temp_file("sheet.txt", "name: nope\n");
    assert!(matches!(
        load_flowsheet(&txt),
        Err(AppError::UnsupportedFormat(_))
    ));

    for path in [yaml, json, txt] {
        let _ = std::fs::remove_file(path);
    }
}

#[test]
fn missing_file_is_a_read_error() {
    let missing = std::env::temp_dir().join("pf-app-definitely-missing.yaml");
    assert!(matches!(
        load_flowsheet(&missing),
        Err(AppError::FlowsheetRead { .. })
    ));
}

#[test]
fn duplicate_ids_in_a_file_void_the_analysis() {
    let sheet = Flowsheet::from_yaml_str(
        "equipment:\n  - { id: a, type: tank }\n  - { id: a, type: pump }\n",
    )
    .unwrap();
    assert!(sheet.to_graph().is_err());
    assert!(analyze(&sheet.lenient_graph().unwrap()).is_none());
}

const KINDS: [EquipmentType; 6] = [
    EquipmentType::Pump,
    EquipmentType::Heater,
    EquipmentType::Flash,
    EquipmentType::Cstr,
    EquipmentType::Splitter,
    EquipmentType::Boiler,
];

proptest! {
    #[test]
    fn every_placement_is_analyzed(picks in prop::collection::vec(0..KINDS.len(), 1..12)) {
        let mut session = ProcessSession::new();
        for pick in &picks {
            session.place_equipment(KINDS[*pick], Position::default()).unwrap();
        }

        let analysis = session.analysis().unwrap();
        prop_assert_eq!(analysis.mass_balance.len(), picks.len());
        prop_assert_eq!(analysis.energy_balance.len(), picks.len());
        for record in &analysis.mass_balance {
            prop_assert!((0.0..=1.0).contains(&record.efficiency));
        }
    }
}
