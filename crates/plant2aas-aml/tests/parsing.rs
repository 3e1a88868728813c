// crates/plant2aas-aml/tests/parsing.rs

use plant2aas::links::resolve_links;
use plant2aas_aml::load_plant_from_str;
use std::fs;
use std::path::PathBuf;

/// Helper function to load a test file from the `tests/data/` directory.
fn load_test_file(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

#[test]
fn test_load_demo_plant() {
    let xml_content = load_test_file("demo_plant.aml");
    let plant = load_plant_from_str(&xml_content).expect("Failed to parse demo plant");

    assert_eq!(plant.file_info.file_name.as_deref(), Some("DemoPlant.aml"));
    assert_eq!(
        plant.file_info.last_writing.as_deref(),
        Some("2025-03-14T09:30:00")
    );
}

/// All internal elements are collected, at any nesting depth, in document
/// order, with attribute units and values defaulted where absent.
#[test]
fn test_elements_are_collected_in_document_order() {
    let xml_content = load_test_file("demo_plant.aml");
    let plant = load_plant_from_str(&xml_content).expect("Failed to parse demo plant");

    let names: Vec<&str> = plant
        .elements
        .iter()
        .map(|element| element.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "AssemblyCell",
            "Robot",
            "Conveyor",
            "Robot",
            "SparePartsShelf"
        ]
    );

    let voltage = &plant.elements[0].attributes[0];
    assert_eq!(voltage.name, "Voltage");
    assert_eq!(voltage.unit, "V");
    assert_eq!(voltage.value, "400");
    assert_eq!(voltage.data_type.as_deref(), Some("xs:double"));

    // "Speed" declares no unit.
    let speed = &plant.elements[2].attributes[0];
    assert_eq!(speed.unit, "N/A");
    assert_eq!(speed.value, "1.5");
}

/// The hierarchy suppresses repeated names but keeps the remaining nodes at
/// their original depth.
#[test]
fn test_hierarchy_reconstruction() {
    let xml_content = load_test_file("demo_plant.aml");
    let plant = load_plant_from_str(&xml_content).expect("Failed to parse demo plant");

    assert_eq!(
        plant.hierarchy.flatten(),
        vec![
            (0, "AssemblyCell".to_string()),
            (1, "Robot".to_string()),
            (1, "Conveyor".to_string()),
            (0, "SparePartsShelf".to_string()),
        ]
    );
}

#[test]
fn test_identifier_index() {
    let xml_content = load_test_file("demo_plant.aml");
    let plant = load_plant_from_str(&xml_content).expect("Failed to parse demo plant");

    assert_eq!(plant.index.element_name("ie-cell"), Some("AssemblyCell"));
    assert_eq!(plant.index.element_name("ie-robot-2"), Some("Robot"));
    assert_eq!(
        plant.index.interface_owner("if-cell-power"),
        Some("AssemblyCell")
    );
    assert_eq!(plant.index.interface_owner("if-robot-power"), Some("Robot"));
    assert_eq!(plant.index.interface_owner("if-missing"), None);
}

/// Links resolve to named endpoint pairs; a missing interface id degrades
/// to a placeholder and an unnamed link gets its ordinal name.
#[test]
fn test_link_resolution() {
    let xml_content = load_test_file("demo_plant.aml");
    let plant = load_plant_from_str(&xml_content).expect("Failed to parse demo plant");

    let connections = resolve_links(&plant.index, &plant.links);
    assert_eq!(connections.len(), 2);

    assert_eq!(connections[0].name, "PowerLine");
    assert_eq!(connections[0].endpoint_a_name, "AssemblyCell");
    assert_eq!(connections[0].endpoint_b_name, "Robot");

    assert_eq!(connections[1].name, "Link2");
    assert_eq!(connections[1].endpoint_a_name, "Conveyor");
    assert_eq!(connections[1].endpoint_b_name, "Unknown_if-missing");
}

#[test]
fn test_malformed_xml_is_a_hard_error() {
    assert!(load_plant_from_str("<CAEXFile><unclosed></CAEXFile>").is_err());
}
