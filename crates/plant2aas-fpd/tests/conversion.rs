// crates/plant2aas-fpd/tests/conversion.rs

use plant2aas::aas::{
    KeyType, Submodel, SubmodelElement, SubmodelElementCollection, SubmodelElementList,
};
use plant2aas_fpd::{convert_fpd, load_fpd_from_str};
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

fn demo_submodel() -> Submodel {
    let json_content = load_test_file("demo_process.json");
    let fpd = load_fpd_from_str(&json_content).expect("Failed to parse demo process");
    let mut env = convert_fpd(&fpd);

    assert_eq!(
        env.shell_ids(),
        vec!["https://www.aut.ruhr-uni-bochum.de/FPD_AAS"]
    );
    assert_eq!(env.submodels.len(), 1);
    env.submodels.remove(0)
}

fn collection<'a>(
    elements: &'a [SubmodelElement],
    id_short: &str,
) -> &'a SubmodelElementCollection {
    elements
        .iter()
        .find_map(|element| match element {
            SubmodelElement::Collection(c) if c.id_short.as_deref() == Some(id_short) => Some(c),
            _ => None,
        })
        .unwrap_or_else(|| panic!("collection {} not found", id_short))
}

fn list<'a>(elements: &'a [SubmodelElement], id_short: &str) -> &'a SubmodelElementList {
    elements
        .iter()
        .find_map(|element| match element {
            SubmodelElement::List(l) if l.id_short == id_short => Some(l),
            _ => None,
        })
        .unwrap_or_else(|| panic!("list {} not found", id_short))
}

fn property_value<'a>(collection: &'a SubmodelElementCollection, id_short: &str) -> Option<&'a str> {
    collection
        .value
        .iter()
        .find_map(|element| match element {
            SubmodelElement::Property(p) if p.id_short == id_short => Some(p.value.as_deref()),
            _ => None,
        })
        .unwrap_or_else(|| panic!("property {} not found", id_short))
}

#[test]
fn test_submodel_layout() {
    let submodel = demo_submodel();

    assert_eq!(submodel.id, "https://www.aut.ruhr-uni-bochum.de/FPD_Submodel");
    assert_eq!(submodel.id_short, "FPD");

    let project = collection(&submodel.submodel_elements, "projectInformation");
    assert_eq!(property_value(project, "name"), Some("BatchPlant"));
    assert_eq!(property_value(project, "entryPoint"), Some("process-1"));

    // Two states, one operator, one resource.
    let process = collection(&submodel.submodel_elements, "process");
    assert_eq!(process.value.len(), 4);
}

#[test]
fn test_state_collections() {
    let submodel = demo_submodel();
    let process = collection(&submodel.submodel_elements, "process");

    let granulate = collection(&process.value, "Granulate");
    assert_eq!(property_value(granulate, "stateType"), Some("Product"));
    assert_eq!(property_value(granulate, "assignment"), Some("op-melting"));

    let identification = collection(&granulate.value, "identification");
    assert_eq!(
        property_value(identification, "uniqueIdent"),
        Some("st-granulate")
    );
    assert_eq!(
        property_value(identification, "longName"),
        Some("Plastic granulate")
    );

    let characteristics = collection(&granulate.value, "characteristics");
    let descriptive = collection(&characteristics.value, "descriptiveElement");
    let actual_values = collection(&descriptive.value, "actualValues");
    assert_eq!(property_value(actual_values, "valueActualValue"), Some("25.5"));
    assert_eq!(property_value(actual_values, "unitActualValue"), Some("kg"));

    let validity = collection(&descriptive.value, "validityLimits");
    assert_eq!(property_value(validity, "from"), Some("2025-01-01T08:00:00"));
    assert_eq!(property_value(validity, "to"), Some("2025-12-31T00:00:00"));

    // A state without a characteristic block keeps the structure, but the
    // properties carry no values.
    let power = collection(&process.value, "ElectricPower");
    assert_eq!(property_value(power, "stateType"), Some("Energy"));
    let characteristics = collection(&power.value, "characteristics");
    assert_eq!(property_value(characteristics, "uniqueIdent"), None);
    let descriptive = collection(&characteristics.value, "descriptiveElement");
    let actual_values = collection(&descriptive.value, "actualValues");
    assert_eq!(property_value(actual_values, "valueActualValue"), None);
}

/// Operators come through trimmed, with a defaulted characteristics record
/// rather than a valueless one.
#[test]
fn test_operator_collection() {
    let submodel = demo_submodel();
    let process = collection(&submodel.submodel_elements, "process");

    let melting = collection(&process.value, "Melting");
    let identification = collection(&melting.value, "identification");
    assert_eq!(property_value(identification, "shortName"), Some("MELT"));

    let characteristics = collection(&melting.value, "characteristics");
    assert_eq!(property_value(characteristics, "uniqueIdent"), Some(""));
    let descriptive = collection(&characteristics.value, "descriptiveElement");
    let actual_values = collection(&descriptive.value, "actualValues");
    assert_eq!(property_value(actual_values, "valueActualValue"), Some("0"));
}

/// One flow survives (the other has an unresolvable end); its references
/// walk Submodel / process / element.
#[test]
fn test_flow_and_usage_lists() {
    let submodel = demo_submodel();

    let flows = list(&submodel.submodel_elements, "flows");
    assert_eq!(flows.value.len(), 1);

    let flow = match &flows.value[0] {
        SubmodelElement::Collection(c) => c,
        other => panic!("expected a flow collection, got {:?}", other),
    };
    assert_eq!(flow.id_short, None);

    let incoming = match &flow.value[0] {
        SubmodelElement::Reference(r) => r,
        other => panic!("expected a reference element, got {:?}", other),
    };
    assert_eq!(incoming.id_short, "incoming");
    assert_eq!(incoming.value.keys.len(), 3);
    assert_eq!(incoming.value.keys[0].key_type, KeyType::Submodel);
    assert_eq!(
        incoming.value.keys[0].value,
        "https://www.aut.ruhr-uni-bochum.de/FPD_Submodel"
    );
    assert_eq!(incoming.value.keys[1].value, "process");
    assert_eq!(incoming.value.keys[2].value, "Granulate");

    let outcoming = match &flow.value[1] {
        SubmodelElement::Reference(r) => r,
        other => panic!("expected a reference element, got {:?}", other),
    };
    assert_eq!(outcoming.id_short, "outcoming");
    assert_eq!(outcoming.value.keys[2].value, "ElectricPower");

    let usages = list(&submodel.submodel_elements, "usages");
    assert_eq!(usages.value.len(), 1);
    let usage = match &usages.value[0] {
        SubmodelElement::Collection(c) => c,
        other => panic!("expected a usage collection, got {:?}", other),
    };
    let source = match &usage.value[0] {
        SubmodelElement::Reference(r) => r,
        other => panic!("expected a reference element, got {:?}", other),
    };
    assert_eq!(source.id_short, "source");
    assert_eq!(source.value.keys[2].value, "Extruder");
}
