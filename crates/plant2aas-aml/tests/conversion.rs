// crates/plant2aas-aml/tests/conversion.rs

use plant2aas::aas::{
    Entity, EntityType, ModellingKind, Submodel, SubmodelElement, SubmodelElementCollection,
};
use plant2aas_aml::{convert_plant, load_plant_from_str};
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

fn demo_environment() -> plant2aas::Environment {
    let xml_content = load_test_file("demo_plant.aml");
    let plant = load_plant_from_str(&xml_content).expect("Failed to parse demo plant");
    convert_plant(&plant)
}

fn collection<'a>(submodel: &'a Submodel, id_short: &str) -> &'a SubmodelElementCollection {
    submodel
        .submodel_elements
        .iter()
        .find_map(|element| match element {
            SubmodelElement::Collection(c) if c.id_short.as_deref() == Some(id_short) => Some(c),
            _ => None,
        })
        .unwrap_or_else(|| panic!("collection {} not found in {}", id_short, submodel.id_short))
}

fn entity(element: &SubmodelElement) -> &Entity {
    match element {
        SubmodelElement::Entity(e) => e,
        other => panic!("expected an entity, got {:?}", other),
    }
}

/// The project shell leads the manifest; every element gets a shell, even
/// when two elements share a name.
#[test]
fn test_shell_manifest() {
    let env = demo_environment();

    assert_eq!(
        env.shell_ids(),
        vec![
            "https://www.aut.ruhr-uni-bochum.de/Bom_AAS",
            "https://www.aut.ruhr-uni-bochum.de/AAS_AssemblyCell",
            "https://www.aut.ruhr-uni-bochum.de/AAS_Robot",
            "https://www.aut.ruhr-uni-bochum.de/AAS_Conveyor",
            "https://www.aut.ruhr-uni-bochum.de/AAS_Robot",
            "https://www.aut.ruhr-uni-bochum.de/AAS_SparePartsShelf",
        ]
    );

    let project = &env.shells[0];
    assert_eq!(project.id_short, "Automation_Project");
    assert_eq!(project.submodels.len(), 2);
}

#[test]
fn test_bom_submodel() {
    let env = demo_environment();

    let bom = &env.submodels[0];
    assert_eq!(bom.id, "https://www.aut.ruhr-uni-bochum.de/BillOfMaterial");
    assert_eq!(bom.id_short, "BOM");
    assert_eq!(bom.kind, Some(ModellingKind::Instance));

    // Archetype marker first, then the two roots.
    match &bom.submodel_elements[0] {
        SubmodelElement::Property(p) => {
            assert_eq!(p.id_short, "ArcheType");
            assert_eq!(p.value.as_deref(), Some("Full"));
        }
        other => panic!("expected the archetype property, got {:?}", other),
    }

    let cell = entity(&bom.submodel_elements[1]);
    assert_eq!(cell.id_short, "AssemblyCell");
    assert_eq!(cell.entity_type, EntityType::SelfManaged);
    assert_eq!(cell.statements.len(), 2);

    let shelf = entity(&bom.submodel_elements[2]);
    assert_eq!(shelf.id_short, "SparePartsShelf");
    assert_eq!(shelf.entity_type, EntityType::CoManaged);
    assert!(shelf.global_asset_id.is_none());
}

#[test]
fn test_automation_engineering_submodel() {
    let env = demo_environment();

    let engineering = &env.submodels[1];
    assert_eq!(engineering.id_short, "AutomationEngineering");
    assert_eq!(
        engineering.id,
        "https://www.aut.ruhr-uni-bochum.de/SM_Automation_Engineering"
    );

    let general = collection(engineering, "GeneralInformation");
    match &general.value[0] {
        SubmodelElement::Property(p) => {
            assert_eq!(p.id_short, "Name");
            assert_eq!(p.value.as_deref(), Some("DemoPlant.aml"));
        }
        other => panic!("expected the file name property, got {:?}", other),
    }

    let connections = collection(engineering, "Connections");
    assert_eq!(connections.value.len(), 2);

    let power_line = entity(&connections.value[0]);
    assert_eq!(power_line.id_short, "PowerLine");
    assert_eq!(
        power_line.global_asset_id.as_deref(),
        Some("https://www.aut.ruhr-uni-bochum.de_Entity_PowerLine")
    );
    match &power_line.statements[0] {
        SubmodelElement::Relationship(wire) => {
            assert_eq!(wire.id_short, "WireRelation");
            assert_eq!(
                wire.first.keys[0].value,
                "https://www.aut.ruhr-uni-bochum.de/AAS_AssemblyCell"
            );
            assert_eq!(
                wire.second.keys[0].value,
                "https://www.aut.ruhr-uni-bochum.de/AAS_Robot"
            );
        }
        other => panic!("expected a wire relation, got {:?}", other),
    }

    // The unresolvable endpoint keeps its placeholder all the way into the
    // shell reference.
    let unnamed = entity(&connections.value[1]);
    assert_eq!(unnamed.id_short, "Link2");
    match &unnamed.statements[0] {
        SubmodelElement::Relationship(wire) => {
            assert_eq!(
                wire.second.keys[0].value,
                "https://www.aut.ruhr-uni-bochum.de/AAS_Unknown_if-missing"
            );
        }
        other => panic!("expected a wire relation, got {:?}", other),
    }

    // The device view mirrors the BOM view structurally.
    let devices = collection(engineering, "Devices");
    assert_eq!(devices.value.len(), 3);
    assert_eq!(entity(&devices.value[1]).id_short, "AssemblyCell");
}

#[test]
fn test_technical_data_submodels() {
    let env = demo_environment();

    // BOM and AutomationEngineering first, then one TechnicalData submodel
    // per element in document order.
    assert_eq!(env.submodels.len(), 7);

    let cell = &env.submodels[2];
    assert_eq!(cell.id, "https://www.aut.ruhr-uni-bochum.de/SM_AssemblyCell");
    assert_eq!(cell.id_short, "TechnicalData");

    let properties = collection(cell, "TechnicalProperties");
    match &properties.value[0] {
        SubmodelElement::Property(p) => {
            assert_eq!(p.id_short, "Voltage");
            assert_eq!(p.value.as_deref(), Some("400 V"));
        }
        other => panic!("expected a technical property, got {:?}", other),
    }

    // Conveyor's "Speed" attribute had no unit; the placeholder shows up in
    // the rendered value.
    let conveyor = &env.submodels[4];
    let properties = collection(conveyor, "TechnicalProperties");
    match &properties.value[0] {
        SubmodelElement::Property(p) => {
            assert_eq!(p.value.as_deref(), Some("1.5 N/A"));
        }
        other => panic!("expected a technical property, got {:?}", other),
    }
}
