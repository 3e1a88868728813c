// src/converter.rs

//! Assembles the Asset Administration Shell environment from resolved plant
//! data.
//!
//! The assembly is pure structural composition: one technical-data submodel
//! and shell per plant element, a bill-of-material submodel and an
//! automation-engineering submodel shared by the whole plant, and one
//! project shell referencing the shared submodels. Source order is
//! preserved throughout.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use log::info;

use plant2aas::aas::{
    AssetAdministrationShell, AssetInformation, AssetKind, Category, Entity, EntityType,
    Environment, ModelReference, ModellingKind, Property, RelationshipElement, Submodel,
    SubmodelElement, SubmodelElementCollection,
};
use plant2aas::entity::synthesize_entities;
use plant2aas::hierarchy::HierarchyForest;
use plant2aas::ids;
use plant2aas::links::{ConnectionRecord, resolve_links};

use crate::types::{Plant, PlantElement};

/// Elements carrying the schema's default name are tooling artifacts, not
/// plant equipment; they get no shell of their own.
const SCHEMA_DEFAULT_NAME: &str = "InternalElement";

/// Assembles the complete environment for a resolved plant.
pub fn convert_plant(plant: &Plant) -> Environment {
    let mut env = Environment::new();

    let bom = bom_submodel(&plant.hierarchy);
    let engineering = automation_engineering_submodel(plant);

    env.shells.push(AssetAdministrationShell {
        id: ids::shell_iri("Bom"),
        id_short: "Automation_Project".to_string(),
        asset_information: AssetInformation {
            asset_kind: AssetKind::Instance,
            global_asset_id: Some(ids::iri("Asset", "Bom")),
        },
        submodels: vec![
            ModelReference::to_submodel(&bom.id),
            ModelReference::to_submodel(&engineering.id),
        ],
    });
    env.submodels.push(bom);
    env.submodels.push(engineering);

    for element in &plant.elements {
        if element.name == SCHEMA_DEFAULT_NAME {
            continue;
        }

        let submodel = technical_data_submodel(element);
        env.shells.push(AssetAdministrationShell {
            id: ids::iri("AAS", &element.name),
            id_short: element.name.clone(),
            asset_information: AssetInformation {
                asset_kind: AssetKind::Instance,
                global_asset_id: Some(ids::iri("Asset", &element.name)),
            },
            submodels: vec![ModelReference::to_submodel(&submodel.id)],
        });
        env.submodels.push(submodel);
    }

    info!(
        "assembled plant environment: {} shells, {} submodels",
        env.shells.len(),
        env.submodels.len()
    );
    env
}

/// Creates the technical-data submodel for a single plant element.
fn technical_data_submodel(element: &PlantElement) -> Submodel {
    let general_information = SubmodelElementCollection::with_value(
        "GeneralInformation",
        Category::Parameter,
        vec![
            SubmodelElement::Property(Property::string_with_category(
                "ManufacturerName",
                Some(format!("Producer of {}", element.name)),
                Category::Constant,
            )),
            SubmodelElement::Property(Property::string_with_category(
                "ManufacturerProductDesignation",
                Some(format!("Function of {}", element.name)),
                Category::Constant,
            )),
        ],
    );

    let product_classification = SubmodelElementCollection::with_value(
        "ProductClassifications",
        Category::Constant,
        vec![
            SubmodelElement::Property(Property::string_with_category(
                "ProductClassificationSystem",
                Some("ECLASS".to_string()),
                Category::Constant,
            )),
            SubmodelElement::Property(Property::string_with_category(
                "ClassificationSystemVersion",
                Some("13.0".to_string()),
                Category::Constant,
            )),
            SubmodelElement::Property(Property::string_with_category(
                "ProductClassId",
                Some("27-02-22-90 High voltage three-phase current asynchronous motor".to_string()),
                Category::Constant,
            )),
        ],
    );

    let technical_properties = SubmodelElementCollection::with_value(
        "TechnicalProperties",
        Category::Constant,
        element
            .attributes
            .iter()
            .map(|attribute| {
                SubmodelElement::Property(Property::string(
                    attribute.name.clone(),
                    Some(format!("{} {}", attribute.value, attribute.unit)),
                ))
            })
            .collect(),
    );

    Submodel {
        id: ids::iri("SM", &element.name),
        id_short: "TechnicalData".to_string(),
        kind: None,
        submodel_elements: vec![
            SubmodelElement::Collection(general_information),
            SubmodelElement::Collection(product_classification),
            SubmodelElement::Collection(technical_properties),
        ],
    }
}

/// Creates the bill-of-material submodel from the reconstructed hierarchy.
fn bom_submodel(hierarchy: &HierarchyForest) -> Submodel {
    Submodel {
        id: format!("{}/BillOfMaterial", ids::IRI_NAMESPACE),
        id_short: "BOM".to_string(),
        kind: Some(ModellingKind::Instance),
        submodel_elements: synthesize_entities(hierarchy),
    }
}

/// Creates the automation-engineering submodel: file metadata, resolved
/// connections, the device view and the PLC configuration block.
fn automation_engineering_submodel(plant: &Plant) -> Submodel {
    let general_information = SubmodelElementCollection {
        id_short: Some("GeneralInformation".to_string()),
        category: None,
        value: vec![
            SubmodelElement::Property(Property::string("Name", plant.file_info.file_name.clone())),
            SubmodelElement::Property(Property::string(
                "CreatedAt",
                plant.file_info.last_writing.clone(),
            )),
        ],
    };

    let connections = connections_collection(resolve_links(&plant.index, &plant.links));
    let devices = SubmodelElementCollection::with_value(
        "Devices",
        Category::Constant,
        synthesize_entities(&plant.hierarchy),
    );

    let plc_configuration = SubmodelElementCollection::with_value(
        "PLCConfiguration",
        Category::Constant,
        vec![
            SubmodelElement::Property(Property::string_with_category(
                "ProductClassificationSystem2",
                Some("ECLASS".to_string()),
                Category::Constant,
            )),
            SubmodelElement::Property(Property::string_with_category(
                "ClassificationSystemVersion2",
                Some("13.0".to_string()),
                Category::Constant,
            )),
        ],
    );

    Submodel {
        id: ids::iri("SM", "Automation_Engineering"),
        id_short: "AutomationEngineering".to_string(),
        kind: None,
        submodel_elements: vec![
            SubmodelElement::Collection(general_information),
            SubmodelElement::Collection(connections),
            SubmodelElement::Collection(devices),
            SubmodelElement::Collection(plc_configuration),
        ],
    }
}

/// Wraps each resolved connection into an entity holding one wire relation
/// between the shells of its endpoints.
fn connections_collection(connections: Vec<ConnectionRecord>) -> SubmodelElementCollection {
    let entities: Vec<SubmodelElement> = connections
        .into_iter()
        .map(|connection| {
            let wire_relation = RelationshipElement {
                id_short: "WireRelation".to_string(),
                first: ModelReference::to_shell(&ids::iri("AAS", &connection.endpoint_a_name)),
                second: ModelReference::to_shell(&ids::iri("AAS", &connection.endpoint_b_name)),
            };

            SubmodelElement::Entity(Entity {
                // The asset id joins namespace and entity with an
                // underscore, not a slash.
                global_asset_id: Some(entity_asset_id(&connection.name)),
                id_short: connection.name,
                entity_type: EntityType::SelfManaged,
                statements: vec![SubmodelElement::Relationship(wire_relation)],
            })
        })
        .collect();

    SubmodelElementCollection::with_value("Connections", Category::Constant, entities)
}

fn entity_asset_id(name: &str) -> String {
    format!("{}_Entity_{}", ids::IRI_NAMESPACE, name)
}
