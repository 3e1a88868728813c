// src/converter.rs

//! Assembles the process shell and submodel from resolved FPD data.
//!
//! One shell and one submodel carry the whole description: the project
//! information block, the process collection (states, operators,
//! resources), and the flow and usage lists whose members reference back
//! into the process collection by idShort.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use log::{info, warn};

use plant2aas::aas::{
    AssetAdministrationShell, AssetInformation, AssetKind, Category, Environment, ModelReference,
    Property, ReferenceElement, Submodel, SubmodelElement, SubmodelElementCollection,
    SubmodelElementList,
};
use plant2aas::ids;

use crate::types::{CharacteristicValues, Edge, ElementData, Fpd, StateElement};

/// idShort of the shell and submodel pair carrying the description.
const FPD_ID_SHORT: &str = "FPD";

/// Assembles the complete environment for a resolved process description.
pub fn convert_fpd(fpd: &Fpd) -> Environment {
    let submodel_id = ids::submodel_iri(FPD_ID_SHORT);

    let mut submodel = Submodel::new(submodel_id.clone(), FPD_ID_SHORT);
    submodel.push(SubmodelElement::Collection(project_information(fpd)));
    submodel.push(SubmodelElement::Collection(process_collection(fpd)));
    submodel.push(SubmodelElement::List(edge_list(
        fpd,
        "flows",
        &fpd.flows,
        ("incoming", "outcoming"),
    )));
    submodel.push(SubmodelElement::List(edge_list(
        fpd,
        "usages",
        &fpd.usages,
        ("source", "target"),
    )));

    let shell = AssetAdministrationShell {
        id: ids::shell_iri(FPD_ID_SHORT),
        id_short: FPD_ID_SHORT.to_string(),
        asset_information: AssetInformation {
            asset_kind: AssetKind::Instance,
            global_asset_id: Some(ids::asset_iri(FPD_ID_SHORT)),
        },
        submodels: vec![ModelReference::to_submodel(&submodel_id)],
    };

    let env = Environment {
        shells: vec![shell],
        submodels: vec![submodel],
    };
    info!(
        "assembled process environment: {} states, {} operators, {} resources",
        fpd.states.len(),
        fpd.operators.len(),
        fpd.resources.len()
    );
    env
}

fn project_information(fpd: &Fpd) -> SubmodelElementCollection {
    SubmodelElementCollection::with_value(
        "projectInformation",
        Category::Parameter,
        vec![
            SubmodelElement::Property(Property::string_with_category(
                "name",
                fpd.project.name.clone(),
                Category::Constant,
            )),
            SubmodelElement::Property(Property::string_with_category(
                "targetNamespace",
                fpd.project.target_namespace.clone(),
                Category::Constant,
            )),
            SubmodelElement::Property(Property::string_with_category(
                "entryPoint",
                fpd.project.entry_point.clone(),
                Category::Constant,
            )),
        ],
    )
}

/// The process collection: one nested collection per state, operator and
/// resource, in that group order.
fn process_collection(fpd: &Fpd) -> SubmodelElementCollection {
    let mut process = SubmodelElementCollection::new("process", Category::Parameter);

    for state in &fpd.states {
        process.push(SubmodelElement::Collection(state_collection(state)));
    }
    for operator in &fpd.operators {
        process.push(SubmodelElement::Collection(element_collection(operator)));
    }
    for resource in &fpd.resources {
        process.push(SubmodelElement::Collection(element_collection(resource)));
    }

    process
}

/// A state collection is an element collection with a leading `stateType`
/// property.
fn state_collection(state: &StateElement) -> SubmodelElementCollection {
    let mut value = vec![SubmodelElement::Property(Property::string_with_category(
        "stateType",
        Some(state.state_type.as_str().to_string()),
        Category::Constant,
    ))];
    value.extend(element_body(&state.data));

    SubmodelElementCollection {
        id_short: Some(state.data.id_short.clone()),
        category: Some(Category::Parameter),
        value,
    }
}

fn element_collection(data: &ElementData) -> SubmodelElementCollection {
    SubmodelElementCollection {
        id_short: Some(data.id_short.clone()),
        category: Some(Category::Parameter),
        value: element_body(data),
    }
}

/// The shared tail of every process element: identification,
/// characteristics and the assignment property.
fn element_body(data: &ElementData) -> Vec<SubmodelElement> {
    vec![
        SubmodelElement::Collection(identification_collection(data)),
        SubmodelElement::Collection(characteristics_collection(data.characteristics.as_ref())),
        SubmodelElement::Property(Property::string_with_category(
            "assignment",
            data.assignment.clone(),
            Category::Constant,
        )),
    ]
}

fn identification_collection(data: &ElementData) -> SubmodelElementCollection {
    let ident = &data.identification;
    SubmodelElementCollection::with_value(
        "identification",
        Category::Parameter,
        vec![
            constant_string("uniqueIdent", Some(data.unique_ident.clone())),
            constant_string("longName", Some(ident.long_name.clone())),
            constant_string("shortName", Some(ident.short_name.clone())),
            constant_string("versionNumber", Some(ident.version.clone())),
            constant_string("revisionNumber", Some(ident.revision.clone())),
        ],
    )
}

/// Builds the characteristics tree. With no characteristic block at all the
/// structure is still emitted, but every property stays valueless.
fn characteristics_collection(
    values: Option<&CharacteristicValues>,
) -> SubmodelElementCollection {
    let descriptive = SubmodelElementCollection::with_value(
        "descriptiveElement",
        Category::Parameter,
        vec![
            constant_string(
                "valueDeterminationProcess",
                values.map(|v| v.value_determination_process.clone()),
            ),
            constant_string("representivity", values.map(|v| v.representivity.clone())),
            SubmodelElement::Collection(SubmodelElementCollection::with_value(
                "setpointValue",
                Category::Parameter,
                vec![
                    SubmodelElement::Property(Property::double(
                        "valueSetpoint",
                        values.map(|v| v.setpoint_value),
                        Category::Constant,
                    )),
                    constant_string("unitSetpoint", values.map(|v| v.setpoint_unit.clone())),
                ],
            )),
            SubmodelElement::Collection(SubmodelElementCollection::with_value(
                "validityLimits",
                Category::Parameter,
                vec![
                    constant_string("limitType", values.map(|v| v.limit_type.clone())),
                    SubmodelElement::Property(Property::date_time(
                        "from",
                        values.and_then(|v| v.from_date.clone()),
                        Category::Constant,
                    )),
                    SubmodelElement::Property(Property::date_time(
                        "to",
                        values.and_then(|v| v.to_date.clone()),
                        Category::Constant,
                    )),
                ],
            )),
            SubmodelElement::Collection(SubmodelElementCollection::with_value(
                "actualValues",
                Category::Parameter,
                vec![
                    SubmodelElement::Property(Property::double(
                        "valueActualValue",
                        values.map(|v| v.actual_value),
                        Category::Constant,
                    )),
                    constant_string("unitActualValue", values.map(|v| v.actual_unit.clone())),
                ],
            )),
        ],
    );

    let relational = SubmodelElementCollection::with_value(
        "relationalElement",
        Category::Parameter,
        vec![
            parameter_string("view", values.map(|v| v.view.clone())),
            parameter_string("model", values.map(|v| v.model.clone())),
            parameter_string(
                "regulationsForRelationalGeneration",
                values.map(|v| v.regulation.clone()),
            ),
        ],
    );

    SubmodelElementCollection::with_value(
        "characteristics",
        Category::Parameter,
        vec![
            constant_string("uniqueIdent", values.map(|v| v.unique_ident.clone())),
            constant_string("longName", values.map(|v| v.long_name.clone())),
            constant_string("shortName", values.map(|v| v.short_name.clone())),
            constant_string("versionNumber", values.map(|v| v.version.clone())),
            constant_string("revisionNumber", values.map(|v| v.revision.clone())),
            SubmodelElement::Collection(descriptive),
            SubmodelElement::Collection(relational),
        ],
    )
}

/// Builds a flow or usage list. Each resolvable edge becomes an anonymous
/// collection with two reference elements pointing back into the process
/// collection; an edge with an unresolvable end is skipped.
fn edge_list(
    fpd: &Fpd,
    list_id_short: &str,
    edges: &[Edge],
    (end_a, end_b): (&str, &str),
) -> SubmodelElementList {
    let submodel_id = ids::submodel_iri(FPD_ID_SHORT);
    let mut list = SubmodelElementList::new(list_id_short);

    for edge in edges {
        let (source, target) = match (
            fpd.index.element_name(&edge.source),
            fpd.index.element_name(&edge.target),
        ) {
            (Some(source), Some(target)) => (source, target),
            _ => {
                warn!(
                    "skipping {} edge with unresolvable ends '{}' -> '{}'",
                    list_id_short, edge.source, edge.target
                );
                continue;
            }
        };

        list.push(SubmodelElement::Collection(SubmodelElementCollection {
            id_short: None,
            category: Some(Category::Parameter),
            value: vec![
                process_reference(end_a, &submodel_id, source),
                process_reference(end_b, &submodel_id, target),
            ],
        }));
    }

    list
}

fn process_reference(id_short: &str, submodel_id: &str, element: &str) -> SubmodelElement {
    SubmodelElement::Reference(ReferenceElement {
        id_short: id_short.to_string(),
        category: Some(Category::Parameter),
        value: ModelReference::to_nested_collection(submodel_id, "process", element),
    })
}

fn constant_string(id_short: &str, value: Option<String>) -> SubmodelElement {
    SubmodelElement::Property(Property::string_with_category(
        id_short,
        value,
        Category::Constant,
    ))
}

fn parameter_string(id_short: &str, value: Option<String>) -> SubmodelElement {
    SubmodelElement::Property(Property::string_with_category(
        id_short,
        value,
        Category::Parameter,
    ))
}
