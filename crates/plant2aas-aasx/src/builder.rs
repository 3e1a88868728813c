// src/builder.rs

//! Provides functionality to serialize an [`Environment`] into an AAS V3
//! XML string.
//!
//! This module implements the conversion from the core document model to
//! the internal `model` structs required by `quick-xml` for correct
//! serialization according to the AAS schema.

use core::fmt::Write;
use serde::Serialize;

use plant2aas::aas::{
    AssetAdministrationShell, Environment, ModelReference, Submodel, SubmodelElement,
};

use crate::error::AasxError;
use crate::model::{
    AAS_XML_NAMESPACE, AssetInformationXml, CollectionXml, ElementListXml, ElementXml, EntityXml,
    EnvironmentXml, KeyListXml, KeyXml, ListXml, PropertyXml, ReferenceElementXml,
    ReferenceListXml, ReferenceXml, RelationshipXml, ShellListXml, ShellXml, SubmodelListXml,
    SubmodelXml,
};

/// Serializes an [`Environment`] into the AAS V3 XML representation.
///
/// This function generates a complete XML document, including the standard
/// declaration and the `environment` root element. Shell and submodel
/// order is written exactly as assembled.
///
/// # Errors
/// Returns an `AasxError` if XML serialization fails.
pub fn save_environment_to_string(env: &Environment) -> Result<String, AasxError> {
    let container = build_environment(env);

    let mut buffer = String::new();
    write!(
        &mut buffer,
        "{}",
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n"
    )?;

    let mut serializer = quick_xml::se::Serializer::new(&mut buffer);
    serializer.indent(' ', 2);

    container.serialize(serializer)?;
    Ok(buffer)
}

fn build_environment(env: &Environment) -> EnvironmentXml {
    let shells: Vec<ShellXml> = env.shells.iter().map(build_shell).collect();
    let submodels: Vec<SubmodelXml> = env.submodels.iter().map(build_submodel).collect();

    EnvironmentXml {
        xmlns: AAS_XML_NAMESPACE,
        asset_administration_shells: if shells.is_empty() {
            None
        } else {
            Some(ShellListXml { items: shells })
        },
        submodels: if submodels.is_empty() {
            None
        } else {
            Some(SubmodelListXml { items: submodels })
        },
    }
}

fn build_shell(shell: &AssetAdministrationShell) -> ShellXml {
    ShellXml {
        id_short: shell.id_short.clone(),
        id: shell.id.clone(),
        asset_information: AssetInformationXml {
            asset_kind: shell.asset_information.asset_kind.as_str(),
            global_asset_id: shell.asset_information.global_asset_id.clone(),
        },
        submodels: if shell.submodels.is_empty() {
            None
        } else {
            Some(ReferenceListXml {
                items: shell.submodels.iter().map(build_reference).collect(),
            })
        },
    }
}

fn build_submodel(submodel: &Submodel) -> SubmodelXml {
    SubmodelXml {
        id_short: submodel.id_short.clone(),
        id: submodel.id.clone(),
        kind: submodel.kind.map(|kind| kind.as_str()),
        submodel_elements: build_element_list(&submodel.submodel_elements),
    }
}

fn build_element_list(elements: &[SubmodelElement]) -> Option<ElementListXml> {
    if elements.is_empty() {
        None
    } else {
        Some(ElementListXml {
            items: elements.iter().map(build_element).collect(),
        })
    }
}

fn build_element(element: &SubmodelElement) -> ElementXml {
    match element {
        SubmodelElement::Property(p) => ElementXml::Property(PropertyXml {
            category: p.category.map(|c| c.as_str()),
            id_short: p.id_short.clone(),
            value_type: p.value_type.xsd_name(),
            value: p.value.clone(),
        }),
        SubmodelElement::Collection(c) => ElementXml::Collection(CollectionXml {
            category: c.category.map(|cat| cat.as_str()),
            id_short: c.id_short.clone(),
            value: build_element_list(&c.value),
        }),
        SubmodelElement::List(l) => ElementXml::List(ListXml {
            id_short: l.id_short.clone(),
            type_value_list_element: "SubmodelElementCollection",
            value: build_element_list(&l.value),
        }),
        SubmodelElement::Entity(e) => ElementXml::Entity(EntityXml {
            id_short: e.id_short.clone(),
            statements: build_element_list(&e.statements),
            entity_type: e.entity_type.as_str(),
            global_asset_id: e.global_asset_id.clone(),
        }),
        SubmodelElement::Relationship(r) => ElementXml::Relationship(RelationshipXml {
            id_short: r.id_short.clone(),
            first: build_reference(&r.first),
            second: build_reference(&r.second),
        }),
        SubmodelElement::Reference(r) => ElementXml::Reference(ReferenceElementXml {
            category: r.category.map(|c| c.as_str()),
            id_short: r.id_short.clone(),
            value: build_reference(&r.value),
        }),
    }
}

fn build_reference(reference: &ModelReference) -> ReferenceXml {
    ReferenceXml {
        reference_type: "ModelReference",
        keys: KeyListXml {
            items: reference
                .keys
                .iter()
                .map(|key| KeyXml {
                    key_type: key.key_type.as_str(),
                    value: key.value.clone(),
                })
                .collect(),
        },
    }
}
