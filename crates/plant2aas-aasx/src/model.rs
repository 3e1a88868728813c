// src/model.rs

//! Internal `serde` data structures that map directly to the AAS V3 XML
//! schema (`https://admin-shell.io/aas/3/0`).
//!
//! These structs mirror the element order required by the schema and are
//! annotated with `serde` attributes for serialization via `quick-xml`;
//! they are not intended for direct public use.

use serde::Serialize;

pub const AAS_XML_NAMESPACE: &str = "https://admin-shell.io/aas/3/0";

/// The root `<environment>` element.
#[derive(Debug, Serialize)]
#[serde(rename = "environment")]
pub struct EnvironmentXml {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,

    #[serde(
        rename = "assetAdministrationShells",
        skip_serializing_if = "Option::is_none"
    )]
    pub asset_administration_shells: Option<ShellListXml>,

    #[serde(rename = "submodels", skip_serializing_if = "Option::is_none")]
    pub submodels: Option<SubmodelListXml>,
}

#[derive(Debug, Serialize)]
pub struct ShellListXml {
    #[serde(rename = "assetAdministrationShell")]
    pub items: Vec<ShellXml>,
}

#[derive(Debug, Serialize)]
pub struct ShellXml {
    #[serde(rename = "idShort")]
    pub id_short: String,

    pub id: String,

    #[serde(rename = "assetInformation")]
    pub asset_information: AssetInformationXml,

    #[serde(rename = "submodels", skip_serializing_if = "Option::is_none")]
    pub submodels: Option<ReferenceListXml>,
}

#[derive(Debug, Serialize)]
pub struct AssetInformationXml {
    #[serde(rename = "assetKind")]
    pub asset_kind: &'static str,

    #[serde(rename = "globalAssetId", skip_serializing_if = "Option::is_none")]
    pub global_asset_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReferenceListXml {
    #[serde(rename = "reference")]
    pub items: Vec<ReferenceXml>,
}

#[derive(Debug, Serialize)]
pub struct ReferenceXml {
    #[serde(rename = "type")]
    pub reference_type: &'static str,

    pub keys: KeyListXml,
}

#[derive(Debug, Serialize)]
pub struct KeyListXml {
    #[serde(rename = "key")]
    pub items: Vec<KeyXml>,
}

#[derive(Debug, Serialize)]
pub struct KeyXml {
    #[serde(rename = "type")]
    pub key_type: &'static str,

    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct SubmodelListXml {
    #[serde(rename = "submodel")]
    pub items: Vec<SubmodelXml>,
}

#[derive(Debug, Serialize)]
pub struct SubmodelXml {
    #[serde(rename = "idShort")]
    pub id_short: String,

    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,

    #[serde(rename = "submodelElements", skip_serializing_if = "Option::is_none")]
    pub submodel_elements: Option<ElementListXml>,
}

/// A polymorphic element sequence; each entry serializes under its variant
/// name.
#[derive(Debug, Serialize)]
pub struct ElementListXml {
    #[serde(rename = "$value")]
    pub items: Vec<ElementXml>,
}

#[derive(Debug, Serialize)]
pub enum ElementXml {
    #[serde(rename = "property")]
    Property(PropertyXml),

    #[serde(rename = "submodelElementCollection")]
    Collection(CollectionXml),

    #[serde(rename = "submodelElementList")]
    List(ListXml),

    #[serde(rename = "entity")]
    Entity(EntityXml),

    #[serde(rename = "relationshipElement")]
    Relationship(RelationshipXml),

    #[serde(rename = "referenceElement")]
    Reference(ReferenceElementXml),
}

#[derive(Debug, Serialize)]
pub struct PropertyXml {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,

    #[serde(rename = "idShort")]
    pub id_short: String,

    #[serde(rename = "valueType")]
    pub value_type: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CollectionXml {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,

    #[serde(rename = "idShort", skip_serializing_if = "Option::is_none")]
    pub id_short: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ElementListXml>,
}

#[derive(Debug, Serialize)]
pub struct ListXml {
    #[serde(rename = "idShort")]
    pub id_short: String,

    #[serde(rename = "typeValueListElement")]
    pub type_value_list_element: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ElementListXml>,
}

#[derive(Debug, Serialize)]
pub struct EntityXml {
    #[serde(rename = "idShort")]
    pub id_short: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub statements: Option<ElementListXml>,

    #[serde(rename = "entityType")]
    pub entity_type: &'static str,

    #[serde(rename = "globalAssetId", skip_serializing_if = "Option::is_none")]
    pub global_asset_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RelationshipXml {
    #[serde(rename = "idShort")]
    pub id_short: String,

    pub first: ReferenceXml,

    pub second: ReferenceXml,
}

#[derive(Debug, Serialize)]
pub struct ReferenceElementXml {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,

    #[serde(rename = "idShort")]
    pub id_short: String,

    pub value: ReferenceXml,
}
