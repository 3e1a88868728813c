// src/model.rs

//! Internal `serde` data structures that map directly to the CAEX XML schema.
//!
//! This module defines the raw structure of an AutomationML document as
//! defined by the IEC 62424 CAEX schema (default namespace
//! `http://www.dke.de/CAEX`). These structs are annotated with `serde`
//! attributes to facilitate parsing via `quick-xml` and are not intended for
//! direct public use.

use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// The root element of an AutomationML document.
#[derive(Debug, Deserialize, Default)]
#[serde(rename = "CAEXFile")]
pub struct CaexFile {
    #[serde(rename = "@FileName", default)]
    pub file_name: Option<String>,

    #[serde(rename = "SourceDocumentInformation", default)]
    pub source_document_information: Option<SourceDocumentInformation>,

    /// A file can hold multiple instance hierarchies; all are converted.
    #[serde(rename = "InstanceHierarchy", default)]
    pub instance_hierarchy: Vec<InstanceHierarchy>,
}

/// Represents `<SourceDocumentInformation>`, carrying export metadata.
#[derive(Debug, Deserialize, Default)]
pub struct SourceDocumentInformation {
    #[serde(rename = "@OriginName", default)]
    pub origin_name: Option<String>,

    #[serde(rename = "@LastWritingDateTime", default)]
    pub last_writing_date_time: Option<String>,
}

/// Represents one `<InstanceHierarchy>` (the plant topology tree).
#[derive(Debug, Deserialize, Default)]
pub struct InstanceHierarchy {
    #[serde(rename = "@Name", default)]
    pub name: Option<String>,

    #[serde(rename = "InternalElement", default)]
    pub internal_element: Vec<InternalElement>,
}

/// Represents an `<InternalElement>`: a plant element that may nest further
/// elements, declare attributes and expose interfaces or links.
#[derive(Debug, Deserialize, Default)]
pub struct InternalElement {
    #[serde(rename = "@ID", default)]
    pub id: Option<String>,

    #[serde(rename = "@Name", default)]
    pub name: Option<String>,

    #[serde(rename = "Attribute", default)]
    pub attribute: Vec<Attribute>,

    #[serde(rename = "ExternalInterface", default)]
    pub external_interface: Vec<ExternalInterface>,

    #[serde(rename = "InternalElement", default)]
    pub internal_element: Vec<InternalElement>,

    /// Links follow the nested elements in the CAEX sequence.
    #[serde(rename = "InternalLink", default)]
    pub internal_link: Vec<InternalLink>,
}

/// Represents an `<Attribute>` with its optional `<Value>` text child.
#[derive(Debug, Deserialize, Default)]
pub struct Attribute {
    #[serde(rename = "@Name", default)]
    pub name: Option<String>,

    #[serde(rename = "@AttributeDataType", default)]
    pub attribute_data_type: Option<String>,

    #[serde(rename = "@Unit", default)]
    pub unit: Option<String>,

    #[serde(rename = "Value", default)]
    pub value: Option<String>,
}

/// Represents an `<ExternalInterface>` declared by an element.
#[derive(Debug, Deserialize, Default)]
pub struct ExternalInterface {
    #[serde(rename = "@ID", default)]
    pub id: Option<String>,

    #[serde(rename = "@Name", default)]
    pub name: Option<String>,
}

/// Represents an `<InternalLink>` between two interface identifiers.
#[derive(Debug, Deserialize, Default)]
pub struct InternalLink {
    #[serde(rename = "@Name", default)]
    pub name: Option<String>,

    #[serde(rename = "@RefPartnerSideA", default)]
    pub ref_partner_side_a: Option<String>,

    #[serde(rename = "@RefPartnerSideB", default)]
    pub ref_partner_side_b: Option<String>,
}
