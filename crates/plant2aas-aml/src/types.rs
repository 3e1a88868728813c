// src/types.rs

//! Public, ergonomic data structures for a parsed plant topology.

use alloc::string::String;
use alloc::vec::Vec;

use plant2aas::hierarchy::HierarchyForest;
use plant2aas::links::{IdentifierIndex, LinkRecord};

/// Represents a fully parsed and resolved plant description.
///
/// This is the main public struct, providing ergonomic access to everything
/// the converter needs from the source document.
#[derive(Debug, Default, PartialEq)]
pub struct Plant {
    /// Export metadata of the source file.
    pub file_info: FileInfo,

    /// Every element of the topology, at any nesting depth, in document
    /// order.
    pub elements: Vec<PlantElement>,

    /// The reconstructed element hierarchy (names deduplicated on first
    /// appearance).
    pub hierarchy: HierarchyForest,

    /// Element and interface identifiers mapped to owning element names.
    pub index: IdentifierIndex,

    /// Raw links between interface identifiers, in document order.
    pub links: Vec<LinkRecord>,
}

/// Source file metadata.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FileInfo {
    /// `@FileName` of the document root.
    pub file_name: Option<String>,

    /// `@LastWritingDateTime` from `<SourceDocumentInformation>`.
    pub last_writing: Option<String>,
}

/// One plant element with its technical attributes.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PlantElement {
    /// `@Name` (empty when the source element is unnamed).
    pub name: String,

    /// Direct `<Attribute>` children, in document order.
    pub attributes: Vec<PlantAttribute>,
}

/// One technical attribute of a plant element.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PlantAttribute {
    pub name: String,

    /// `@AttributeDataType`, when declared.
    pub data_type: Option<String>,

    /// `@Unit`; `"N/A"` when absent.
    pub unit: String,

    /// `<Value>` text; `"N/A"` when absent.
    pub value: String,
}
