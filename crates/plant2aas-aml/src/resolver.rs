// src/resolver.rs

//! Handles the business logic of resolving plant data from a deserialized
//! CAEX model.
//!
//! This module flattens the raw XML structs into the public [`Plant`] type:
//! the element list, the indentation listing the hierarchy is rebuilt from,
//! the identifier index and the raw link records. Every pass is total —
//! missing names, units or values degrade to defaults and are never treated
//! as errors.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use log::debug;

use plant2aas::hierarchy::{HierarchyForest, HierarchyLine};
use plant2aas::links::LinkRecord;

use crate::model::{CaexFile, InternalElement};
use crate::types::{FileInfo, Plant, PlantAttribute, PlantElement};

/// Placeholder for attribute units and values the source does not declare.
const NOT_AVAILABLE: &str = "N/A";

/// Indentation unit of the hierarchy listing, one level per nesting depth.
const INDENT_WIDTH: usize = 2;

/// Resolves the public [`Plant`] data from the raw deserialized document.
pub(crate) fn resolve_plant(file: &CaexFile) -> Plant {
    let mut plant = Plant {
        file_info: resolve_file_info(file),
        ..Plant::default()
    };

    // The seen-names set is scoped to this run; a name that already appeared
    // in the listing is suppressed, but its children are still visited one
    // level deeper.
    let mut seen = BTreeSet::new();
    let mut lines = Vec::new();

    for hierarchy in &file.instance_hierarchy {
        for element in &hierarchy.internal_element {
            collect_element(element, &mut plant);
            collect_listing(element, 0, &mut seen, &mut lines);
            collect_links(element, &mut plant.links);
        }
    }

    plant.hierarchy = HierarchyForest::build(&lines);

    debug!(
        "resolved plant: {} elements, {} listing lines, {} links",
        plant.elements.len(),
        lines.len(),
        plant.links.len()
    );
    plant
}

fn resolve_file_info(file: &CaexFile) -> FileInfo {
    FileInfo {
        file_name: file.file_name.clone(),
        last_writing: file
            .source_document_information
            .as_ref()
            .and_then(|info| info.last_writing_date_time.clone()),
    }
}

/// Collects the element itself (attributes and identifiers), then its
/// nested elements, preserving document order.
fn collect_element(element: &InternalElement, plant: &mut Plant) {
    let name = element.name.clone().unwrap_or_default();

    let attributes = element
        .attribute
        .iter()
        .map(|attr| PlantAttribute {
            name: attr.name.clone().unwrap_or_default(),
            data_type: attr.attribute_data_type.clone(),
            unit: attr.unit.clone().unwrap_or_else(|| NOT_AVAILABLE.into()),
            value: attr.value.clone().unwrap_or_else(|| NOT_AVAILABLE.into()),
        })
        .collect();

    if let (Some(id), Some(element_name)) = (&element.id, &element.name) {
        plant.index.insert_element(id.clone(), element_name.clone());
    }

    // Interfaces are attributed to their direct declaring element only.
    for interface in &element.external_interface {
        if let Some(id) = &interface.id {
            plant.index.insert_interface(id.clone(), name.clone());
        }
    }

    plant.elements.push(PlantElement { name, attributes });

    for child in &element.internal_element {
        collect_element(child, plant);
    }
}

/// Appends the element's listing line unless its name was already printed,
/// then recurses into the nested elements one level deeper.
fn collect_listing(
    element: &InternalElement,
    level: usize,
    seen: &mut BTreeSet<String>,
    lines: &mut Vec<HierarchyLine>,
) {
    if let Some(name) = &element.name {
        if seen.insert(name.clone()) {
            lines.push(HierarchyLine {
                indent: level * INDENT_WIDTH,
                name: name.clone(),
            });
        }
    }

    for child in &element.internal_element {
        collect_listing(child, level + 1, seen, lines);
    }
}

/// Collects link records in document order: in the CAEX sequence an
/// element's own links follow its nested elements.
fn collect_links(element: &InternalElement, links: &mut Vec<LinkRecord>) {
    for child in &element.internal_element {
        collect_links(child, links);
    }

    for link in &element.internal_link {
        links.push(LinkRecord {
            name: link.name.clone(),
            endpoint_a: link.ref_partner_side_a.clone().unwrap_or_default(),
            endpoint_b: link.ref_partner_side_b.clone().unwrap_or_default(),
        });
    }
}
