//! Resolves opaque element and interface identifiers back into named
//! endpoint pairs.
//!
//! Source formats express links between elements through raw identifiers.
//! The [`IdentifierIndex`] is built once per input document and maps those
//! identifiers to the human-readable names of their owning elements;
//! [`resolve_links`] then turns raw link records into named connection
//! records. Resolution is total: an identifier without an index entry
//! degrades to a placeholder name instead of failing the run.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::warn;

/// Run-scoped lookup from raw source identifiers to owning element names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierIndex {
    /// Element id -> element name (exact 1:1).
    elements: BTreeMap<String, String>,
    /// Interface id -> name of the element that directly declares it.
    interfaces: BTreeMap<String, String>,
}

impl IdentifierIndex {
    pub fn new() -> Self {
        IdentifierIndex::default()
    }

    pub fn insert_element(&mut self, raw_id: impl Into<String>, name: impl Into<String>) {
        self.elements.insert(raw_id.into(), name.into());
    }

    /// Records an interface identifier as owned by the element that declares
    /// it. Interfaces are attributed to their direct declaring element only.
    pub fn insert_interface(&mut self, raw_id: impl Into<String>, owner_name: impl Into<String>) {
        self.interfaces.insert(raw_id.into(), owner_name.into());
    }

    pub fn element_name(&self, raw_id: &str) -> Option<&str> {
        self.elements.get(raw_id).map(String::as_str)
    }

    pub fn interface_owner(&self, raw_id: &str) -> Option<&str> {
        self.interfaces.get(raw_id).map(String::as_str)
    }

    /// Resolves a link endpoint through the interface map, degrading to the
    /// placeholder `Unknown_<rawId>` when the identifier is not indexed.
    pub fn resolve_endpoint(&self, raw_id: &str) -> String {
        match self.interface_owner(raw_id) {
            Some(owner) => owner.to_string(),
            None => {
                warn!("no owner indexed for interface id '{}', using placeholder", raw_id);
                format!("Unknown_{}", raw_id)
            }
        }
    }
}

/// A raw link between two interface identifiers, as found in the source
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    /// Explicit link name, when the source carries one.
    pub name: Option<String>,
    pub endpoint_a: String,
    pub endpoint_b: String,
}

/// A link with both endpoints resolved to element names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRecord {
    pub name: String,
    pub endpoint_a_name: String,
    pub endpoint_b_name: String,
}

/// Resolves every link record into a connection record, preserving input
/// order. Unnamed records are named `Link<ordinal>` from their 1-based
/// position; unresolvable endpoints keep the placeholder name.
pub fn resolve_links(index: &IdentifierIndex, links: &[LinkRecord]) -> Vec<ConnectionRecord> {
    links
        .iter()
        .enumerate()
        .map(|(i, link)| ConnectionRecord {
            name: link
                .name
                .clone()
                .unwrap_or_else(|| format!("Link{}", i + 1)),
            endpoint_a_name: index.resolve_endpoint(&link.endpoint_a),
            endpoint_b_name: index.resolve_endpoint(&link.endpoint_b),
        })
        .collect()
}
