//! Shells, submodels and the environment that owns them.

use alloc::string::String;
use alloc::vec::Vec;

use super::elements::SubmodelElement;
use super::reference::ModelReference;

/// Whether a submodel describes an instance or a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModellingKind {
    Instance,
    Template,
}

impl ModellingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModellingKind::Instance => "Instance",
            ModellingKind::Template => "Template",
        }
    }
}

/// Whether the asset behind a shell is an instance or a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Instance,
    Type,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Instance => "Instance",
            AssetKind::Type => "Type",
        }
    }
}

/// The asset a shell administrates.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetInformation {
    pub asset_kind: AssetKind,
    pub global_asset_id: Option<String>,
}

/// A named, identified container of submodel elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Submodel {
    pub id: String,
    pub id_short: String,
    pub kind: Option<ModellingKind>,
    pub submodel_elements: Vec<SubmodelElement>,
}

impl Submodel {
    pub fn new(id: impl Into<String>, id_short: impl Into<String>) -> Self {
        Submodel {
            id: id.into(),
            id_short: id_short.into(),
            kind: None,
            submodel_elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: SubmodelElement) {
        self.submodel_elements.push(element);
    }
}

/// An Asset Administration Shell: asset information plus references to the
/// submodels describing it.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetAdministrationShell {
    pub id: String,
    pub id_short: String,
    pub asset_information: AssetInformation,
    pub submodels: Vec<ModelReference>,
}

/// The finished output document: all shells and submodels of one conversion
/// run, in source order. Built once, never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Environment {
    pub shells: Vec<AssetAdministrationShell>,
    pub submodels: Vec<Submodel>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// The manifest of all shell identifiers, in the order the shells were
    /// assembled.
    pub fn shell_ids(&self) -> Vec<&str> {
        self.shells.iter().map(|aas| aas.id.as_str()).collect()
    }
}
