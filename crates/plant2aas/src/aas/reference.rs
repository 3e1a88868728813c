//! Model references: typed key chains pointing at identifiable or nested
//! elements.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

/// The kind of element a [`Key`] addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    AssetAdministrationShell,
    Submodel,
    SubmodelElementCollection,
}

impl KeyType {
    /// The token used for this key type in the XML serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::AssetAdministrationShell => "AssetAdministrationShell",
            KeyType::Submodel => "Submodel",
            KeyType::SubmodelElementCollection => "SubmodelElementCollection",
        }
    }
}

/// One step in a reference chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    pub key_type: KeyType,
    /// The identifier (first key) or idShort (subsequent keys) addressed.
    pub value: String,
}

/// An ordered chain of keys addressing one element in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelReference {
    pub keys: Vec<Key>,
}

impl ModelReference {
    /// Reference to an Asset Administration Shell by identifier.
    pub fn to_shell(shell_id: &str) -> Self {
        ModelReference {
            keys: vec![Key {
                key_type: KeyType::AssetAdministrationShell,
                value: shell_id.to_string(),
            }],
        }
    }

    /// Reference to a Submodel by identifier.
    pub fn to_submodel(submodel_id: &str) -> Self {
        ModelReference {
            keys: vec![Key {
                key_type: KeyType::Submodel,
                value: submodel_id.to_string(),
            }],
        }
    }

    /// Reference into a collection nested inside a submodel:
    /// `Submodel <id> / Collection <collection> / Collection <element>`.
    pub fn to_nested_collection(submodel_id: &str, collection: &str, element: &str) -> Self {
        ModelReference {
            keys: vec![
                Key {
                    key_type: KeyType::Submodel,
                    value: submodel_id.to_string(),
                },
                Key {
                    key_type: KeyType::SubmodelElementCollection,
                    value: collection.to_string(),
                },
                Key {
                    key_type: KeyType::SubmodelElementCollection,
                    value: element.to_string(),
                },
            ],
        }
    }
}
