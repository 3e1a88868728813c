//! The Asset Administration Shell object graph assembled by the converters.
//!
//! These are plain owned data structures; a conversion run builds them once
//! and hands the finished [`Environment`] to a writer for packaging. Nothing
//! here performs I/O or validation.

mod elements;
mod reference;
mod shell;

pub use elements::{
    Category, Entity, EntityType, Property, ReferenceElement, RelationshipElement,
    SubmodelElement, SubmodelElementCollection, SubmodelElementList, ValueType,
};
pub use reference::{Key, KeyType, ModelReference};
pub use shell::{
    AssetAdministrationShell, AssetInformation, AssetKind, Environment, ModellingKind, Submodel,
};
