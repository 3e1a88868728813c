#![no_std]
#![doc = "Core document model and structural transformations for AAS generation."]
#![doc = ""]
#![doc = "This `no_std + alloc` library holds everything that is independent of a"]
#![doc = "concrete source format: the Asset Administration Shell object graph, the"]
#![doc = "deterministic identifier scheme, and the three structural passes every"]
#![doc = "conversion is built from:"]
#![doc = ""]
#![doc = "- `hierarchy`: rebuilding a tree from an indentation-tagged listing."]
#![doc = "- `entity`: synthesizing leaf/composite entity views from that tree."]
#![doc = "- `links`: resolving opaque element/interface identifiers into named"]
#![doc = "  connection records."]

// 'alloc' is used for dynamic allocation (owned names, child vectors, maps).
extern crate alloc;

// --- Foundation Modules ---
pub mod aas;
pub mod ids;

// --- Structural Core ---
pub mod entity;
pub mod hierarchy;
pub mod links;

// --- Top-level Exports ---
pub use aas::{AssetAdministrationShell, Environment, Submodel, SubmodelElement};
pub use entity::synthesize_entities;
pub use hierarchy::{HierarchyForest, HierarchyLine};
pub use links::{ConnectionRecord, IdentifierIndex, LinkRecord, resolve_links};
