//! Synthesizes typed entity views from a reconstructed hierarchy.
//!
//! A node with children becomes a self-managed entity with a deterministic,
//! name-derived asset identifier; a childless node becomes a co-managed
//! entity without one. The same synthesis backs both the bill-of-materials
//! view and the device view, which own structurally parallel but independent
//! trees.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::aas::{Entity, EntityType, Property, SubmodelElement};
use crate::hierarchy::{HierarchyForest, NodeId};
use crate::ids;

/// Value of the marker property prepended to every synthesized view.
const ARCHETYPE: &str = "Full";

/// Synthesizes the entity view of a forest: the archetype marker followed by
/// one recursively populated entity per root, in first-seen root order.
pub fn synthesize_entities(forest: &HierarchyForest) -> Vec<SubmodelElement> {
    let mut elements = Vec::with_capacity(forest.roots().len() + 1);
    elements.push(SubmodelElement::Property(Property::string(
        "ArcheType",
        Some(ARCHETYPE.to_string()),
    )));
    for &root in forest.roots() {
        elements.push(SubmodelElement::Entity(synthesize_entity(forest, root)));
    }
    elements
}

fn synthesize_entity(forest: &HierarchyForest, id: NodeId) -> Entity {
    let node = forest.node(id);
    let statements: Vec<SubmodelElement> = node
        .children
        .iter()
        .map(|&child| SubmodelElement::Entity(synthesize_entity(forest, child)))
        .collect();

    if statements.is_empty() {
        Entity {
            id_short: node.name.clone(),
            entity_type: EntityType::CoManaged,
            statements,
            global_asset_id: None,
        }
    } else {
        Entity {
            id_short: node.name.clone(),
            entity_type: EntityType::SelfManaged,
            statements,
            global_asset_id: Some(ids::iri("Asset", &node.name)),
        }
    }
}
