//! Typed submodel elements: properties, collections, lists, entities and
//! relationship/reference elements.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use super::reference::ModelReference;

/// Element category as carried in the serialized document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Constant,
    Parameter,
    Variable,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Constant => "CONSTANT",
            Category::Parameter => "PARAMETER",
            Category::Variable => "VARIABLE",
        }
    }
}

/// XSD value type of a [`Property`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    String,
    Double,
    DateTime,
    Boolean,
}

impl ValueType {
    /// The `xs:` type name used in the XML serialization.
    pub fn xsd_name(&self) -> &'static str {
        match self {
            ValueType::String => "xs:string",
            ValueType::Double => "xs:double",
            ValueType::DateTime => "xs:dateTime",
            ValueType::Boolean => "xs:boolean",
        }
    }
}

/// A typed scalar property. The value is optional; the type is not.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id_short: String,
    pub value_type: ValueType,
    /// Lexical value, already rendered for serialization.
    pub value: Option<String>,
    pub category: Option<Category>,
}

impl Property {
    /// A string property without a category.
    pub fn string(id_short: impl Into<String>, value: Option<String>) -> Self {
        Property {
            id_short: id_short.into(),
            value_type: ValueType::String,
            value,
            category: None,
        }
    }

    /// A string property carrying a category.
    pub fn string_with_category(
        id_short: impl Into<String>,
        value: Option<String>,
        category: Category,
    ) -> Self {
        Property {
            id_short: id_short.into(),
            value_type: ValueType::String,
            value,
            category: Some(category),
        }
    }

    /// A double property; the value is rendered with Rust's default float
    /// formatting.
    pub fn double(id_short: impl Into<String>, value: Option<f64>, category: Category) -> Self {
        Property {
            id_short: id_short.into(),
            value_type: ValueType::Double,
            value: value.map(|v| format!("{}", v)),
            category: Some(category),
        }
    }

    /// A dateTime property; the caller supplies an already-formatted lexical
    /// value (or `None` when the source field was absent or unparseable).
    pub fn date_time(
        id_short: impl Into<String>,
        value: Option<String>,
        category: Category,
    ) -> Self {
        Property {
            id_short: id_short.into(),
            value_type: ValueType::DateTime,
            value,
            category: Some(category),
        }
    }
}

/// An ordered, named group of submodel elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmodelElementCollection {
    /// Collections nested inside a list are anonymous.
    pub id_short: Option<String>,
    pub category: Option<Category>,
    pub value: Vec<SubmodelElement>,
}

impl SubmodelElementCollection {
    pub fn new(id_short: impl Into<String>, category: Category) -> Self {
        SubmodelElementCollection {
            id_short: Some(id_short.into()),
            category: Some(category),
            value: Vec::new(),
        }
    }

    pub fn with_value(
        id_short: impl Into<String>,
        category: Category,
        value: Vec<SubmodelElement>,
    ) -> Self {
        SubmodelElementCollection {
            id_short: Some(id_short.into()),
            category: Some(category),
            value,
        }
    }

    pub fn push(&mut self, element: SubmodelElement) {
        self.value.push(element);
    }
}

/// An ordered list whose members are all submodel element collections.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmodelElementList {
    pub id_short: String,
    pub value: Vec<SubmodelElement>,
}

impl SubmodelElementList {
    pub fn new(id_short: impl Into<String>) -> Self {
        SubmodelElementList {
            id_short: id_short.into(),
            value: Vec::new(),
        }
    }

    pub fn push(&mut self, element: SubmodelElement) {
        self.value.push(element);
    }
}

/// Whether an entity is managed by its own shell or co-managed by a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    CoManaged,
    SelfManaged,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::CoManaged => "CoManagedEntity",
            EntityType::SelfManaged => "SelfManagedEntity",
        }
    }
}

/// A physical or logical thing, optionally carrying nested statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id_short: String,
    pub entity_type: EntityType,
    pub statements: Vec<SubmodelElement>,
    /// Present only for self-managed entities.
    pub global_asset_id: Option<String>,
}

/// A directed relationship between two referenced elements.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipElement {
    pub id_short: String,
    pub first: ModelReference,
    pub second: ModelReference,
}

/// A single reference wrapped as a submodel element.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceElement {
    pub id_short: String,
    pub category: Option<Category>,
    pub value: ModelReference,
}

/// The closed set of element kinds a submodel can contain.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmodelElement {
    Property(Property),
    Collection(SubmodelElementCollection),
    List(SubmodelElementList),
    Entity(Entity),
    Relationship(RelationshipElement),
    Reference(ReferenceElement),
}

impl SubmodelElement {
    /// The idShort of the wrapped element, where it has one.
    pub fn id_short(&self) -> Option<&str> {
        match self {
            SubmodelElement::Property(p) => Some(&p.id_short),
            SubmodelElement::Collection(c) => c.id_short.as_deref(),
            SubmodelElement::List(l) => Some(&l.id_short),
            SubmodelElement::Entity(e) => Some(&e.id_short),
            SubmodelElement::Relationship(r) => Some(&r.id_short),
            SubmodelElement::Reference(r) => Some(&r.id_short),
        }
    }
}
