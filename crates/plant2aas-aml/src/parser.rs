// src/parser.rs

use crate::error::AmlError;
use crate::model;
use crate::resolver;
use crate::types::Plant;

/// Parses an AutomationML (CAEX) string slice into a resolved [`Plant`].
///
/// Deserialization of the XML is the only step that can fail; everything
/// after it is a total transformation. Elements without names, attributes
/// without units or values, and links without partner references all
/// degrade to defaults instead of producing errors.
///
/// # Errors
/// Returns an `AmlError` if the document is not well-formed CAEX XML.
pub fn load_plant_from_str(xml_content: &str) -> Result<Plant, AmlError> {
    let file: model::CaexFile = quick_xml::de::from_str(xml_content)?;
    Ok(resolver::resolve_plant(&file))
}
