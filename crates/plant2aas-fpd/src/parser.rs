// src/parser.rs

use alloc::vec::Vec;
use serde_json::Value;

use crate::error::FpdError;
use crate::model::{Info, Project};
use crate::resolver;
use crate::types::Fpd;

/// Parses an FPD JSON export into a resolved [`Fpd`].
///
/// The export is an array whose first entry is the project header and whose
/// second entry holds the process information. Both entries must exist;
/// inside them, every field is optional and degrades to a default.
///
/// # Errors
/// Returns an `FpdError` if the document is not valid JSON or one of the
/// two top-level sections is missing.
pub fn load_fpd_from_str(json_content: &str) -> Result<Fpd, FpdError> {
    let document: Vec<Value> = serde_json::from_str(json_content)?;

    let project_value = document
        .first()
        .ok_or(FpdError::MissingSection { section: "project" })?;
    let info_value = document.get(1).ok_or(FpdError::MissingSection {
        section: "process information",
    })?;

    let project: Project = serde_json::from_value(project_value.clone())?;
    let info: Info = serde_json::from_value(info_value.clone())?;

    Ok(resolver::resolve_fpd(&project, &info))
}
