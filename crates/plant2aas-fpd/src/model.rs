// src/model.rs

//! Internal `serde` data structures that map directly to the FPD JSON
//! export.
//!
//! The export is a two-element array: the project header followed by the
//! process information block. Every field is optional or defaulted here;
//! the resolver decides how absence degrades. Not intended for direct
//! public use.

use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;
use serde_json::Value;

/// The first array entry: project metadata.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Project {
    pub name: Option<String>,

    #[serde(rename = "targetNamespace")]
    pub target_namespace: Option<String>,

    #[serde(rename = "entryPoint")]
    pub entry_point: Option<String>,
}

/// The second array entry: the process graph and its element data.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Info {
    /// The process graph itself; element data is all the conversion needs.
    pub process: Option<Value>,

    #[serde(rename = "elementDataInformation")]
    pub element_data_information: Vec<RawElement>,
}

/// One entry of `elementDataInformation`. The `$type` suffix decides
/// whether this is a state, an operator, a resource, a flow or a usage.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawElement {
    #[serde(rename = "$type")]
    pub type_name: String,

    pub id: String,

    pub name: String,

    pub identification: Identification,

    pub characteristics: Vec<Characteristic>,

    #[serde(rename = "isAssignedTo")]
    pub is_assigned_to: Vec<String>,

    /// Present on flows and usages.
    #[serde(rename = "sourceRef")]
    pub source_ref: Option<String>,

    #[serde(rename = "targetRef")]
    pub target_ref: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Identification {
    #[serde(rename = "longName")]
    pub long_name: Option<String>,

    #[serde(rename = "shortName")]
    pub short_name: Option<String>,

    #[serde(rename = "versionNumber")]
    pub version_number: Option<String>,

    #[serde(rename = "revisionNumber")]
    pub revision_number: Option<String>,
}

/// One characteristic block; only the first block of an element is read.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Characteristic {
    pub category: Option<CharacteristicCategory>,

    #[serde(rename = "descriptiveElement")]
    pub descriptive_element: Option<DescriptiveElement>,

    #[serde(rename = "relationalElement")]
    pub relational_element: Option<RelationalElement>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CharacteristicCategory {
    #[serde(rename = "uniqueIdent")]
    pub unique_ident: Option<String>,

    #[serde(rename = "longName")]
    pub long_name: Option<String>,

    #[serde(rename = "shortName")]
    pub short_name: Option<String>,

    #[serde(rename = "versionNumber")]
    pub version_number: Option<String>,

    #[serde(rename = "revisionNumber")]
    pub revision_number: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct DescriptiveElement {
    #[serde(rename = "valueDeterminationProcess")]
    pub value_determination_process: Option<String>,

    pub representivity: Option<String>,

    #[serde(rename = "actualValues")]
    pub actual_values: Option<ValueWithUnit>,

    #[serde(rename = "setpointValue")]
    pub setpoint_value: Option<ValueWithUnit>,

    #[serde(rename = "validityLimits")]
    pub validity_limits: Vec<ValidityLimit>,
}

/// A `{ value, unit }` pair; exports write the value as a number or a
/// numeric string, so it is kept raw here.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ValueWithUnit {
    pub value: Option<Value>,

    pub unit: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ValidityLimit {
    #[serde(rename = "limitType")]
    pub limit_type: Option<String>,

    /// Timestamp-like: an ISO string or a numeric epoch.
    #[serde(rename = "from")]
    pub from_date: Option<Value>,

    #[serde(rename = "to")]
    pub to_date: Option<Value>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RelationalElement {
    pub view: Option<String>,

    pub model: Option<String>,

    #[serde(rename = "regulationsForRelationalGeneration")]
    pub regulations: Option<String>,
}
