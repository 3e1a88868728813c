// src/resolver.rs

//! Handles the business logic of resolving process data from the
//! deserialized FPD model.
//!
//! Elements are classified by their `$type` suffix; state, operator and
//! resource records are built through one shared defaulting path, and
//! timestamp-like fields are parsed locally with failures degrading to
//! absent values. Nothing in this module raises.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::{debug, warn};
use serde_json::Value;

use crate::model::{Characteristic, Info, Project, RawElement};
use crate::types::{
    CharacteristicValues, Edge, ElementData, Fpd, IdentificationData, ProjectInfo, StateElement,
    StateType,
};

/// Resolves the public [`Fpd`] data from the raw deserialized document.
pub(crate) fn resolve_fpd(project: &Project, info: &Info) -> Fpd {
    let elements = &info.element_data_information;

    let mut fpd = Fpd {
        project: ProjectInfo {
            name: project.name.clone(),
            target_namespace: project.target_namespace.clone(),
            entry_point: project.entry_point.clone(),
        },
        ..Fpd::default()
    };

    for element in elements {
        if !element.id.is_empty() {
            fpd.index.insert_element(element.id.clone(), element.name.clone());
        }
    }

    for state_type in [StateType::Product, StateType::Energy, StateType::Information] {
        for element in by_type_suffix(elements, state_type.as_str()) {
            fpd.states.push(StateElement {
                state_type,
                data: state_data(element),
            });
        }
    }

    for element in by_type_suffix(elements, "ProcessOperator") {
        fpd.operators.push(operator_data(element));
    }

    for element in by_type_suffix(elements, "TechnicalResource") {
        fpd.resources.push(resource_data(element));
    }

    for element in by_type_suffix(elements, "Flow") {
        fpd.flows.push(edge(element));
    }

    for element in by_type_suffix(elements, "Usage") {
        fpd.usages.push(edge(element));
    }

    debug!(
        "resolved process description: {} states, {} operators, {} resources, {} flows, {} usages",
        fpd.states.len(),
        fpd.operators.len(),
        fpd.resources.len(),
        fpd.flows.len(),
        fpd.usages.len()
    );
    fpd
}

fn by_type_suffix<'a>(
    elements: &'a [RawElement],
    suffix: &'a str,
) -> impl Iterator<Item = &'a RawElement> {
    elements
        .iter()
        .filter(move |element| element.type_name.ends_with(suffix))
}

/// A state keeps its characteristics optional: without a block, the
/// serialized characteristic properties stay valueless.
fn state_data(element: &RawElement) -> ElementData {
    ElementData {
        id_short: element.name.clone(),
        unique_ident: element.id.clone(),
        identification: identification_data(element, false),
        characteristics: element
            .characteristics
            .first()
            .map(|block| characteristic_values(Some(block))),
        assignment: assignment(element),
    }
}

/// Operators trim their names and always carry a (possibly fully
/// defaulted) characteristics record.
fn operator_data(element: &RawElement) -> ElementData {
    ElementData {
        id_short: element.name.trim().to_string(),
        unique_ident: element.id.clone(),
        identification: identification_data(element, true),
        characteristics: Some(characteristic_values(element.characteristics.first())),
        assignment: assignment(element),
    }
}

fn resource_data(element: &RawElement) -> ElementData {
    ElementData {
        id_short: element.name.clone(),
        unique_ident: element.id.clone(),
        identification: identification_data(element, false),
        characteristics: Some(characteristic_values(element.characteristics.first())),
        assignment: assignment(element),
    }
}

fn identification_data(element: &RawElement, trim_short_name: bool) -> IdentificationData {
    let ident = &element.identification;
    let short_name = ident.short_name.clone().unwrap_or_default();
    IdentificationData {
        long_name: ident.long_name.clone().unwrap_or_default(),
        short_name: if trim_short_name {
            short_name.trim().to_string()
        } else {
            short_name
        },
        version: ident.version_number.clone().unwrap_or_default(),
        revision: ident.revision_number.clone().unwrap_or_default(),
    }
}

fn assignment(element: &RawElement) -> Option<String> {
    if element.is_assigned_to.is_empty() {
        None
    } else {
        Some(element.is_assigned_to.join(","))
    }
}

fn edge(element: &RawElement) -> Edge {
    Edge {
        source: element.source_ref.clone().unwrap_or_default(),
        target: element.target_ref.clone().unwrap_or_default(),
    }
}

/// Extracts the recognized characteristic fields, defaulting every absent
/// string to `""` and every absent numeric value to `0.0`. Only the first
/// validity limit is read.
fn characteristic_values(block: Option<&Characteristic>) -> CharacteristicValues {
    let category = block.and_then(|b| b.category.as_ref());
    let descriptive = block.and_then(|b| b.descriptive_element.as_ref());
    let relational = block.and_then(|b| b.relational_element.as_ref());
    let validity = descriptive.and_then(|d| d.validity_limits.first());

    let actual = descriptive.and_then(|d| d.actual_values.as_ref());
    let setpoint = descriptive.and_then(|d| d.setpoint_value.as_ref());

    CharacteristicValues {
        unique_ident: category
            .and_then(|c| c.unique_ident.clone())
            .unwrap_or_default(),
        long_name: category
            .and_then(|c| c.long_name.clone())
            .unwrap_or_default(),
        short_name: category
            .and_then(|c| c.short_name.clone())
            .unwrap_or_default(),
        version: category
            .and_then(|c| c.version_number.clone())
            .unwrap_or_default(),
        revision: category
            .and_then(|c| c.revision_number.clone())
            .unwrap_or_default(),

        view: relational.and_then(|r| r.view.clone()).unwrap_or_default(),
        model: relational.and_then(|r| r.model.clone()).unwrap_or_default(),
        regulation: relational
            .and_then(|r| r.regulations.clone())
            .unwrap_or_default(),

        value_determination_process: descriptive
            .and_then(|d| d.value_determination_process.clone())
            .unwrap_or_default(),
        representivity: descriptive
            .and_then(|d| d.representivity.clone())
            .unwrap_or_default(),

        actual_value: numeric_value(actual.and_then(|v| v.value.as_ref())),
        actual_unit: actual.and_then(|v| v.unit.clone()).unwrap_or_default(),
        setpoint_value: numeric_value(setpoint.and_then(|v| v.value.as_ref())),
        setpoint_unit: setpoint.and_then(|v| v.unit.clone()).unwrap_or_default(),

        limit_type: validity
            .and_then(|v| v.limit_type.clone())
            .unwrap_or_default(),
        from_date: validity
            .and_then(|v| v.from_date.as_ref())
            .and_then(parse_timestamp),
        to_date: validity
            .and_then(|v| v.to_date.as_ref())
            .and_then(parse_timestamp),
    }
}

/// Coerces a raw JSON value to a number; numeric strings are accepted,
/// everything else falls back to `0.0`.
fn numeric_value(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Parses a timestamp-like JSON value (ISO string or numeric epoch) and
/// re-renders it as an ISO timestamp. Parse failure yields `None` and a
/// warning, never an error.
fn parse_timestamp(value: &Value) -> Option<String> {
    let parsed = match value {
        Value::String(s) => parse_iso(s),
        Value::Number(n) => n
            .as_f64()
            .and_then(|secs| DateTime::from_timestamp_millis((secs * 1000.0) as i64))
            .map(|dt| dt.naive_utc()),
        _ => None,
    };

    if parsed.is_none() {
        warn!("unparseable timestamp {:?}, dropping the value", value);
    }
    parsed.map(|dt| dt.format("%Y-%m-%dT%H:%M:%S").to_string())
}

fn parse_iso(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
