// src/lib.rs

#![no_std]
#![doc = "Parses VDI 3682 formalized process descriptions (FPD, JSON) and"]
#![doc = "converts them into an Asset Administration Shell environment."]
#![doc = ""]
#![doc = "This `no_std + alloc` library provides:"]
#![doc = "- `load_fpd_from_str`: Parsing the two-part FPD JSON export."]
#![doc = "- `convert_fpd`: Assembling the process shell and submodel (states,"]
#![doc = "  operators, resources, flows, usages) from the parsed data."]

extern crate alloc;

// --- Crate Modules ---

mod converter;
mod error;
mod model;
mod parser;
mod resolver;
mod types;

// --- Public API Re-exports ---

pub use converter::convert_fpd;
pub use error::FpdError;
pub use parser::load_fpd_from_str;
pub use types::{
    CharacteristicValues, Edge, ElementData, Fpd, IdentificationData, ProjectInfo, StateElement,
    StateType,
};
