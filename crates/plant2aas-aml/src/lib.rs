// src/lib.rs

#![no_std]
#![doc = "Parses AutomationML (CAEX) plant topologies and converts them into"]
#![doc = "an Asset Administration Shell environment."]
#![doc = ""]
#![doc = "This `no_std + alloc` library provides:"]
#![doc = "- `load_plant_from_str`: Parsing a CAEX document into ergonomic plant data."]
#![doc = "- `convert_plant`: Assembling the AAS environment (technical data,"]
#![doc = "  bill of material, automation engineering) from that data."]

extern crate alloc;

// --- Crate Modules ---

mod converter;
mod error;
mod model;
mod parser;
mod resolver;
mod types;

// --- Public API Re-exports ---

pub use converter::convert_plant;
pub use error::AmlError;
pub use parser::load_plant_from_str;
pub use types::{FileInfo, Plant, PlantAttribute, PlantElement};
