// src/package.rs

//! AASX packaging: wraps the serialized environment in the OPC archive
//! layout expected by AASX tooling.
//!
//! ## Package structure
//!
//! ```text
//! package.aasx (ZIP archive)
//! ├── [Content_Types].xml        # OPC content type map
//! ├── _rels/
//! │   └── .rels                  # Root relationship to the AASX origin
//! └── aasx/
//!     ├── aasx-origin            # Origin part (empty)
//!     ├── _rels/
//!     │   └── aasx-origin.rels   # Relationship to the spec part
//!     └── data.xml               # The serialized environment
//! ```

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use log::info;
use plant2aas::Environment;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::builder::save_environment_to_string;
use crate::error::AasxError;

/// Standard part paths within an AASX archive.
pub mod paths {
    /// OPC content type map.
    pub const CONTENT_TYPES: &str = "[Content_Types].xml";
    /// Root relationships.
    pub const ROOT_RELS: &str = "_rels/.rels";
    /// AASX origin part.
    pub const ORIGIN: &str = "aasx/aasx-origin";
    /// Relationships of the origin part.
    pub const ORIGIN_RELS: &str = "aasx/_rels/aasx-origin.rels";
    /// The serialized environment.
    pub const SPEC: &str = "aasx/data.xml";
}

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="text/xml"/>
  <Override PartName="/aasx/aasx-origin" ContentType="text/plain"/>
</Types>
"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Type="http://admin-shell.io/aasx/relationships/aasx-origin" Target="/aasx/aasx-origin" Id="r-origin"/>
</Relationships>
"#;

const ORIGIN_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Type="http://admin-shell.io/aasx/relationships/aas-spec" Target="/aasx/data.xml" Id="r-data"/>
</Relationships>
"#;

/// Marker content of the origin part.
const ORIGIN_CONTENT: &str = "Intentionally empty.";

/// Writes the environment as a complete AASX package to `writer`.
///
/// # Errors
/// Returns an `AasxError` if XML serialization or archive writing fails.
pub fn write_aasx<W: Write + Seek>(writer: W, env: &Environment) -> Result<(), AasxError> {
    let data_xml = save_environment_to_string(env)?;

    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(paths::CONTENT_TYPES, options)?;
    zip.write_all(CONTENT_TYPES_XML.as_bytes())?;

    zip.start_file(paths::ROOT_RELS, options)?;
    zip.write_all(ROOT_RELS_XML.as_bytes())?;

    zip.start_file(paths::ORIGIN, options)?;
    zip.write_all(ORIGIN_CONTENT.as_bytes())?;

    zip.start_file(paths::ORIGIN_RELS, options)?;
    zip.write_all(ORIGIN_RELS_XML.as_bytes())?;

    zip.start_file(paths::SPEC, options)?;
    zip.write_all(data_xml.as_bytes())?;

    zip.finish()?;

    info!(
        "wrote AASX package: {} shells, {} submodels",
        env.shells.len(),
        env.submodels.len()
    );
    Ok(())
}

/// Creates `path` and writes the environment as an AASX package into it.
///
/// # Errors
/// Returns an `AasxError` if the file cannot be created or writing fails.
pub fn save_aasx_to_path(path: &Path, env: &Environment) -> Result<(), AasxError> {
    let file = File::create(path)?;
    write_aasx(file, env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plant2aas::aas::{
        AssetAdministrationShell, AssetInformation, AssetKind, ModelReference, Submodel,
    };
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn sample_environment() -> Environment {
        Environment {
            shells: vec![AssetAdministrationShell {
                id: "https://example.org/aas/demo".to_string(),
                id_short: "DemoShell".to_string(),
                asset_information: AssetInformation {
                    asset_kind: AssetKind::Instance,
                    global_asset_id: None,
                },
                submodels: vec![ModelReference::to_submodel("https://example.org/sm/demo")],
            }],
            submodels: vec![Submodel::new("https://example.org/sm/demo", "Demo")],
        }
    }

    #[test]
    fn test_package_contains_all_parts() {
        let mut buffer = Cursor::new(Vec::new());
        write_aasx(&mut buffer, &sample_environment()).expect("Failed to write package");

        let mut archive =
            ZipArchive::new(Cursor::new(buffer.into_inner())).expect("Failed to reopen package");

        for part in [
            paths::CONTENT_TYPES,
            paths::ROOT_RELS,
            paths::ORIGIN,
            paths::ORIGIN_RELS,
            paths::SPEC,
        ] {
            assert!(
                archive.by_name(part).is_ok(),
                "part {} missing from package",
                part
            );
        }
    }

    #[test]
    fn test_spec_part_carries_the_environment() {
        let mut buffer = Cursor::new(Vec::new());
        write_aasx(&mut buffer, &sample_environment()).expect("Failed to write package");

        let mut archive =
            ZipArchive::new(Cursor::new(buffer.into_inner())).expect("Failed to reopen package");

        let mut data_xml = String::new();
        archive
            .by_name(paths::SPEC)
            .expect("spec part missing")
            .read_to_string(&mut data_xml)
            .expect("spec part unreadable");

        assert!(data_xml.contains("<environment xmlns=\"https://admin-shell.io/aas/3/0\">"));
        assert!(data_xml.contains("<id>https://example.org/aas/demo</id>"));
        assert!(data_xml.contains("<id>https://example.org/sm/demo</id>"));
    }
}
