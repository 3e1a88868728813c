//! Deterministic identifier synthesis.
//!
//! All identifiers produced during a conversion are derived from element
//! names under one fixed IRI namespace. Identifiers are name-addressed, not
//! instance-addressed: two elements with the same name map to the same IRI.

use alloc::format;
use alloc::string::String;

/// The IRI namespace under which every synthesized identifier lives.
pub const IRI_NAMESPACE: &str = "https://www.aut.ruhr-uni-bochum.de";

/// Formats `<namespace>/<Category>_<Name>`, e.g. `.../Asset_ConveyorBelt`.
///
/// Used by the plant-topology conversion for shells (`AAS`), submodels (`SM`)
/// and asset identifiers (`Asset`).
pub fn iri(category: &str, name: &str) -> String {
    format!("{}/{}_{}", IRI_NAMESPACE, category, name)
}

/// Shell identifier in the suffix style used by the process-description
/// conversion: `<namespace>/<idShort>_AAS`.
pub fn shell_iri(id_short: &str) -> String {
    format!("{}/{}_AAS", IRI_NAMESPACE, id_short)
}

/// Global asset identifier, suffix style: `<namespace>/<idShort>_Asset`.
pub fn asset_iri(id_short: &str) -> String {
    format!("{}/{}_Asset", IRI_NAMESPACE, id_short)
}

/// Submodel identifier, suffix style: `<namespace>/<idShort>_Submodel`.
pub fn submodel_iri(id_short: &str) -> String {
    format!("{}/{}_Submodel", IRI_NAMESPACE, id_short)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iri_formatting() {
        assert_eq!(
            iri("Asset", "Motor1"),
            "https://www.aut.ruhr-uni-bochum.de/Asset_Motor1"
        );
        assert_eq!(
            shell_iri("FPD"),
            "https://www.aut.ruhr-uni-bochum.de/FPD_AAS"
        );
        assert_eq!(
            submodel_iri("FPD"),
            "https://www.aut.ruhr-uni-bochum.de/FPD_Submodel"
        );
    }

    #[test]
    fn test_iri_is_name_addressed() {
        // Identical names yield identical identifiers, by construction.
        assert_eq!(iri("Asset", "Pump"), iri("Asset", "Pump"));
    }
}
