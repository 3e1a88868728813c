// src/error.rs

use alloc::fmt;

/// Errors that can occur while parsing an FPD export.
///
/// Classification and record construction behind the parser are total; only
/// the JSON boundary can fail.
#[derive(Debug)]
pub enum FpdError {
    /// An error from the underlying `serde_json` deserializer.
    JsonParsing(serde_json::Error),

    /// One of the two top-level sections of the export was missing.
    MissingSection { section: &'static str },
}

impl From<serde_json::Error> for FpdError {
    fn from(e: serde_json::Error) -> Self {
        FpdError::JsonParsing(e)
    }
}

impl fmt::Display for FpdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FpdError::JsonParsing(e) => write!(f, "JSON parsing error: {}", e),
            FpdError::MissingSection { section } => {
                write!(f, "Missing required document section: {}", section)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FpdError;
    use crate::load_fpd_from_str;

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<()>("not json").unwrap_err();
        let fpd_err: FpdError = json_err.into();
        assert!(matches!(fpd_err, FpdError::JsonParsing(_)));
    }

    #[test]
    fn test_missing_sections() {
        assert!(matches!(
            load_fpd_from_str("[]"),
            Err(FpdError::MissingSection { section: "project" })
        ));
        assert!(matches!(
            load_fpd_from_str("[{}]"),
            Err(FpdError::MissingSection { .. })
        ));
    }
}
