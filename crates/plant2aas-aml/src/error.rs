// src/error.rs

use alloc::fmt;
use quick_xml::errors::serialize::DeError;

/// Errors that can occur while parsing an AutomationML document.
///
/// The structural passes behind the parser are total; only deserialization
/// of the XML itself can fail.
#[derive(Debug)]
pub enum AmlError {
    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),
}

impl From<DeError> for AmlError {
    fn from(e: DeError) -> Self {
        AmlError::XmlParsing(e)
    }
}

impl fmt::Display for AmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmlError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AmlError;

    #[test]
    fn test_from_de_error() {
        let xml_err = quick_xml::de::from_str::<()>("not xml").unwrap_err();
        let aml_err: AmlError = xml_err.into();
        assert!(matches!(aml_err, AmlError::XmlParsing(_)));
    }
}
