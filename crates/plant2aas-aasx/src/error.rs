// src/error.rs

use core::fmt;
use quick_xml::errors::serialize::SeError;
use zip::result::ZipError;

/// Errors that can occur while writing an AASX package.
#[derive(Debug)]
pub enum AasxError {
    /// An error from the underlying `quick-xml` serializer.
    XmlSerializing(SeError),

    /// An error occurred during string formatting (e.g., the declaration).
    FmtError(fmt::Error),

    /// An error from the `zip` archive writer.
    Zip(ZipError),

    /// An I/O error while writing the package.
    Io(std::io::Error),
}

impl From<SeError> for AasxError {
    fn from(e: SeError) -> Self {
        AasxError::XmlSerializing(e)
    }
}

impl From<fmt::Error> for AasxError {
    fn from(e: fmt::Error) -> Self {
        AasxError::FmtError(e)
    }
}

impl From<ZipError> for AasxError {
    fn from(e: ZipError) -> Self {
        AasxError::Zip(e)
    }
}

impl From<std::io::Error> for AasxError {
    fn from(e: std::io::Error) -> Self {
        AasxError::Io(e)
    }
}

impl fmt::Display for AasxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AasxError::XmlSerializing(e) => write!(f, "XML serializing error: {}", e),
            AasxError::FmtError(e) => write!(f, "Formatting error: {}", e),
            AasxError::Zip(e) => write!(f, "Package archive error: {}", e),
            AasxError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AasxError {}
