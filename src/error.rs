//! Error types for daisy2rdf.

use thiserror::Error;

/// Result type for daisy2rdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during XCRI to RDF conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not well-formed XML.
    #[error("Failed to parse XCRI document: {0}")]
    XmlParse(String),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error occurred during conversion.
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// One or more courses lack an `assessmentUnitCode` identifier
    /// (only raised with strict identifier checking).
    #[error("Missing course identifier: {0}")]
    MissingIdentifier(String),
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::XmlParse(e.to_string())
    }
}
