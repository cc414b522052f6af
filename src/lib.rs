//! # daisy2rdf
//!
//! DAISY-profile XCRI course catalog to RDF converter.
//!
//! Courses are named `http://data.ox.ac.uk/id/course/<assessmentUnitCode>`;
//! every other element gets the subject URI of the generic XCRI rule.
//!
//! ## Example
//!
//! ```no_run
//! use daisy2rdf::{ConvertOptions, Daisy2Rdf, OutputFormat};
//!
//! let options = ConvertOptions {
//!     output_format: OutputFormat::NTriples,
//!     ..Default::default()
//! };
//!
//! let converter = Daisy2Rdf::new(options);
//! let rdf = converter.convert("catalog.xml").unwrap();
//! println!("{}", rdf);
//! ```

pub mod converter;
pub mod core;
pub mod error;
pub mod ns;
pub mod render;
pub mod resolver;

pub use converter::Daisy2Rdf;
pub use error::{Error, Result};
pub use resolver::{BaseSubjectResolver, DaisySubjectResolver, SubjectResolver};

/// Options for XCRI to RDF conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Which subject URI rules apply.
    pub profile: Profile,
    /// Serialization of the resulting graph.
    pub output_format: OutputFormat,
    /// Base for document-local subject URIs of elements without a URI identifier.
    pub base_uri: String,
    /// Fail instead of warning when a course has no `assessmentUnitCode`.
    pub strict_identifiers: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            profile: Profile::Daisy,
            output_format: OutputFormat::RdfXml,
            base_uri: ns::DEFAULT_BASE_URI.to_string(),
            strict_identifiers: false,
        }
    }
}

/// Subject URI rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// DAISY override: courses named by assessment unit code.
    #[default]
    Daisy,
    /// Generic XCRI rule for every element.
    Base,
}

/// Output serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    RdfXml,
    NTriples,
}

// Python bindings (only when 'python' feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use pyo3::prelude::*;

    /// Converts DAISY XCRI XML text to RDF/XML.
    #[pyfunction]
    fn convert_xcri(xml: String) -> PyResult<String> {
        let converter = Daisy2Rdf::with_defaults();
        converter
            .convert_str(&xml)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    pub fn daisy2rdf(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(convert_xcri, m)?)?;
        Ok(())
    }
}
