mod escape;
mod ntriples;
mod rdfxml;

use crate::core::graph::RdfDocument;
use crate::Result;

pub use escape::{escape_ntriples_iri, escape_ntriples_literal, escape_xml_attr, escape_xml_text};
pub use ntriples::NTriplesRenderer;
pub use rdfxml::RdfXmlRenderer;

pub trait Renderer {
    fn render(&self, document: &RdfDocument) -> Result<String>;
}
