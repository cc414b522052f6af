use crate::core::graph::{is_absolute_iri, Object, RdfDocument};
use crate::render::{escape_ntriples_iri, escape_ntriples_literal, Renderer};
use crate::{Error, Result};

/// Serializes one triple per line; relative IRIs are rejected since N-Triples
/// has no base to resolve them against.
#[derive(Debug, Default, Clone, Copy)]
pub struct NTriplesRenderer;

fn absolute(iri: &str) -> Result<String> {
    if !is_absolute_iri(iri) {
        return Err(Error::Conversion(format!(
            "N-Triples needs absolute IRIs, got <{}>; set an absolute base URI",
            iri
        )));
    }
    Ok(escape_ntriples_iri(iri))
}

impl Renderer for NTriplesRenderer {
    fn render(&self, document: &RdfDocument) -> Result<String> {
        let mut out = String::new();

        for description in &document.descriptions {
            let subject = absolute(&description.about)?;
            for property in &description.properties {
                let object = match &property.object {
                    Object::Resource(iri) => format!("<{}>", absolute(iri)?),
                    Object::Literal(text) => format!("\"{}\"", escape_ntriples_literal(text)),
                };
                out.push_str(&format!(
                    "<{}> <{}> {} .\n",
                    subject,
                    property.predicate.iri(),
                    object
                ));
            }
        }

        Ok(out)
    }
}
