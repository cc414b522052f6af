use crate::core::graph::{Object, RdfDocument};
use crate::ns::vocab;
use crate::render::{escape_xml_attr, escape_xml_text, Renderer};
use crate::Result;

/// Serializes descriptions as flat `rdf:Description` blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct RdfXmlRenderer;

impl Renderer for RdfXmlRenderer {
    fn render(&self, document: &RdfDocument) -> Result<String> {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rdf:RDF");
        for (prefix, iri) in vocab::PREFIXES {
            out.push_str(&format!("\n    xmlns:{}=\"{}\"", prefix, iri));
        }
        out.push_str(">\n");

        for description in &document.descriptions {
            out.push_str(&format!(
                "  <rdf:Description rdf:about=\"{}\">\n",
                escape_xml_attr(&description.about)
            ));
            for property in &description.properties {
                let qname = property.predicate.qname();
                match &property.object {
                    Object::Resource(iri) => out.push_str(&format!(
                        "    <{} rdf:resource=\"{}\"/>\n",
                        qname,
                        escape_xml_attr(iri)
                    )),
                    Object::Literal(text) => out.push_str(&format!(
                        "    <{}>{}</{}>\n",
                        qname,
                        escape_xml_text(text),
                        qname
                    )),
                }
            }
            out.push_str("  </rdf:Description>\n");
        }

        out.push_str("</rdf:RDF>\n");
        Ok(out)
    }
}
