//! Generic subject resolver used for every element without a profile rule.

use super::{string_value, DocumentIndex, SubjectResolver};
use crate::ns;
use regex::Regex;
use roxmltree::Node;
use std::sync::OnceLock;

fn absolute_uri() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:\S+$").expect("absolute URI pattern is valid")
    })
}

/// Resolves subjects from an untyped `dc:identifier` that already is a URI,
/// falling back to a document-local URI under `base_uri`.
#[derive(Debug, Clone)]
pub struct BaseSubjectResolver {
    base_uri: String,
}

impl Default for BaseSubjectResolver {
    fn default() -> Self {
        Self::new(ns::DEFAULT_BASE_URI)
    }
}

impl BaseSubjectResolver {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
        }
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    fn identifier_uri(node: Node<'_, '_>) -> Option<String> {
        node.children()
            .filter(|c| c.has_tag_name((ns::DC, ns::node::IDENTIFIER)))
            .filter(|c| {
                c.attribute((ns::XSI, ns::attr::TYPE)).is_none()
                    && c.attribute((ns::DAISY, ns::attr::TYPE)).is_none()
            })
            .map(|c| string_value(c).trim().to_string())
            .find(|text| absolute_uri().is_match(text))
    }
}

impl SubjectResolver for BaseSubjectResolver {
    fn resolve_subject_uri(&self, node: Node<'_, '_>) -> String {
        self.resolve_indexed(node, &DocumentIndex::new(node.document()))
    }

    fn resolve_indexed(&self, node: Node<'_, '_>, index: &DocumentIndex<'_, '_>) -> String {
        if let Some(uri) = Self::identifier_uri(node) {
            return uri;
        }
        format!(
            "{}#{}-{}",
            self.base_uri,
            node.tag_name().name(),
            index.position(node)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const CATALOG: &str = r#"<catalog xmlns="http://xcri.org/profiles/1.2/catalog"
        xmlns:dc="http://purl.org/dc/elements/1.1/"
        xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
      <provider>
        <dc:identifier xsi:type="ns:ukprn">10007774</dc:identifier>
        <dc:identifier> http://oxpoints.oucs.ox.ac.uk/id/00000000 </dc:identifier>
        <course><dc:identifier>not a uri</dc:identifier></course>
        <course/>
      </provider>
    </catalog>"#;

    fn find<'a, 'i>(doc: &'a Document<'i>, local: &str, nth: usize) -> Node<'a, 'i> {
        doc.descendants()
            .filter(|n| n.has_tag_name((ns::XCRI, local)))
            .nth(nth)
            .expect("element present in fixture")
    }

    #[test]
    fn test_untyped_uri_identifier_is_used() {
        let doc = Document::parse(CATALOG).unwrap();
        let resolver = BaseSubjectResolver::default();
        assert_eq!(
            resolver.resolve_subject_uri(find(&doc, "provider", 0)),
            "http://oxpoints.oucs.ox.ac.uk/id/00000000"
        );
    }

    #[test]
    fn test_fallback_counts_same_named_elements() {
        let doc = Document::parse(CATALOG).unwrap();
        let resolver = BaseSubjectResolver::new("http://example.org/catalog.xml");
        assert_eq!(
            resolver.resolve_subject_uri(find(&doc, "course", 0)),
            "http://example.org/catalog.xml#course-1"
        );
        assert_eq!(
            resolver.resolve_subject_uri(find(&doc, "course", 1)),
            "http://example.org/catalog.xml#course-2"
        );
        assert_eq!(
            resolver.resolve_subject_uri(find(&doc, "catalog", 0)),
            "http://example.org/catalog.xml#catalog-1"
        );
    }

    #[test]
    fn test_default_base_is_absolute() {
        let doc = Document::parse(CATALOG).unwrap();
        let about = BaseSubjectResolver::default().resolve_subject_uri(find(&doc, "course", 1));
        assert_eq!(about, "urn:xcri:catalog#course-2");
        assert!(crate::core::graph::is_absolute_iri(&about));
    }

    #[test]
    fn test_indexed_and_single_resolution_agree() {
        let doc = Document::parse(CATALOG).unwrap();
        let resolver = BaseSubjectResolver::new("http://example.org/c");
        let index = DocumentIndex::new(&doc);
        for node in doc.descendants().filter(|n| n.is_element()) {
            assert_eq!(
                resolver.resolve_indexed(node, &index),
                resolver.resolve_subject_uri(node)
            );
        }
    }

    #[test]
    fn test_base_never_reports_missing_identifier() {
        let doc = Document::parse(CATALOG).unwrap();
        assert!(!BaseSubjectResolver::default().missing_identifier(find(&doc, "course", 1)));
    }
}
