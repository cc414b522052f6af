//! DAISY profile override: courses are named by their assessment unit code.

use super::{string_value, BaseSubjectResolver, DocumentIndex, SubjectResolver};
use crate::ns;
use roxmltree::Node;

/// Overrides the subject of `xcri:course` elements and delegates every other
/// element to `base` untouched.
#[derive(Debug, Clone, Default)]
pub struct DaisySubjectResolver<B = BaseSubjectResolver> {
    base: B,
}

impl<B: SubjectResolver> DaisySubjectResolver<B> {
    pub fn new(base: B) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &B {
        &self.base
    }

    fn is_course(node: Node<'_, '_>) -> bool {
        node.has_tag_name((ns::XCRI, ns::node::COURSE))
    }

    /// Raw text of the first `dc:identifier` child typed `assessmentUnitCode`.
    pub fn assessment_unit_code(node: Node<'_, '_>) -> Option<String> {
        node.children()
            .find(|c| {
                c.has_tag_name((ns::DC, ns::node::IDENTIFIER))
                    && c.attribute((ns::DAISY, ns::attr::TYPE)) == Some(ns::ASSESSMENT_UNIT_CODE)
            })
            .map(string_value)
    }

    fn course_uri(node: Node<'_, '_>) -> String {
        let code = Self::assessment_unit_code(node).unwrap_or_default();
        if code.trim().is_empty() {
            log::warn!(
                "course at byte {} has no {} identifier; subject URI degrades to {}{}",
                node.range().start,
                ns::ASSESSMENT_UNIT_CODE,
                ns::COURSE_URI_PREFIX,
                code
            );
        }
        format!("{}{}", ns::COURSE_URI_PREFIX, code)
    }
}

impl<B: SubjectResolver> SubjectResolver for DaisySubjectResolver<B> {
    fn resolve_subject_uri(&self, node: Node<'_, '_>) -> String {
        if !Self::is_course(node) {
            return self.base.resolve_subject_uri(node);
        }
        Self::course_uri(node)
    }

    fn resolve_indexed(&self, node: Node<'_, '_>, index: &DocumentIndex<'_, '_>) -> String {
        if !Self::is_course(node) {
            return self.base.resolve_indexed(node, index);
        }
        Self::course_uri(node)
    }

    fn missing_identifier(&self, node: Node<'_, '_>) -> bool {
        if !Self::is_course(node) {
            return self.base.missing_identifier(node);
        }
        Self::assessment_unit_code(node).map_or(true, |code| code.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    fn course_doc(body: &str) -> String {
        format!(
            r#"<course xmlns="http://xcri.org/profiles/1.2/catalog"
                xmlns:dc="http://purl.org/dc/elements/1.1/"
                xmlns:daisy="http://www.oucs.ox.ac.uk">{body}</course>"#
        )
    }

    /// Base stand-in that makes delegation observable.
    struct FixedBase;

    impl SubjectResolver for FixedBase {
        fn resolve_subject_uri(&self, node: Node<'_, '_>) -> String {
            format!("urn:base:{}", node.tag_name().name())
        }
    }

    #[test]
    fn test_course_uri_from_assessment_unit_code() {
        let xml = course_doc(
            r#"<dc:identifier daisy:type="assessmentUnitCode">CS101</dc:identifier>"#,
        );
        let doc = Document::parse(&xml).unwrap();
        let resolver = DaisySubjectResolver::<BaseSubjectResolver>::default();
        assert_eq!(
            resolver.resolve_subject_uri(doc.root_element()),
            "http://data.ox.ac.uk/id/course/CS101"
        );
        assert!(!resolver.missing_identifier(doc.root_element()));
    }

    #[test]
    fn test_other_identifier_types_are_ignored() {
        let xml = course_doc(concat!(
            r#"<dc:identifier daisy:type="otherCode">X1</dc:identifier>"#,
            r#"<dc:identifier>http://example.org/course/1</dc:identifier>"#,
            r#"<dc:identifier daisy:type="assessmentUnitCode">A2</dc:identifier>"#,
        ));
        let doc = Document::parse(&xml).unwrap();
        let resolver = DaisySubjectResolver::new(FixedBase);
        assert_eq!(
            resolver.resolve_subject_uri(doc.root_element()),
            "http://data.ox.ac.uk/id/course/A2"
        );
    }

    #[test]
    fn test_missing_identifier_yields_bare_prefix() {
        let xml = course_doc("<dc:title>Untitled</dc:title>");
        let doc = Document::parse(&xml).unwrap();
        let resolver = DaisySubjectResolver::new(FixedBase);
        assert_eq!(
            resolver.resolve_subject_uri(doc.root_element()),
            ns::COURSE_URI_PREFIX
        );
        assert!(resolver.missing_identifier(doc.root_element()));
    }

    #[test]
    fn test_empty_identifier_counts_as_missing() {
        let xml = course_doc(r#"<dc:identifier daisy:type="assessmentUnitCode"></dc:identifier>"#);
        let doc = Document::parse(&xml).unwrap();
        let resolver = DaisySubjectResolver::new(FixedBase);
        assert_eq!(
            resolver.resolve_subject_uri(doc.root_element()),
            ns::COURSE_URI_PREFIX
        );
        assert!(resolver.missing_identifier(doc.root_element()));
    }

    #[test]
    fn test_whitespace_identifier_counts_as_missing_but_stays_raw() {
        let xml = course_doc(r#"<dc:identifier daisy:type="assessmentUnitCode">  </dc:identifier>"#);
        let doc = Document::parse(&xml).unwrap();
        let resolver = DaisySubjectResolver::new(FixedBase);
        assert_eq!(
            resolver.resolve_subject_uri(doc.root_element()),
            "http://data.ox.ac.uk/id/course/  "
        );
        assert!(resolver.missing_identifier(doc.root_element()));
    }

    #[test]
    fn test_indexed_resolution_delegates_like_single() {
        let xml = r#"<catalog xmlns="http://xcri.org/profiles/1.2/catalog"
            xmlns:dc="http://purl.org/dc/elements/1.1/"
            xmlns:daisy="http://www.oucs.ox.ac.uk">
            <course><dc:identifier daisy:type="assessmentUnitCode">C1</dc:identifier>
              <presentation/><presentation/></course></catalog>"#;
        let doc = Document::parse(xml).unwrap();
        let index = DocumentIndex::new(&doc);
        let resolver = DaisySubjectResolver::<BaseSubjectResolver>::default();
        for node in doc.descendants().filter(|n| n.is_element()) {
            assert_eq!(
                resolver.resolve_indexed(node, &index),
                resolver.resolve_subject_uri(node)
            );
        }
    }

    #[test]
    fn test_first_matching_identifier_wins() {
        let xml = course_doc(concat!(
            r#"<dc:identifier daisy:type="assessmentUnitCode">FIRST</dc:identifier>"#,
            r#"<dc:identifier daisy:type="assessmentUnitCode">SECOND</dc:identifier>"#,
        ));
        let doc = Document::parse(&xml).unwrap();
        let resolver = DaisySubjectResolver::new(FixedBase);
        assert_eq!(
            resolver.resolve_subject_uri(doc.root_element()),
            "http://data.ox.ac.uk/id/course/FIRST"
        );
    }

    #[test]
    fn test_identifier_text_is_not_trimmed_or_encoded() {
        let xml = course_doc(
            r#"<dc:identifier daisy:type="assessmentUnitCode"> A B&amp;C </dc:identifier>"#,
        );
        let doc = Document::parse(&xml).unwrap();
        let resolver = DaisySubjectResolver::new(FixedBase);
        assert_eq!(
            resolver.resolve_subject_uri(doc.root_element()),
            "http://data.ox.ac.uk/id/course/ A B&C "
        );
    }

    #[test]
    fn test_non_course_is_delegated_unchanged() {
        let xml = r#"<presentation xmlns="http://xcri.org/profiles/1.2/catalog"
            xmlns:dc="http://purl.org/dc/elements/1.1/"
            xmlns:daisy="http://www.oucs.ox.ac.uk">
            <dc:identifier daisy:type="assessmentUnitCode">CS101</dc:identifier>
        </presentation>"#;
        let doc = Document::parse(xml).unwrap();
        let resolver = DaisySubjectResolver::new(FixedBase);
        assert_eq!(
            resolver.resolve_subject_uri(doc.root_element()),
            FixedBase.resolve_subject_uri(doc.root_element())
        );
        assert!(!resolver.missing_identifier(doc.root_element()));
    }

    #[test]
    fn test_course_outside_xcri_namespace_is_delegated() {
        let xml = r#"<course><identifier>CS101</identifier></course>"#;
        let doc = Document::parse(xml).unwrap();
        let resolver = DaisySubjectResolver::new(FixedBase);
        assert_eq!(resolver.resolve_subject_uri(doc.root_element()), "urn:base:course");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let xml = course_doc(
            r#"<dc:identifier daisy:type="assessmentUnitCode">CS101</dc:identifier>"#,
        );
        let doc = Document::parse(&xml).unwrap();
        let resolver = DaisySubjectResolver::<BaseSubjectResolver>::default();
        let first = resolver.resolve_subject_uri(doc.root_element());
        let second = resolver.resolve_subject_uri(doc.root_element());
        assert_eq!(first, second);
    }
}
