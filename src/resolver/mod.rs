//! Subject URI resolvers.
//!
//! A resolver decides the `rdf:about` value for an XCRI element. The base
//! resolver covers every element type; profile resolvers override it for the
//! elements they care about and hand everything else back to the base.

mod base;
mod daisy;
mod index;

use roxmltree::Node;

pub use self::base::BaseSubjectResolver;
pub use self::daisy::DaisySubjectResolver;
pub use self::index::DocumentIndex;

/// Computes the subject URI of an element.
pub trait SubjectResolver {
    /// Returns the `rdf:about` value for `node`. Never fails.
    fn resolve_subject_uri(&self, node: Node<'_, '_>) -> String;

    /// Same as [`SubjectResolver::resolve_subject_uri`], reusing positions
    /// already computed for the document.
    fn resolve_indexed(&self, node: Node<'_, '_>, _index: &DocumentIndex<'_, '_>) -> String {
        self.resolve_subject_uri(node)
    }

    /// Whether the URI for `node` was built without the identifier it needs.
    fn missing_identifier(&self, _node: Node<'_, '_>) -> bool {
        false
    }
}

impl<R: SubjectResolver + ?Sized> SubjectResolver for Box<R> {
    fn resolve_subject_uri(&self, node: Node<'_, '_>) -> String {
        (**self).resolve_subject_uri(node)
    }

    fn resolve_indexed(&self, node: Node<'_, '_>, index: &DocumentIndex<'_, '_>) -> String {
        (**self).resolve_indexed(node, index)
    }

    fn missing_identifier(&self, node: Node<'_, '_>) -> bool {
        (**self).missing_identifier(node)
    }
}

/// XPath-style string value: all descendant text, concatenated, untrimmed.
pub(crate) fn string_value(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
