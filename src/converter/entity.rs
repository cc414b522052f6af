//! Entity converter - maps one XCRI entity element to an RDF description.

use crate::core::graph::{Description, Object, Predicate};
use crate::ns::{self, term, vocab};
use crate::resolver::string_value;
use roxmltree::Node;

/// XCRI elements that become RDF subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Catalog,
    Provider,
    Course,
    Presentation,
}

impl EntityKind {
    pub fn of(node: Node<'_, '_>) -> Option<Self> {
        if !node.is_element() || node.tag_name().namespace() != Some(ns::XCRI) {
            return None;
        }
        match node.tag_name().name() {
            ns::node::CATALOG => Some(Self::Catalog),
            ns::node::PROVIDER => Some(Self::Provider),
            ns::node::COURSE => Some(Self::Course),
            ns::node::PRESENTATION => Some(Self::Presentation),
            _ => None,
        }
    }

    pub fn local_name(self) -> &'static str {
        match self {
            Self::Catalog => ns::node::CATALOG,
            Self::Provider => ns::node::PROVIDER,
            Self::Course => ns::node::COURSE,
            Self::Presentation => ns::node::PRESENTATION,
        }
    }

    pub fn class_iri(self) -> String {
        format!("{}{}", vocab::XCRI, self.local_name())
    }

    /// Predicate linking a parent entity to a child entity, if any.
    ///
    /// `via_venue` is set when the child sits inside the parent's `xcri:venue`.
    pub fn link_to(self, child: EntityKind, via_venue: bool) -> Option<Predicate> {
        match (self, child, via_venue) {
            (Self::Presentation, Self::Provider, true) => Some(term::XCRI_VENUE),
            (_, _, true) => None,
            (Self::Catalog, Self::Provider, false) => Some(term::DCTERMS_PUBLISHER),
            (Self::Catalog, Self::Catalog | Self::Course, false) => Some(term::SKOS_MEMBER),
            (Self::Provider, Self::Course, false) => Some(term::MLO_OFFERS),
            (Self::Course, Self::Presentation, false) => Some(term::MLO_SPECIFIES),
            _ => None,
        }
    }
}

/// Converter for the descriptive children of an entity element.
pub struct EntityConverter;

impl EntityConverter {
    pub fn convert(node: Node<'_, '_>, kind: EntityKind, about: String) -> Description {
        let mut description = Description::new(about);
        description.add(term::RDF_TYPE, Object::Resource(kind.class_iri()));

        for child in node.children().filter(|c| c.is_element()) {
            if let Some((predicate, object)) = Self::convert_property(child) {
                description.add(predicate, object);
            }
        }

        description
    }

    fn convert_property(child: Node<'_, '_>) -> Option<(Predicate, Object)> {
        let name = child.tag_name();
        let text = string_value(child).trim().to_string();
        if text.is_empty() {
            return None;
        }

        let typed = child.attribute((ns::XSI, ns::attr::TYPE)).is_some()
            || child.attribute((ns::DAISY, ns::attr::TYPE)).is_some();

        match (name.namespace(), name.name()) {
            (Some(ns::DC), ns::node::IDENTIFIER) if typed => {
                Some((term::SKOS_NOTATION, Object::Literal(text)))
            }
            (Some(ns::DC), ns::node::IDENTIFIER) => Some((term::DC_IDENTIFIER, Object::Literal(text))),
            (Some(ns::DC), ns::node::TITLE) => Some((term::DCTERMS_TITLE, Object::Literal(text))),
            // Typed descriptions carry XHTML fragments and are left to richer mappings.
            (Some(ns::DC), ns::node::DESCRIPTION) if !typed => {
                Some((term::DCTERMS_DESCRIPTION, Object::Literal(text)))
            }
            (Some(ns::DC), ns::node::SUBJECT) => {
                Some((term::DCTERMS_SUBJECT, Object::Literal(text)))
            }
            (Some(ns::MLO), ns::node::URL) => Some((term::FOAF_HOMEPAGE, Object::Resource(text))),
            _ => None,
        }
    }
}
