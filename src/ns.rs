//! XML namespaces and RDF vocabulary used across the converter.

use crate::core::graph::Predicate;

/// XCRI-CAP 1.2 catalog namespace (input)
pub const XCRI: &str = "http://xcri.org/profiles/1.2/catalog";

/// DAISY extension namespace carrying the `type` classification attribute
pub const DAISY: &str = "http://www.oucs.ox.ac.uk";

/// Dublin Core elements namespace
pub const DC: &str = "http://purl.org/dc/elements/1.1/";

/// Metadata for Learning Opportunities namespace (input form, no trailing slash)
pub const MLO: &str = "http://purl.org/net/mlo";

/// XML Schema instance namespace
pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Prefix every DAISY course URI starts with.
pub const COURSE_URI_PREFIX: &str = "http://data.ox.ac.uk/id/course/";

/// Base of document-local subject URIs when no base URI is configured.
pub const DEFAULT_BASE_URI: &str = "urn:xcri:catalog";

/// `daisy:type` value marking the identifier that names a course.
pub const ASSESSMENT_UNIT_CODE: &str = "assessmentUnitCode";

// ── Output vocabulary ────────────────────────────────────────────────

pub mod vocab {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    pub const DCTERMS: &str = "http://purl.org/dc/terms/";
    pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
    pub const MLO: &str = "http://purl.org/net/mlo/";
    pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";
    pub const XCRI: &str = "http://xcri.org/profiles/1.2/";

    /// Prefixes declared on the `rdf:RDF` root, in declaration order.
    pub const PREFIXES: &[(&str, &str)] = &[
        ("rdf", RDF),
        ("dc", DC),
        ("dcterms", DCTERMS),
        ("foaf", FOAF),
        ("mlo", MLO),
        ("skos", SKOS),
        ("xcri", XCRI),
    ];
}

pub mod term {
    use super::vocab;
    use super::Predicate;

    pub const RDF_TYPE: Predicate = Predicate::new("rdf", vocab::RDF, "type");
    pub const DC_IDENTIFIER: Predicate = Predicate::new("dc", vocab::DC, "identifier");
    pub const DCTERMS_TITLE: Predicate = Predicate::new("dcterms", vocab::DCTERMS, "title");
    pub const DCTERMS_DESCRIPTION: Predicate =
        Predicate::new("dcterms", vocab::DCTERMS, "description");
    pub const DCTERMS_SUBJECT: Predicate = Predicate::new("dcterms", vocab::DCTERMS, "subject");
    pub const DCTERMS_PUBLISHER: Predicate =
        Predicate::new("dcterms", vocab::DCTERMS, "publisher");
    pub const FOAF_HOMEPAGE: Predicate = Predicate::new("foaf", vocab::FOAF, "homepage");
    pub const MLO_OFFERS: Predicate = Predicate::new("mlo", vocab::MLO, "offers");
    pub const MLO_SPECIFIES: Predicate = Predicate::new("mlo", vocab::MLO, "specifies");
    pub const SKOS_MEMBER: Predicate = Predicate::new("skos", vocab::SKOS, "member");
    pub const SKOS_NOTATION: Predicate = Predicate::new("skos", vocab::SKOS, "notation");
    pub const XCRI_VENUE: Predicate = Predicate::new("xcri", vocab::XCRI, "venue");
}

// ── Element names ────────────────────────────────────────────────────

pub mod node {
    // XCRI elements
    pub const CATALOG: &str = "catalog";
    pub const PROVIDER: &str = "provider";
    pub const COURSE: &str = "course";
    pub const PRESENTATION: &str = "presentation";
    pub const VENUE: &str = "venue";

    // Dublin Core elements
    pub const IDENTIFIER: &str = "identifier";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const SUBJECT: &str = "subject";

    // MLO elements
    pub const URL: &str = "url";
}

pub mod attr {
    pub const TYPE: &str = "type";
}
