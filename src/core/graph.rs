use regex::Regex;
use std::sync::OnceLock;

/// Whether `iri` starts with a scheme, i.e. is not a relative reference.
pub fn is_absolute_iri(iri: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("scheme pattern is valid"))
        .is_match(iri)
}

/// RDF graph produced by a conversion, grouped by subject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RdfDocument {
    pub descriptions: Vec<Description>,
}

impl RdfDocument {
    pub fn push(&mut self, description: Description) -> usize {
        self.descriptions.push(description);
        self.descriptions.len() - 1
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.descriptions.iter().map(|d| d.about.as_str())
    }
}

/// All statements about one subject (`rdf:about`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub about: String,
    pub properties: Vec<Property>,
}

impl Description {
    pub fn new(about: impl Into<String>) -> Self {
        Self {
            about: about.into(),
            properties: Vec::new(),
        }
    }

    pub fn add(&mut self, predicate: Predicate, object: Object) {
        self.properties.push(Property { predicate, object });
    }

    pub fn objects(&self, predicate: Predicate) -> impl Iterator<Item = &Object> {
        self.properties
            .iter()
            .filter(move |p| p.predicate == predicate)
            .map(|p| &p.object)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub predicate: Predicate,
    pub object: Object,
}

/// A predicate as a qualified name with its namespace IRI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Predicate {
    pub prefix: &'static str,
    pub namespace: &'static str,
    pub local: &'static str,
}

impl Predicate {
    pub const fn new(prefix: &'static str, namespace: &'static str, local: &'static str) -> Self {
        Self {
            prefix,
            namespace,
            local,
        }
    }

    pub fn qname(&self) -> String {
        format!("{}:{}", self.prefix, self.local)
    }

    pub fn iri(&self) -> String {
        format!("{}{}", self.namespace, self.local)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    Resource(String),
    Literal(String),
}
