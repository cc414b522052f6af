//! Converter modules for XCRI to RDF transformation.

mod context;
mod entity;

use crate::core::graph::{Object, RdfDocument};
use crate::ns::term;
use crate::render::{NTriplesRenderer, RdfXmlRenderer, Renderer};
use crate::resolver::{BaseSubjectResolver, DaisySubjectResolver, SubjectResolver};
use crate::{ConvertOptions, Error, OutputFormat, Profile, Result};
use roxmltree::{Document, Node};
use std::path::Path;

pub use self::context::ConversionContext;
pub use self::entity::{EntityConverter, EntityKind};

/// Main converter struct that orchestrates XCRI to RDF conversion.
pub struct Daisy2Rdf {
    options: ConvertOptions,
    resolver: Box<dyn SubjectResolver + Send + Sync>,
}

/// Where an element sits relative to the entities already emitted.
#[derive(Debug, Clone, Copy, Default)]
struct Lineage {
    parent: Option<(EntityKind, usize)>,
    catalog: Option<usize>,
    via_venue: bool,
}

impl Daisy2Rdf {
    /// Creates a new converter with the resolver selected by `options.profile`.
    pub fn new(options: ConvertOptions) -> Self {
        let base = BaseSubjectResolver::new(options.base_uri.clone());
        let resolver: Box<dyn SubjectResolver + Send + Sync> = match options.profile {
            Profile::Daisy => Box::new(DaisySubjectResolver::new(base)),
            Profile::Base => Box::new(base),
        };
        Self { options, resolver }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(ConvertOptions::default())
    }

    /// Creates a converter with a caller-supplied resolver; `options.profile`
    /// and `options.base_uri` are ignored.
    pub fn with_resolver(
        options: ConvertOptions,
        resolver: Box<dyn SubjectResolver + Send + Sync>,
    ) -> Self {
        Self { options, resolver }
    }

    /// Converts an XCRI file to RDF.
    ///
    /// # Arguments
    /// * `path` - Path to the XCRI catalog
    ///
    /// # Returns
    /// The serialized RDF in the configured output format.
    pub fn convert<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let xml = std::fs::read_to_string(path.as_ref())?;
        self.convert_str(&xml)
    }

    /// Converts XCRI XML text to RDF.
    pub fn convert_str(&self, xml: &str) -> Result<String> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let document = Document::parse_with_options(xml, options)?;
        let graph = self.extract(&document)?;

        match self.options.output_format {
            OutputFormat::RdfXml => RdfXmlRenderer.render(&graph),
            OutputFormat::NTriples => NTriplesRenderer.render(&graph),
        }
    }

    /// Builds the RDF graph for a parsed XCRI document.
    pub fn extract(&self, document: &Document<'_>) -> Result<RdfDocument> {
        let mut context = ConversionContext::new(self.resolver.as_ref(), &self.options, document);
        let mut output = RdfDocument::default();

        Self::extract_node(
            document.root_element(),
            &mut context,
            &mut output,
            Lineage::default(),
        );
        context.finish()?;

        if output.descriptions.is_empty() {
            return Err(Error::Conversion(format!(
                "no XCRI entities found under <{}>",
                document.root_element().tag_name().name()
            )));
        }

        Ok(output)
    }

    fn extract_node(
        node: Node<'_, '_>,
        context: &mut ConversionContext<'_, '_>,
        output: &mut RdfDocument,
        lineage: Lineage,
    ) {
        let Some(kind) = EntityKind::of(node) else {
            // Wrappers such as xcri:venue are transparent; only their flag carries down.
            let inner = Lineage {
                via_venue: node.has_tag_name((crate::ns::XCRI, crate::ns::node::VENUE)),
                ..lineage
            };
            for child in node.children().filter(|c| c.is_element()) {
                Self::extract_node(child, context, output, inner);
            }
            return;
        };

        let about = context.resolve_subject(node);
        let index = output.push(EntityConverter::convert(node, kind, about.clone()));

        let mut parent_index = None;
        if let Some((parent_kind, idx)) = lineage.parent {
            if let Some(predicate) = parent_kind.link_to(kind, lineage.via_venue) {
                output.descriptions[idx].add(predicate, Object::Resource(about.clone()));
                parent_index = Some(idx);
            }
        }

        // Courses offered by a provider are still members of the enclosing catalog.
        if kind == EntityKind::Course {
            if let Some(catalog) = lineage.catalog.filter(|c| Some(*c) != parent_index) {
                output.descriptions[catalog].add(term::SKOS_MEMBER, Object::Resource(about));
            }
        }

        let inner = Lineage {
            parent: Some((kind, index)),
            catalog: if kind == EntityKind::Catalog {
                Some(index)
            } else {
                lineage.catalog
            },
            via_venue: false,
        };
        for child in node.children().filter(|c| c.is_element()) {
            Self::extract_node(child, context, output, inner);
        }
    }
}
