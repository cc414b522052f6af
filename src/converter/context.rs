use crate::resolver::{DocumentIndex, SubjectResolver};
use crate::{ConvertOptions, Error, Result};
use roxmltree::{Document, Node};

/// Context passed through conversion for shared mutable state.
pub struct ConversionContext<'a, 'input> {
    resolver: &'a dyn SubjectResolver,
    index: DocumentIndex<'a, 'input>,
    options: &'a ConvertOptions,
    missing_identifiers: Vec<String>,
}

impl<'a, 'input> ConversionContext<'a, 'input> {
    pub fn new(
        resolver: &'a dyn SubjectResolver,
        options: &'a ConvertOptions,
        document: &'a Document<'input>,
    ) -> Self {
        Self {
            resolver,
            index: DocumentIndex::new(document),
            options,
            missing_identifiers: Vec::new(),
        }
    }

    /// Computes the subject URI of `node`, remembering degraded resolutions.
    pub fn resolve_subject(&mut self, node: Node<'_, '_>) -> String {
        let about = self.resolver.resolve_indexed(node, &self.index);
        if self.resolver.missing_identifier(node) {
            self.missing_identifiers.push(format!(
                "{} at byte {}",
                node.tag_name().name(),
                node.range().start
            ));
        }
        log::debug!("{} -> {}", node.tag_name().name(), about);
        about
    }

    pub fn take_missing_identifiers(&mut self) -> Vec<String> {
        std::mem::take(&mut self.missing_identifiers)
    }

    /// Fails in strict mode when any subject was resolved without its identifier.
    pub fn finish(&mut self) -> Result<()> {
        let missing = self.take_missing_identifiers();
        if missing.is_empty() {
            return Ok(());
        }
        if self.options.strict_identifiers {
            return Err(Error::MissingIdentifier(missing.join(", ")));
        }
        log::debug!(
            "{} subject(s) resolved without an identifier",
            missing.len()
        );
        Ok(())
    }
}
