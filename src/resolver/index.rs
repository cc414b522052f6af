//! Per-document index of element positions.

use roxmltree::{Document, Node, NodeId};
use std::cell::OnceCell;
use std::collections::HashMap;

/// Lazily computed 1-based position of every element among the elements
/// sharing its expanded name, in document order.
pub struct DocumentIndex<'a, 'input> {
    document: &'a Document<'input>,
    positions: OnceCell<HashMap<NodeId, usize>>,
}

impl<'a, 'input> DocumentIndex<'a, 'input> {
    pub fn new(document: &'a Document<'input>) -> Self {
        Self {
            document,
            positions: OnceCell::new(),
        }
    }

    /// Position of `node` among same-named elements; one document walk in total.
    pub fn position(&self, node: Node<'_, '_>) -> usize {
        self.positions
            .get_or_init(|| self.build())
            .get(&node.id())
            .copied()
            .unwrap_or(1)
    }

    fn build(&self) -> HashMap<NodeId, usize> {
        let mut seen: HashMap<(Option<&str>, &str), usize> = HashMap::new();
        let mut positions = HashMap::new();
        for node in self.document.descendants().filter(|n| n.is_element()) {
            let name = node.tag_name();
            let count = seen.entry((name.namespace(), name.name())).or_insert(0);
            *count += 1;
            positions.insert(node.id(), *count);
        }
        positions
    }
}
