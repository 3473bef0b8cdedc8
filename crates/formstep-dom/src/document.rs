//! Document tree and shared handle

use parking_lot::Mutex;
use scraper::{ElementRef, Html};
use std::sync::Arc;

use crate::element::{Element, NodeId};
use crate::error::DomError;
use crate::Result;

/// Elements in document order. Removed elements keep their slot so node ids
/// stay valid, but no query returns them.
#[derive(Debug, Clone, Default)]
pub struct DocumentTree {
    nodes: Vec<Element>,
}

impl DocumentTree {
    pub fn parse(html: &str) -> Self {
        let doc = Html::parse_document(html);
        if !doc.errors.is_empty() {
            tracing::trace!(errors = doc.errors.len(), "Markup parsed with recoveries");
        }

        let mut tree = Self::default();
        tree.collect(doc.root_element(), None);
        tree
    }

    fn collect(&mut self, el: ElementRef<'_>, parent: Option<NodeId>) {
        let node = self.nodes.len();
        self.nodes.push(Element::from_ref(el, parent));
        if let Some(parent) = parent {
            self.nodes[parent].children.push(node);
        }
        for child in el.children().filter_map(ElementRef::wrap) {
            self.collect(child, Some(node));
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|el| !el.removed).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node).filter(|el| !el.removed)
    }

    pub fn element(&self, node: NodeId) -> Result<&Element> {
        self.get(node).ok_or(DomError::UnknownNode(node))
    }

    pub fn element_mut(&mut self, node: NodeId) -> Result<&mut Element> {
        self.nodes
            .get_mut(node)
            .filter(|el| !el.removed)
            .ok_or(DomError::UnknownNode(node))
    }

    fn live(&self) -> impl Iterator<Item = (NodeId, &Element)> + '_ {
        self.nodes.iter().enumerate().filter(|(_, el)| !el.removed)
    }

    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.live()
            .find(|(_, el)| el.id.as_deref() == Some(id))
            .map(|(node, _)| node)
    }

    /// Like [`by_id`](Self::by_id) but reports the missing id
    pub fn require_id(&self, id: &str) -> Result<NodeId> {
        self.by_id(id)
            .ok_or_else(|| DomError::MissingElement(id.to_string()))
    }

    pub fn by_class(&self, class: &str) -> Vec<NodeId> {
        self.live()
            .filter(|(_, el)| el.has_class(class))
            .map(|(node, _)| node)
            .collect()
    }

    pub fn by_name(&self, name: &str) -> Vec<NodeId> {
        self.live()
            .filter(|(_, el)| el.name.as_deref() == Some(name))
            .map(|(node, _)| node)
            .collect()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.get(node)
            .map(|el| {
                el.children
                    .iter()
                    .copied()
                    .filter(|child| self.get(*child).is_some())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Detach an element and its whole subtree
    pub fn remove(&mut self, node: NodeId) -> Result<()> {
        self.element(node)?;

        let mut pending = vec![node];
        while let Some(current) = pending.pop() {
            if let Some(el) = self.nodes.get_mut(current) {
                el.removed = true;
                pending.extend(el.children.iter().copied());
            }
        }
        Ok(())
    }

    pub fn clear_children(&mut self, node: NodeId) -> Result<()> {
        for child in self.children(node) {
            self.remove(child)?;
        }
        self.element_mut(node)?.children.clear();
        Ok(())
    }

    pub fn append_child(&mut self, parent: NodeId, mut element: Element) -> Result<NodeId> {
        self.element(parent)?;

        let node = self.nodes.len();
        element.parent = Some(parent);
        element.children.clear();
        element.removed = false;
        self.nodes.push(element);
        self.element_mut(parent)?.children.push(node);
        Ok(node)
    }
}

/// Shared handle on a parsed page
pub struct Document {
    tree: Arc<Mutex<DocumentTree>>,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self::from_tree(DocumentTree::parse(html))
    }

    pub fn from_tree(tree: DocumentTree) -> Self {
        Self {
            tree: Arc::new(Mutex::new(tree)),
        }
    }

    pub fn with_tree<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&DocumentTree) -> T,
    {
        let tree = self.tree.lock();
        f(&tree)
    }

    pub fn with_tree_mut<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut DocumentTree) -> T,
    {
        let mut tree = self.tree.lock();
        f(&mut tree)
    }
}

impl Clone for Document {
    fn clone(&self) -> Self {
        Self {
            tree: Arc::clone(&self.tree),
        }
    }
}
