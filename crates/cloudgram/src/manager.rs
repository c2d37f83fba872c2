//! Two-pass rendering of node trees.
//!
//! [`DiagramManager::render`] first materializes an element for every node,
//! then wires each relationship as a directed connection. Elements must all
//! exist before wiring starts so that a relationship can point at any node in
//! the tree, whatever the order nodes are visited in.

use std::collections::HashMap;

use log::{debug, info, trace, warn};

use cloudgram_core::tree::Tree;

use crate::{
    CloudgramError,
    backend::{Backend, DiagramScope, ElementHandle},
};

/// Renders [`Tree`]s through a [`Backend`].
///
/// # Examples
///
/// ```
/// # use cloudgram::{DiagramManager, backend::memory::RecordingBackend};
/// # use cloudgram::builder::NodeBuilder;
/// # use cloudgram::tree::Tree;
/// # fn main() -> Result<(), cloudgram::CloudgramError> {
/// let mut builder = NodeBuilder::new();
/// builder.set_provider("aws")?.set_id("n1")?.set_name("web")?.set_type("ec2")?;
/// let web = builder.build()?;
/// builder.reset();
///
/// let mut tree = Tree::new();
/// tree.add_node(web);
///
/// let mut manager = DiagramManager::new(RecordingBackend::new());
/// manager.render("example", &tree)?;
/// assert_eq!(manager.backend().last().unwrap().elements().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DiagramManager<B: Backend> {
    backend: B,
    show: bool,
}

impl<B: Backend> DiagramManager<B> {
    /// Creates a manager drawing on `backend`. Interactive display is off.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            show: false,
        }
    }

    /// Sets whether finished diagrams are requested for interactive display.
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Renders `tree` as a diagram called `diagram_name`.
    ///
    /// Nodes whose resource type has no element are left out. A relationship
    /// from or to such a node is skipped, as long as the target id exists.
    ///
    /// # Errors
    ///
    /// Returns [`CloudgramError::MissingNode`] if a relationship targets an id
    /// not present in `tree`, and [`CloudgramError::Backend`] if the backend
    /// fails to open or emit the diagram. The backend is finalized in every
    /// case, but a failed render must not be treated as a valid diagram.
    pub fn render(&mut self, diagram_name: &str, tree: &Tree) -> Result<(), CloudgramError> {
        info!(diagram = diagram_name, nodes = tree.len(); "Rendering diagram");

        let mut scope = DiagramScope::open(&mut self.backend, diagram_name, self.show)?;
        let nodes = tree.nodes();

        // First pass: materialize every element
        let mut elements: HashMap<String, Option<ElementHandle>> =
            HashMap::with_capacity(nodes.len());
        for node in &nodes {
            let node = node.borrow();
            let handle = node
                .element()
                .map(|element| scope.create_element(&element));
            if handle.is_none() {
                debug!(
                    id = node.id(),
                    resource_type = node.resource_type();
                    "Resource type has no element, node left out"
                );
            }
            elements.insert(node.id().to_string(), handle);
        }
        debug!(elements = elements.len(); "Elements materialized");

        // Second pass: wire relationships
        let mut connections = 0usize;
        for node in &nodes {
            let node = node.borrow();
            let relationships = node.relationships();
            if relationships.is_empty() {
                trace!(id = node.id(); "Standalone node");
                continue;
            }

            let source = elements.get(node.id()).copied().flatten();
            for target_id in relationships {
                let target =
                    *elements
                        .get(target_id)
                        .ok_or_else(|| CloudgramError::MissingNode {
                            node: node.id().to_string(),
                            target: target_id.clone(),
                        })?;

                match (source, target) {
                    (Some(source), Some(target)) => {
                        scope.connect(source, target);
                        connections += 1;
                    }
                    _ => warn!(
                        from = node.id(),
                        to = target_id.as_str();
                        "Skipping relationship involving a node without element"
                    ),
                }
            }
        }
        debug!(connections; "Relationships wired");

        scope.close()?;
        info!(diagram = diagram_name; "Diagram rendered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use cloudgram_core::{builder::NodeBuilder, element::Element, node::NodeRef};

    use crate::backend::{self, memory::RecordingBackend};

    fn node(id: &str, resource_type: &str, relationships: &[&str]) -> NodeRef {
        let mut builder = NodeBuilder::new();
        builder
            .set_provider("aws")
            .and_then(|b| b.set_id(id))
            .and_then(|b| b.set_name(id))
            .and_then(|b| b.set_type(resource_type))
            .unwrap();
        for target in relationships {
            builder.add_relationship(target).unwrap();
        }
        builder.build().unwrap()
    }

    fn tree(nodes: impl IntoIterator<Item = NodeRef>) -> Tree {
        let mut tree = Tree::new();
        for node in nodes {
            tree.add_node(node);
        }
        tree
    }

    #[test]
    fn test_single_connection() {
        let tree = tree([node("n1", "ec2", &[]), node("n2", "ec2", &["n1"])]);
        let mut manager = DiagramManager::new(RecordingBackend::new());

        manager.render("pair", &tree).unwrap();

        let diagram = manager.backend().last().unwrap();
        assert_eq!(diagram.name(), "pair");
        assert_eq!(diagram.elements().len(), 2);
        assert_eq!(
            diagram.labelled_connections(),
            [("n2".to_string(), "n1".to_string())]
        );
    }

    #[test]
    fn test_dangling_relationship_fails() {
        let tree = tree([node("n3", "ec2", &["n99"])]);
        let mut manager = DiagramManager::new(RecordingBackend::new());

        let err = manager.render("dangling", &tree).unwrap_err();
        assert!(matches!(
            err,
            CloudgramError::MissingNode { ref node, ref target } if node == "n3" && target == "n99"
        ));

        // The scope still finalized what was built
        let diagram = manager.backend().last().unwrap();
        assert!(diagram.is_finished());
        assert!(diagram.connections().is_empty());
    }

    #[test]
    fn test_standalone_node_is_materialized() {
        let tree = tree([node("solo", "ec2", &[])]);
        let mut manager = DiagramManager::new(RecordingBackend::new());

        manager.render("solo", &tree).unwrap();

        let diagram = manager.backend().last().unwrap();
        assert_eq!(diagram.elements().len(), 1);
        assert_eq!(diagram.elements()[0].label(), "solo");
        assert!(diagram.connections().is_empty());
    }

    #[test]
    fn test_unsupported_type_is_left_out() {
        let tree = tree([node("bucket", "s3", &[]), node("web", "ec2", &["bucket"])]);
        let mut manager = DiagramManager::new(RecordingBackend::new());

        manager.render("partial", &tree).unwrap();

        let diagram = manager.backend().last().unwrap();
        assert_eq!(diagram.elements().len(), 1);
        assert!(diagram.connections().is_empty());
    }

    #[test]
    fn test_self_and_duplicate_relationships() {
        let tree = tree([node("loop", "ec2", &["loop", "loop"])]);
        let mut manager = DiagramManager::new(RecordingBackend::new());

        manager.render("loops", &tree).unwrap();

        let diagram = manager.backend().last().unwrap();
        assert_eq!(diagram.connections().len(), 2);
    }

    #[test]
    fn test_empty_tree_renders_empty_diagram() {
        let mut manager = DiagramManager::new(RecordingBackend::new()).with_show(true);

        manager.render("empty", &Tree::new()).unwrap();

        let diagram = manager.backend().last().unwrap();
        assert!(diagram.show());
        assert!(diagram.elements().is_empty());
    }

    /// Backend whose `finish` always fails.
    #[derive(Default)]
    struct FailingBackend {
        opened: bool,
        finish_calls: usize,
    }

    impl Backend for FailingBackend {
        fn open(&mut self, _name: &str, _show: bool) -> Result<(), backend::Error> {
            self.opened = true;
            Ok(())
        }

        fn create_element(&mut self, _element: &Element) -> ElementHandle {
            ElementHandle::new(0)
        }

        fn connect(&mut self, _source: ElementHandle, _target: ElementHandle) {}

        fn finish(&mut self) -> Result<(), backend::Error> {
            self.finish_calls += 1;
            Err(backend::Error::Render("disk full".to_string()))
        }
    }

    #[test]
    fn test_finish_failure_is_reported_once() {
        let tree = tree([node("n1", "ec2", &[])]);
        let mut manager = DiagramManager::new(FailingBackend::default());

        let err = manager.render("broken", &tree).unwrap_err();
        assert!(matches!(err, CloudgramError::Backend(_)));

        let backend = manager.into_backend();
        assert!(backend.opened);
        assert_eq!(backend.finish_calls, 1);
    }
}
