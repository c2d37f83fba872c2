//! Keyed node collections.
//!
//! A [`Tree`] maps node ids to [`NodeRef`]s. Despite the name it is not a
//! hierarchy: relationships between nodes may fan in or form cycles. Each tree
//! owns its own storage.
//!
//! Entries keep insertion order so that rendering the same tree twice produces
//! the same output. Nothing in the renderer depends on that order.

use indexmap::IndexMap;
use log::trace;

use crate::{ModelError, node::NodeRef};

/// A collection of nodes keyed by id.
#[derive(Debug, Default, Clone)]
pub struct Tree {
    nodes: IndexMap<String, NodeRef>,
}

impl Tree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `node` under its current id.
    ///
    /// A node already stored under the same id is replaced.
    pub fn add_node(&mut self, node: NodeRef) {
        let id = node.id();
        trace!(id; "Adding node");
        self.nodes.insert(id, node);
    }

    /// Removes the entry stored under `node`'s id and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotFound`] if no entry has that id.
    pub fn remove_node(&mut self, node: &NodeRef) -> Result<NodeRef, ModelError> {
        let id = node.id();
        self.nodes
            .shift_remove(&id)
            .ok_or(ModelError::NotFound(id))
    }

    /// Returns the node stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotFound`] if no entry has that id.
    pub fn get_node(&self, id: &str) -> Result<NodeRef, ModelError> {
        self.nodes
            .get(id)
            .cloned()
            .ok_or_else(|| ModelError::NotFound(id.to_string()))
    }

    /// Stores `node` under `id`, inserting or replacing.
    ///
    /// The node's own id is rewritten to `id`, keeping every key equal to the
    /// id of the node stored under it. If this same node was stored under its
    /// previous id, that entry is moved to `id`. An entry holding a different
    /// node under the previous id is left alone.
    pub fn update_node(&mut self, id: &str, node: NodeRef) {
        let previous = node.id();
        if previous != id {
            trace!(from = previous, to = id; "Resyncing node id");
            if self
                .nodes
                .get(&previous)
                .is_some_and(|stored| stored.ptr_eq(&node))
            {
                self.nodes.shift_remove(&previous);
            }
            node.borrow_mut().set_id(id);
        }
        self.nodes.insert(id.to_string(), node);
    }

    /// Returns all nodes in insertion order.
    pub fn nodes(&self) -> Vec<NodeRef> {
        self.nodes.values().cloned().collect()
    }

    /// Iterates over `(id, node)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeRef)> {
        self.nodes.iter().map(|(id, node)| (id.as_str(), node))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
