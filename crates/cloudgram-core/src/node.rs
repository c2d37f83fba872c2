//! Infrastructure nodes.
//!
//! This module provides the [`Node`] trait, the capability set shared by every
//! provider variant, and [`NodeRef`], the shared handle through which nodes are
//! built, stored in a [`Tree`](crate::tree::Tree) and rendered.
//!
//! # Overview
//!
//! - [`Node`] - Identity, typed attributes, relationships and element lookup.
//! - [`NodeRef`] - Reference-counted, interior-mutable handle to a `dyn Node`.
//! - [`aws::AwsNode`] - The Amazon Web Services variant.

pub mod aws;

use std::{
    cell::{Ref, RefCell, RefMut},
    fmt,
    rc::Rc,
};

use crate::{element::Element, provider::Provider};

/// The capability set of an infrastructure node.
///
/// Every provider variant implements each method explicitly. Relationships are
/// plain target ids; they are only checked against existing nodes when the
/// diagram is rendered.
pub trait Node: fmt::Debug {
    /// The provider family this variant belongs to.
    fn provider(&self) -> Provider;

    /// Sets the display label.
    fn set_name(&mut self, name: &str);

    /// Sets the identifier used as the node's key in a tree.
    fn set_id(&mut self, id: &str);

    /// Sets the provider-specific resource type, e.g. `"ec2"`.
    fn set_type(&mut self, resource_type: &str);

    /// Sets the free-form description. Not used for rendering.
    fn set_description(&mut self, description: &str);

    /// Appends a directed relationship to the node with id `target`.
    ///
    /// Duplicates and self references are kept as given.
    fn add_relationship(&mut self, target: &str);

    fn name(&self) -> &str;

    fn id(&self) -> &str;

    fn resource_type(&self) -> &str;

    fn description(&self) -> Option<&str>;

    /// Relationship target ids in insertion order.
    fn relationships(&self) -> &[String];

    /// Returns the element depicting this node's resource type.
    ///
    /// An unsupported resource type yields `None`: the node is quietly left out
    /// of the diagram instead of failing the render.
    fn element(&self) -> Option<Element>;

    /// Returns every attribute to its initial empty value.
    fn reset(&mut self);
}

/// Shared handle to a node.
///
/// Cloning a `NodeRef` does not copy the node; all clones observe the same
/// attributes. Use [`NodeRef::ptr_eq`] to check whether two handles alias.
#[derive(Debug, Clone)]
pub struct NodeRef(Rc<RefCell<dyn Node>>);

impl NodeRef {
    /// Wraps a node in a new shared handle.
    pub fn new<N: Node + 'static>(node: N) -> Self {
        Self(Rc::new(RefCell::new(node)))
    }

    /// Immutably borrows the node.
    ///
    /// # Panics
    ///
    /// Panics if the node is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, dyn Node> {
        self.0.borrow()
    }

    /// Mutably borrows the node.
    ///
    /// # Panics
    ///
    /// Panics if the node is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, dyn Node> {
        self.0.borrow_mut()
    }

    /// Returns an owned copy of the node's id.
    pub fn id(&self) -> String {
        self.borrow().id().to_string()
    }

    /// Returns `true` if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
