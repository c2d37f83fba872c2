//! Staged node construction.
//!
//! [`NodeBuilder`] defers allocating a node until the provider is known, since
//! the concrete [`Node`](crate::node::Node) variant depends on it. Attribute
//! setters are rejected until a provider has been selected.
//!
//! # Aliasing
//!
//! [`NodeBuilder::build`] hands out the builder's own in-progress node rather
//! than a copy. Call [`NodeBuilder::reset`] (or select a provider again) before
//! building the next node; otherwise further setter calls keep mutating the
//! node that was already returned.
//!
//! # Examples
//!
//! ```
//! # use cloudgram_core::{builder::NodeBuilder, ModelError};
//! # fn main() -> Result<(), ModelError> {
//! let mut builder = NodeBuilder::new();
//! builder
//!     .set_provider("aws")?
//!     .set_name("EC2 1")?
//!     .set_id("aws_ec2_1")?
//!     .set_type("ec2")?;
//! let node = builder.build()?;
//! builder.reset();
//!
//! assert_eq!(node.id(), "aws_ec2_1");
//! # Ok(())
//! # }
//! ```

use log::{debug, trace};

use crate::{ModelError, node::NodeRef, provider::Provider};

/// Observable state of a [`NodeBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// No provider selected; attribute setters fail.
    Empty,
    /// A provider is selected and a node is in progress.
    ProviderSet,
    /// `build` has returned the in-progress node. Setters still apply to it.
    Built,
}

/// Builder for provider-specific nodes.
#[derive(Debug, Default)]
pub struct NodeBuilder {
    provider: Option<Provider>,
    node: Option<NodeRef>,
    built: bool,
}

impl NodeBuilder {
    /// Creates a builder in the [`BuilderState::Empty`] state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BuilderState {
        match (&self.node, self.built) {
            (None, _) => BuilderState::Empty,
            (Some(_), false) => BuilderState::ProviderSet,
            (Some(_), true) => BuilderState::Built,
        }
    }

    /// The selected provider, if any.
    pub fn provider(&self) -> Option<Provider> {
        self.provider
    }

    /// Selects the provider family and starts a fresh node of its variant.
    ///
    /// Any in-progress node is released without being modified.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnsupportedProvider`] for an unknown provider. The
    /// builder is left exactly as it was.
    pub fn set_provider(&mut self, provider: &str) -> Result<&mut Self, ModelError> {
        let provider: Provider = provider.parse()?;
        debug!(provider:% = provider; "Starting new node");

        self.node = Some(provider.new_node());
        self.provider = Some(provider);
        self.built = false;
        Ok(self)
    }

    pub fn set_name(&mut self, name: &str) -> Result<&mut Self, ModelError> {
        self.in_progress()?.borrow_mut().set_name(name);
        Ok(self)
    }

    pub fn set_id(&mut self, id: &str) -> Result<&mut Self, ModelError> {
        self.in_progress()?.borrow_mut().set_id(id);
        Ok(self)
    }

    pub fn set_type(&mut self, resource_type: &str) -> Result<&mut Self, ModelError> {
        self.in_progress()?.borrow_mut().set_type(resource_type);
        Ok(self)
    }

    pub fn set_description(&mut self, description: &str) -> Result<&mut Self, ModelError> {
        self.in_progress()?.borrow_mut().set_description(description);
        Ok(self)
    }

    pub fn add_relationship(&mut self, target: &str) -> Result<&mut Self, ModelError> {
        self.in_progress()?.borrow_mut().add_relationship(target);
        Ok(self)
    }

    /// Returns the in-progress node.
    ///
    /// The returned handle aliases the node the builder keeps working on.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ProviderNotSet`] if no provider was selected.
    pub fn build(&mut self) -> Result<NodeRef, ModelError> {
        let node = self.in_progress()?.clone();
        trace!(id = node.id(); "Node built");
        self.built = true;
        Ok(node)
    }

    /// Drops the provider and the in-progress node.
    pub fn reset(&mut self) {
        self.provider = None;
        self.node = None;
        self.built = false;
    }

    fn in_progress(&self) -> Result<&NodeRef, ModelError> {
        self.node.as_ref().ok_or(ModelError::ProviderNotSet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    /// Applies one of the attribute setters selected by `op`.
    fn apply_setter(
        builder: &mut NodeBuilder,
        op: u8,
        value: &str,
    ) -> Result<(), ModelError> {
        let result = match op % 5 {
            0 => builder.set_name(value),
            1 => builder.set_id(value),
            2 => builder.set_type(value),
            3 => builder.set_description(value),
            _ => builder.add_relationship(value),
        };
        result.map(|_| ())
    }

    #[test]
    fn test_new_builder_is_empty() {
        let builder = NodeBuilder::new();
        assert_eq!(builder.state(), BuilderState::Empty);
        assert_eq!(builder.provider(), None);
    }

    #[test]
    fn test_build_without_provider_fails() {
        let mut builder = NodeBuilder::new();
        assert_eq!(builder.build().unwrap_err(), ModelError::ProviderNotSet);
    }

    #[test]
    fn test_build_configured_node() {
        let mut builder = NodeBuilder::new();
        builder
            .set_provider("aws")
            .and_then(|b| b.set_name("EC2 2"))
            .and_then(|b| b.set_id("aws_ec2_2"))
            .and_then(|b| b.set_type("ec2"))
            .and_then(|b| b.set_description("worker"))
            .and_then(|b| b.add_relationship("aws_ec2_1"))
            .unwrap();
        assert_eq!(builder.state(), BuilderState::ProviderSet);

        let node = builder.build().unwrap();
        assert_eq!(builder.state(), BuilderState::Built);

        let node = node.borrow();
        assert_eq!(node.provider(), Provider::Aws);
        assert_eq!(node.name(), "EC2 2");
        assert_eq!(node.id(), "aws_ec2_2");
        assert_eq!(node.resource_type(), "ec2");
        assert_eq!(node.description(), Some("worker"));
        assert_eq!(node.relationships(), ["aws_ec2_1"]);
    }

    #[test]
    fn test_unsupported_provider_leaves_builder_untouched() {
        let mut builder = NodeBuilder::new();
        builder.set_provider("aws").unwrap().set_id("kept").unwrap();
        let built = builder.build().unwrap();

        let err = builder.set_provider("unknown").unwrap_err();
        assert_eq!(err, ModelError::UnsupportedProvider("unknown".to_string()));

        assert_eq!(builder.state(), BuilderState::Built);
        assert_eq!(builder.provider(), Some(Provider::Aws));
        assert!(builder.build().unwrap().ptr_eq(&built));
        assert_eq!(built.id(), "kept");
    }

    #[test]
    fn test_unsupported_provider_on_empty_builder() {
        let mut builder = NodeBuilder::new();
        assert!(builder.set_provider("azure").is_err());
        assert_eq!(builder.state(), BuilderState::Empty);
    }

    #[test]
    fn test_build_aliases_in_progress_node() {
        let mut builder = NodeBuilder::new();
        builder.set_provider("aws").unwrap().set_name("first").unwrap();
        let first = builder.build().unwrap();

        // No reset: the setter reaches the node that was already returned
        builder.set_name("second").unwrap();

        assert_eq!(first.borrow().name(), "second");
        assert!(first.ptr_eq(&builder.build().unwrap()));
    }

    #[test]
    fn test_reset_detaches_built_node() {
        let mut builder = NodeBuilder::new();
        builder.set_provider("aws").unwrap().set_name("first").unwrap();
        let first = builder.build().unwrap();

        builder.reset();
        assert_eq!(builder.state(), BuilderState::Empty);
        assert_eq!(
            builder.set_name("second").unwrap_err(),
            ModelError::ProviderNotSet
        );

        builder.set_provider("aws").unwrap().set_name("second").unwrap();
        let second = builder.build().unwrap();

        assert!(!first.ptr_eq(&second));
        assert_eq!(first.borrow().name(), "first");
    }

    #[test]
    fn test_set_provider_again_discards_in_progress_node() {
        let mut builder = NodeBuilder::new();
        builder.set_provider("aws").unwrap().set_id("one").unwrap();
        let first = builder.build().unwrap();

        builder.set_provider("aws").unwrap();
        assert_eq!(builder.state(), BuilderState::ProviderSet);
        builder.set_id("two").unwrap();

        assert_eq!(first.id(), "one");
        assert_eq!(builder.build().unwrap().id(), "two");
    }

    proptest! {
        #[test]
        fn prop_setters_before_provider_fail(
            calls in prop::collection::vec((any::<u8>(), "[a-z0-9_]{0,8}"), 0..16)
        ) {
            let mut builder = NodeBuilder::new();
            for (op, value) in &calls {
                prop_assert_eq!(
                    apply_setter(&mut builder, *op, value),
                    Err(ModelError::ProviderNotSet)
                );
            }
            prop_assert_eq!(builder.state(), BuilderState::Empty);
        }

        #[test]
        fn prop_unknown_provider_is_rejected(provider in "[a-z]{1,8}") {
            prop_assume!(provider != "aws");

            let mut builder = NodeBuilder::new();
            builder.set_provider("aws").unwrap().set_id("n1").unwrap();

            prop_assert_eq!(
                builder.set_provider(&provider).map(|_| ()),
                Err(ModelError::UnsupportedProvider(provider.clone()))
            );
            prop_assert_eq!(builder.build().unwrap().id(), "n1");
        }
    }
}
