//! Renderable element descriptions.
//!
//! An [`Element`] is what a node hands to a rendering backend: which provider
//! service it depicts and the label to show. Backends materialize it into their
//! own opaque handle.

use crate::provider::Provider;

/// A provider service element labelled with a node's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    provider: Provider,
    category: &'static str,
    service: &'static str,
    label: String,
}

impl Element {
    /// Creates a new element.
    ///
    /// # Arguments
    ///
    /// * `provider` - The provider family the service belongs to.
    /// * `category` - The service category, e.g. `"compute"`.
    /// * `service` - The service name shown on the element, e.g. `"EC2"`.
    /// * `label` - The display label, usually the node name.
    pub fn new(
        provider: Provider,
        category: &'static str,
        service: &'static str,
        label: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            category,
            service,
            label: label.into(),
        }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
