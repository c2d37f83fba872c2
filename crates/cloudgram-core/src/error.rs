//! Error types for the node model.

use thiserror::Error;

/// Errors raised while building nodes or querying a [`Tree`](crate::tree::Tree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    #[error("Provider not set: call `set_provider` before setting node attributes")]
    ProviderNotSet,

    #[error("Node not found: {0}")]
    NotFound(String),
}
