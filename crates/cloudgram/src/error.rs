//! Error types for Cloudgram operations.
//!
//! This module provides the main error type [`CloudgramError`] which wraps
//! the error conditions that can occur while building and rendering diagrams.

use std::io;

use thiserror::Error;

use cloudgram_core::ModelError;

use crate::backend;

/// The main error type for Cloudgram operations.
#[derive(Debug, Error)]
pub enum CloudgramError {
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A relationship points at an id with no node in the rendered tree.
    #[error("Node `{node}` has a relationship to missing node `{target}`")]
    MissingNode { node: String, target: String },

    #[error("Backend error: {0}")]
    Backend(#[from] backend::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
