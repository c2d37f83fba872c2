//! Cloudgram Core Types and Definitions
//!
//! This crate provides the in-memory model behind Cloudgram infrastructure
//! diagrams. It includes:
//!
//! - **Nodes**: The [`node::Node`] capability set and its provider variants
//! - **Providers**: Recognized provider families ([`provider::Provider`])
//! - **Elements**: Backend-agnostic descriptions of renderable resources ([`element::Element`])
//! - **Builder**: Staged node construction ([`builder::NodeBuilder`])
//! - **Tree**: A keyed collection of nodes ([`tree::Tree`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])

pub mod builder;
pub mod color;
pub mod element;
pub mod node;
pub mod provider;
pub mod tree;

mod error;

pub use error::ModelError;
