//! Provider families recognized by the node builder.
//!
//! Each [`Provider`] owns one concrete [`Node`](crate::node::Node) variant.
//! Supporting another family means adding a variant here and a node module
//! under [`node`](crate::node); the tree, the builder and the renderer stay
//! untouched.

use std::{fmt, str::FromStr};

use crate::{
    ModelError,
    node::{NodeRef, aws::AwsNode},
};

/// A cloud provider family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Amazon Web Services.
    Aws,
}

impl Provider {
    /// Returns the identifier used to select this provider, e.g. `"aws"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Aws => "aws",
        }
    }

    /// Returns the CSS accent color backends use for this provider's elements.
    pub fn accent_color(&self) -> &'static str {
        match self {
            Self::Aws => "#ED7100",
        }
    }

    /// Allocates a new, empty node of this provider's variant.
    pub fn new_node(&self) -> NodeRef {
        match self {
            Self::Aws => NodeRef::new(AwsNode::new()),
        }
    }
}

impl FromStr for Provider {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aws" => Ok(Self::Aws),
            _ => Err(ModelError::UnsupportedProvider(s.to_string())),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
