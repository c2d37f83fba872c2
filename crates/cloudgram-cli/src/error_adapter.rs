//! Error adapter for converting CloudgramError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use cloudgram::{CloudgramError, ModelError};

/// Adapter giving a [`CloudgramError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a CloudgramError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorAdapter").field(self.0).finish()
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ErrorAdapter<'_> {}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CloudgramError::Model(ModelError::UnsupportedProvider(_)) => {
                "cloudgram::unsupported_provider"
            }
            CloudgramError::Model(ModelError::ProviderNotSet) => "cloudgram::provider_not_set",
            CloudgramError::Model(ModelError::NotFound(_)) => "cloudgram::not_found",
            CloudgramError::MissingNode { .. } => "cloudgram::missing_node",
            CloudgramError::Backend(_) => "cloudgram::backend",
            CloudgramError::Config(_) => "cloudgram::config",
            CloudgramError::Io(_) => "cloudgram::io",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CloudgramError::Model(ModelError::UnsupportedProvider(_)) => {
                "the only supported provider is `aws`"
            }
            CloudgramError::Model(ModelError::ProviderNotSet) => {
                "call `set_provider` before setting node attributes"
            }
            CloudgramError::MissingNode { .. } => {
                "add the target node to the tree or drop the relationship"
            }
            CloudgramError::Config(_) => "check the configuration file passed with --config",
            _ => return None,
        };
        Some(Box::new(help))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_node_diagnostic() {
        let err = CloudgramError::MissingNode {
            node: "n3".to_string(),
            target: "n99".to_string(),
        };
        let adapter = ErrorAdapter(&err);

        assert_eq!(
            adapter.code().map(|code| code.to_string()).as_deref(),
            Some("cloudgram::missing_node")
        );
        assert!(adapter.help().is_some());
        assert!(adapter.to_string().contains("n99"));
    }

    #[test]
    fn test_io_error_has_no_help() {
        let err = CloudgramError::Io(std::io::Error::other("boom"));
        assert!(ErrorAdapter(&err).help().is_none());
    }
}
