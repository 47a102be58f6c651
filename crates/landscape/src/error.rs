//! Error types for Landscape operations.
//!
//! This module provides the main error type [`LandscapeError`] which wraps
//! the conditions that can stop a build: definition mistakes reported by the
//! model, unknown domain names, configuration problems and export failures.

use std::io;

use thiserror::Error;

use landscape_core::error::ModelError;

/// The main error type for Landscape operations.
#[derive(Debug, Error)]
pub enum LandscapeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Unknown domain `{0}`")]
    UnknownDomain(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for LandscapeError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl LandscapeError {
    /// Stable machine-readable code identifying the kind of error.
    pub fn code(&self) -> &'static str {
        match self {
            LandscapeError::Io(_) => "landscape::io",
            LandscapeError::Model(err) => err.code(),
            LandscapeError::UnknownDomain(_) => "landscape::unknown_domain",
            LandscapeError::Config(_) => "landscape::config",
            LandscapeError::Export(_) => "landscape::export",
        }
    }

    /// Suggestion for fixing the error, when there is one.
    pub fn help(&self) -> Option<String> {
        match self {
            LandscapeError::Model(err) => Some(err.help().to_string()),
            LandscapeError::UnknownDomain(_) => Some(format!(
                "known domains are: {}",
                crate::domains::DOMAIN_NAMES.join(", ")
            )),
            _ => None,
        }
    }
}
