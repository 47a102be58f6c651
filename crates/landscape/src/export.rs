//! Export of assembled workspaces.
//!
//! This module provides the [`Exporter`] trait that defines the interface
//! for handing a populated [`Workspace`] to whatever external tool renders
//! it. It is the last stage of a build.
//!
//! # Available Backends
//!
//! - [`json`]: a JSON document via [`json::JsonExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering serialization failures and
//! I/O errors. [`Error`] converts into [`LandscapeError::Export`] at the
//! crate boundary.
//!
//! [`LandscapeError::Export`]: crate::LandscapeError::Export

/// JSON export backend.
pub mod json;

use landscape_core::workspace::Workspace;

/// Abstraction for workspace export backends.
pub trait Exporter {
    /// Exports a populated workspace to the backend's output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if the workspace cannot be converted to
    /// the target format, or [`Error::Io`] if writing the output fails.
    fn export_workspace(&mut self, workspace: &Workspace) -> Result<(), Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A conversion failure described by `message`.
    Serialize(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(msg) => write!(f, "Serialization error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
