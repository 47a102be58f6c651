//! JSON export of a workspace.
//!
//! The document mirrors the in-memory types:
//!
//! ```text
//! {
//!   "name": "...", "description": "...",
//!   "model": { "softwareSystems": [...], "relationships": [...] },
//!   "views": { "<key>": { "key", "kind", "description", "elements" } }
//! }
//! ```
//!
//! Systems are referenced by name everywhere.

use std::io::Write;

use log::debug;

use landscape_core::workspace::Workspace;

use super::{Error, Exporter};

/// Writes a workspace as JSON to any [`Write`] sink.
#[derive(Debug)]
pub struct JsonExporter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonExporter<W> {
    /// Creates an exporter writing compact JSON to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    /// Selects indented output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Exporter for JsonExporter<W> {
    fn export_workspace(&mut self, workspace: &Workspace) -> Result<(), Error> {
        let result = if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, workspace)
        } else {
            serde_json::to_writer(&mut self.writer, workspace)
        };
        result.map_err(|err| {
            if err.is_io() {
                Error::Io(err.into())
            } else {
                Error::Serialize(err.to_string())
            }
        })?;
        self.writer.flush().map_err(Error::Io)?;

        debug!(workspace = workspace.name(), pretty = self.pretty; "Workspace exported as JSON");
        Ok(())
    }
}

/// Serializes a workspace to a JSON string.
///
/// # Errors
///
/// Returns [`Error::Serialize`] if serialization fails.
pub fn to_string(workspace: &Workspace, pretty: bool) -> Result<String, Error> {
    let mut exporter = JsonExporter::new(Vec::new()).with_pretty(pretty);
    exporter.export_workspace(workspace)?;
    String::from_utf8(exporter.into_inner()).map_err(|err| Error::Serialize(err.to_string()))
}
