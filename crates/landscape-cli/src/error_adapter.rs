//! Error adapter for converting LandscapeError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use landscape::LandscapeError;

/// Adapter rendering a [`LandscapeError`] with its code and help text.
pub struct ErrorAdapter<'a>(pub &'a LandscapeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.0.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.0
            .help()
            .map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Render an error as a miette report string.
pub fn render(err: &LandscapeError) -> String {
    let reporter = miette::GraphicalReportHandler::new();
    let mut writer = String::new();
    if reporter
        .render_report(&mut writer, &ErrorAdapter(err))
        .is_err()
    {
        // Fall back to the plain message if the report cannot be drawn.
        writer = err.to_string();
    }
    writer
}

#[cfg(test)]
mod tests {
    use landscape::{ModelError, Phase};

    use super::*;

    #[test]
    fn test_model_error_code_and_help() {
        let err = LandscapeError::from(ModelError::DuplicateDefinition {
            name: "NOMIS".to_string(),
        });
        let adapter = ErrorAdapter(&err);

        assert_eq!(
            adapter.code().map(|c| c.to_string()).as_deref(),
            Some("landscape::duplicate_definition")
        );
        assert_eq!(
            adapter.help().map(|h| h.to_string()).as_deref(),
            Some("each software system must be registered by exactly one definition")
        );
        assert_eq!(
            adapter.to_string(),
            "software system `NOMIS` is defined more than once"
        );
    }

    #[test]
    fn test_io_error_has_no_help() {
        let err = LandscapeError::Io(std::io::Error::other("boom"));
        let adapter = ErrorAdapter(&err);

        assert_eq!(
            adapter.code().map(|c| c.to_string()).as_deref(),
            Some("landscape::io")
        );
        assert!(adapter.help().is_none());
    }

    #[test]
    fn test_render_mentions_system_and_phase() {
        let err = LandscapeError::from(ModelError::UninitializedReference {
            name: "NDH".to_string(),
            phase: Phase::Relationships,
        });

        let report = render(&err);
        assert!(report.contains("NDH"));
        assert!(report.contains("relationships"));
        assert!(report.contains("landscape::uninitialized_reference"));
    }
}
