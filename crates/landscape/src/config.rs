//! Configuration types for Landscape builds.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources; every field has a default, so an empty document is a
//! valid configuration.
//!
//! # Example
//!
//! ```
//! # use landscape::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.workspace().name(), "HMPPS");
//! assert!(config.domains().is_empty());
//! ```

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Workspace naming.
    #[serde(default)]
    workspace: WorkspaceConfig,

    /// Domains to assemble. Empty means every domain in the catalog.
    #[serde(default)]
    domains: Vec<String>,

    /// Views added on top of those the domains define.
    #[serde(default)]
    views: ViewsConfig,

    /// Export settings.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    pub fn new(
        workspace: WorkspaceConfig,
        domains: Vec<String>,
        views: ViewsConfig,
        export: ExportConfig,
    ) -> Self {
        Self {
            workspace,
            domains,
            views,
            export,
        }
    }

    pub fn workspace(&self) -> &WorkspaceConfig {
        &self.workspace
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn views(&self) -> &ViewsConfig {
        &self.views
    }

    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Replaces the configured domain selection.
    pub fn with_domains(mut self, domains: Vec<String>) -> Self {
        self.domains = domains;
        self
    }
}

/// Name and description of the produced workspace.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    name: String,
    description: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            name: "HMPPS".to_string(),
            description: "Systems of HM Prison and Probation Service".to_string(),
        }
    }
}

impl WorkspaceConfig {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Extra views added after the domains' own views.
///
/// Off by default, so a build holds exactly the views its domains define.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ViewsConfig {
    /// Whether to add a landscape view over every assembled system.
    system_landscape: bool,
}

impl ViewsConfig {
    pub fn new(system_landscape: bool) -> Self {
        Self { system_landscape }
    }

    pub fn system_landscape(&self) -> bool {
        self.system_landscape
    }
}

/// Controls the JSON hand-off document.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ExportConfig {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.workspace().name(), "HMPPS");
        assert!(config.domains().is_empty());
        assert!(!config.views().system_landscape());
        assert!(config.export().pretty());
    }

    #[test]
    fn test_full_document() {
        let config: AppConfig = toml::from_str(
            r#"
            domains = ["probation"]

            [workspace]
            name = "Probation"
            description = "Probation systems only"

            [views]
            system_landscape = true

            [export]
            pretty = false
            "#,
        )
        .unwrap();

        assert_eq!(config.workspace().name(), "Probation");
        assert_eq!(config.workspace().description(), "Probation systems only");
        assert_eq!(config.domains(), &["probation".to_string()]);
        assert!(config.views().system_landscape());
        assert!(!config.export().pretty());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [workspace]
            name = "Custom"
            "#,
        )
        .unwrap();

        assert_eq!(config.workspace().name(), "Custom");
        assert_eq!(
            config.workspace().description(),
            "Systems of HM Prison and Probation Service"
        );
    }

    #[test]
    fn test_domains_must_be_a_list() {
        let result: Result<AppConfig, _> = toml::from_str(r#"domains = "prison""#);
        assert!(result.is_err());
    }
}
