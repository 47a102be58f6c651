//! Landscape - architecture-as-code for HM Prison and Probation Service systems.
//!
//! Software systems are described by small definitions implementing
//! [`definition::SoftwareSystemDefinition`], grouped into
//! [`definition::Domain`]s, and assembled into a [`workspace::Workspace`] by
//! the three-round [`assembly::Assembly`] driver. The populated workspace is
//! then handed to an external renderer through an [`export::Exporter`].

pub mod assembly;
pub mod config;
pub mod definition;
pub mod domains;
pub mod export;
pub mod registry;
pub mod scope;

mod error;

pub use landscape_core::{identifier, model, view, workspace};

pub use error::LandscapeError;
pub use landscape_core::error::{ModelError, Phase};

use log::{debug, info, trace};

use config::AppConfig;
use definition::Domain;
use workspace::Workspace;

/// Builder for assembling and exporting Landscape workspaces.
///
/// # Examples
///
/// ```rust
/// use landscape::{LandscapeBuilder, config::AppConfig};
///
/// let builder = LandscapeBuilder::new(AppConfig::default());
///
/// // Assemble every configured domain
/// let workspace = builder.build()
///     .expect("Failed to assemble");
///
/// // Hand the workspace over as JSON
/// let json = builder.export_json(&workspace)
///     .expect("Failed to export");
/// assert!(json.contains("NOMIS"));
/// ```
#[derive(Default)]
pub struct LandscapeBuilder {
    config: AppConfig,
}

impl LandscapeBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolve the configured domain names against the catalog.
    ///
    /// An empty selection means every domain in the catalog. When the
    /// configuration asks for a landscape view, a
    /// [`domains::SystemLandscape`] pseudo-domain is appended last.
    ///
    /// # Errors
    ///
    /// Returns [`LandscapeError::UnknownDomain`] for a name not in the catalog.
    pub fn domains(&self) -> Result<Vec<Box<dyn Domain>>, LandscapeError> {
        let mut selected = if self.config.domains().is_empty() {
            domains::all()
        } else {
            self.config
                .domains()
                .iter()
                .map(|name| {
                    domains::by_name(name).ok_or_else(|| LandscapeError::UnknownDomain(name.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        if self.config.views().system_landscape() {
            selected.push(Box::new(domains::SystemLandscape::new(
                "system-landscape",
                format!("All systems in {}", self.config.workspace().name()),
            )));
        }

        Ok(selected)
    }

    /// Assemble the configured domains into a fresh workspace.
    ///
    /// # Errors
    ///
    /// Returns [`LandscapeError::UnknownDomain`] for an unknown domain name and
    /// [`LandscapeError::Model`] for any definition mistake. No partially
    /// populated workspace is returned.
    pub fn build(&self) -> Result<Workspace, LandscapeError> {
        let domains = self.domains()?;
        info!(domains = domains.len(); "Assembling workspace");

        self.assemble(domains)
    }

    /// Assemble an explicit list of domains into a fresh workspace.
    ///
    /// # Errors
    ///
    /// Returns [`LandscapeError::Model`] for any definition mistake.
    pub fn assemble(
        &self,
        domains: impl IntoIterator<Item = Box<dyn Domain>>,
    ) -> Result<Workspace, LandscapeError> {
        let workspace_config = self.config.workspace();
        let workspace = Workspace::new(workspace_config.name(), workspace_config.description());

        let workspace = assembly::assemble(workspace, domains)?;

        debug!(
            systems = workspace.model().software_systems_count(),
            relationships = workspace.model().relationships_count(),
            views = workspace.views().len();
            "Workspace assembled"
        );
        trace!(workspace:?; "Assembled workspace");

        Ok(workspace)
    }

    /// Serialize a workspace to the JSON hand-off document.
    ///
    /// # Errors
    ///
    /// Returns [`LandscapeError::Export`] if serialization fails.
    pub fn export_json(&self, workspace: &Workspace) -> Result<String, LandscapeError> {
        let json = export::json::to_string(workspace, self.config.export().pretty())?;
        info!(bytes = json.len(); "Workspace exported");
        Ok(json)
    }
}
