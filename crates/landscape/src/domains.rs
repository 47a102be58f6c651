//! The catalog of described domains.
//!
//! Each submodule holds the system definitions of one domain. The catalog
//! functions give the CLI and the builder a way to pick domains by name
//! without registering anything implicitly.

mod prison;
mod probation;

pub use prison::{Ndh, Nomis, Prison};
pub use probation::{Equip, Probation};

use landscape_core::error::ModelError;

use crate::{
    definition::{Domain, SoftwareSystemDefinition},
    scope::ViewScope,
};

/// Names of every domain in the catalog, in assembly order.
pub const DOMAIN_NAMES: [&str; 2] = ["prison", "probation"];

/// Returns the domain registered under `name`.
pub fn by_name(name: &str) -> Option<Box<dyn Domain>> {
    match name {
        "prison" => Some(Box::new(Prison)),
        "probation" => Some(Box::new(Probation)),
        _ => None,
    }
}

/// Returns every domain in the catalog, in assembly order.
pub fn all() -> Vec<Box<dyn Domain>> {
    DOMAIN_NAMES.iter().filter_map(|name| by_name(name)).collect()
}

/// A domain without systems that adds one landscape view over everything
/// the other domains defined.
///
/// Add it last so its view sees the whole model.
#[derive(Debug, Clone)]
pub struct SystemLandscape {
    key: String,
    description: String,
}

impl SystemLandscape {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

impl Domain for SystemLandscape {
    fn name(&self) -> &str {
        "system-landscape"
    }

    fn systems(&self) -> Vec<Box<dyn SoftwareSystemDefinition>> {
        Vec::new()
    }

    fn define_views(&self, scope: &mut ViewScope<'_>) -> Result<(), ModelError> {
        scope
            .add_system_landscape_view(&self.key, &self.description)?
            .add_default_elements()?;
        Ok(())
    }
}
