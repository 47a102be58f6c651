//! Systems used in probation.

use landscape_core::error::ModelError;

use crate::{
    definition::{Domain, SoftwareSystemDefinition},
    scope::{EntityScope, Registration},
};

/// The probation domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Probation;

impl Domain for Probation {
    fn name(&self) -> &str {
        "probation"
    }

    fn systems(&self) -> Vec<Box<dyn SoftwareSystemDefinition>> {
        vec![Box::new(Equip)]
    }
}

/// EQuiP, the business process repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct Equip;

impl Equip {
    pub const NAME: &'static str = "EQuiP";
}

impl SoftwareSystemDefinition for Equip {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn define_model_entities(&self, scope: EntityScope<'_>) -> Result<Registration, ModelError> {
        scope.add_software_system(
            Self::NAME,
            "Central repository for all step-by-step business processes (in probation?)",
        )
    }
}
