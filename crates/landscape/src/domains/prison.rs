//! Systems used in the running of prisons.

use landscape_core::error::ModelError;

use crate::{
    definition::{Domain, SoftwareSystemDefinition},
    scope::{EntityScope, Registration, RelationshipScope},
};

/// The prison domain: NOMIS and the NOMIS data hub.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prison;

impl Domain for Prison {
    fn name(&self) -> &str {
        "prison"
    }

    fn systems(&self) -> Vec<Box<dyn SoftwareSystemDefinition>> {
        vec![Box::new(Nomis), Box::new(Ndh)]
    }

    fn define_relationships(&self, scope: &mut RelationshipScope<'_>) -> Result<(), ModelError> {
        let nomis = scope.system(Nomis::NAME)?;
        let ndh = scope.system(Ndh::NAME)?;

        scope.uses(ndh, nomis, "extract offender data")
    }
}

/// National Offender Management Information System.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nomis;

impl Nomis {
    pub const NAME: &'static str = "NOMIS";
}

impl SoftwareSystemDefinition for Nomis {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn define_model_entities(&self, scope: EntityScope<'_>) -> Result<Registration, ModelError> {
        scope.add_software_system(
            Self::NAME,
            "National Offender Management Information System, the case management system for offender data in use in custody",
        )
    }
}

/// NOMIS Data Hub.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ndh;

impl Ndh {
    pub const NAME: &'static str = "NDH";
}

impl SoftwareSystemDefinition for Ndh {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn define_model_entities(&self, scope: EntityScope<'_>) -> Result<Registration, ModelError> {
        scope.add_software_system(
            Self::NAME,
            "NOMIS Data Hub, responsible for moving offender data out of NOMIS to other systems",
        )
    }
}
