//! The software system definition contract.
//!
//! Every described system implements [`SoftwareSystemDefinition`] and every
//! logical grouping of systems implements [`Domain`]. The assembly driver
//! calls the phases of these traits in three rounds:
//!
//! 1. [`SoftwareSystemDefinition::define_model_entities`] for every system,
//! 2. [`SoftwareSystemDefinition::define_relationships`] for every system,
//!    then [`Domain::define_relationships`] for every domain,
//! 3. [`SoftwareSystemDefinition::define_views`] for every system, then
//!    [`Domain::define_views`] for every domain.
//!
//! Each phase receives a scope that only offers what the phase may do, so a
//! relationship definition cannot create systems and a view definition cannot
//! create relationships.
//!
//! # Examples
//!
//! ```
//! use landscape::{
//!     ModelError,
//!     definition::SoftwareSystemDefinition,
//!     model::SystemHandle,
//!     scope::{EntityScope, Registration, RelationshipScope},
//! };
//!
//! struct Oasys;
//!
//! impl SoftwareSystemDefinition for Oasys {
//!     fn name(&self) -> &str {
//!         "OASys"
//!     }
//!
//!     fn define_model_entities(&self, scope: EntityScope<'_>) -> Result<Registration, ModelError> {
//!         scope.add_software_system("OASys", "Offender assessment system")
//!     }
//!
//!     fn define_relationships(
//!         &self,
//!         this: SystemHandle,
//!         scope: &mut RelationshipScope<'_>,
//!     ) -> Result<(), ModelError> {
//!         let delius = scope.system("Delius")?;
//!         scope.uses(this, delius, "reads offender details")
//!     }
//! }
//! ```

use landscape_core::{error::ModelError, model::SystemHandle};

use crate::scope::{EntityScope, Registration, RelationshipScope, ViewScope};

/// Three-phase lifecycle implemented by every described software system.
pub trait SoftwareSystemDefinition {
    /// Name used to identify the definition in logs and errors.
    fn name(&self) -> &str;

    /// Registers exactly one software system.
    ///
    /// The scope is consumed by the registration, so a second system cannot
    /// be added from the same definition.
    fn define_model_entities(&self, scope: EntityScope<'_>) -> Result<Registration, ModelError>;

    /// Declares relationships from `this` system to already registered systems.
    fn define_relationships(
        &self,
        _this: SystemHandle,
        _scope: &mut RelationshipScope<'_>,
    ) -> Result<(), ModelError> {
        Ok(())
    }

    /// Declares views over already registered systems and relationships.
    fn define_views(
        &self,
        _this: SystemHandle,
        _scope: &mut ViewScope<'_>,
    ) -> Result<(), ModelError> {
        Ok(())
    }
}

/// A logical grouping of systems that are defined together.
pub trait Domain {
    /// Name of the domain, e.g. `"prison"`.
    fn name(&self) -> &str;

    /// The fixed set of systems belonging to this domain, in definition order.
    fn systems(&self) -> Vec<Box<dyn SoftwareSystemDefinition>>;

    /// Declares relationships between systems that no single system owns.
    ///
    /// Runs after every system's own relationships.
    fn define_relationships(&self, _scope: &mut RelationshipScope<'_>) -> Result<(), ModelError> {
        Ok(())
    }

    /// Declares domain-wide views. Runs after every system's own views.
    fn define_views(&self, _scope: &mut ViewScope<'_>) -> Result<(), ModelError> {
        Ok(())
    }
}
