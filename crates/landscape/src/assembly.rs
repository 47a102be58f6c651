//! The model assembly driver.
//!
//! [`Assembly`] runs the definition phases of one or more [`Domain`]s as a
//! strict three-round barrier: every system is registered before any
//! relationship is declared, and every relationship is declared before any
//! view. Each round is a method that consumes the assembly in the previous
//! state, so calling the rounds out of order does not compile:
//!
//! ```text
//! Assembly<Pending>
//!     ↓ define_model_entities
//! Assembly<EntitiesDefined>      (registry of every system)
//!     ↓ define_relationships
//! Assembly<RelationshipsDefined>
//!     ↓ define_views
//! Assembly<ViewsDefined>
//!     ↓ finish
//! Workspace
//! ```
//!
//! Any error aborts the build: the partially populated workspace is dropped
//! together with the assembly and never handed on.
//!
//! # Examples
//!
//! ```
//! use landscape::{assembly::Assembly, domains::Prison, workspace::Workspace};
//!
//! let workspace = Assembly::new(Workspace::new("HMPPS", ""))
//!     .with_domain(Box::new(Prison))
//!     .define_model_entities()?
//!     .define_relationships()?
//!     .define_views()?
//!     .finish();
//!
//! assert_eq!(workspace.model().software_systems_count(), 2);
//! # Ok::<(), landscape::ModelError>(())
//! ```

use log::{debug, error, info};

use landscape_core::{
    error::{ModelError, Phase},
    model::SystemHandle,
    workspace::Workspace,
};

use crate::{
    definition::{Domain, SoftwareSystemDefinition},
    registry::Registry,
    scope::{EntityScope, RelationshipScope, ViewScope},
};

/// No round has run yet; domains can still be added.
#[derive(Debug)]
pub struct Pending;

/// Every system has been registered.
#[derive(Debug)]
pub struct EntitiesDefined {
    registry: Registry,
    handles: Vec<Vec<SystemHandle>>,
}

/// Every relationship has been declared.
#[derive(Debug)]
pub struct RelationshipsDefined {
    registry: Registry,
    handles: Vec<Vec<SystemHandle>>,
}

/// Every view has been declared.
#[derive(Debug)]
pub struct ViewsDefined {
    registry: Registry,
}

/// A domain together with the definitions it supplied.
struct DomainEntry {
    domain: Box<dyn Domain>,
    systems: Vec<Box<dyn SoftwareSystemDefinition>>,
}

/// Drives the three definition rounds over a fixed list of domains.
pub struct Assembly<S> {
    workspace: Workspace,
    domains: Vec<DomainEntry>,
    state: S,
}

impl Assembly<Pending> {
    /// Starts an assembly that will populate `workspace`.
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace,
            domains: Vec::new(),
            state: Pending,
        }
    }

    /// Adds a domain. Its systems are collected once, here.
    pub fn with_domain(mut self, domain: Box<dyn Domain>) -> Self {
        let systems = domain.systems();
        debug!(domain = domain.name(), systems = systems.len(); "Domain added to assembly");
        self.domains.push(DomainEntry { domain, systems });
        self
    }

    /// Adds several domains, in order.
    pub fn with_domains(self, domains: impl IntoIterator<Item = Box<dyn Domain>>) -> Self {
        domains.into_iter().fold(self, Self::with_domain)
    }

    /// Round one: every definition registers its software system.
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelError`] raised by a definition, typically
    /// [`ModelError::DuplicateDefinition`].
    pub fn define_model_entities(mut self) -> Result<Assembly<EntitiesDefined>, ModelError> {
        info!(domains = self.domains.len(); "Defining model entities");

        let mut registry = Registry::new();
        let mut handles = Vec::with_capacity(self.domains.len());

        for entry in &self.domains {
            let domain = entry.domain.name();
            let mut domain_handles = Vec::with_capacity(entry.systems.len());

            for definition in &entry.systems {
                let registration = definition
                    .define_model_entities(EntityScope::new(self.workspace.model_mut()))
                    .inspect_err(|err| report(domain, definition.name(), Phase::ModelEntities, err))?;
                let handle = registration.handle();

                let name = self
                    .workspace
                    .model()
                    .software_system(handle)
                    .map(|system| system.name().to_string())
                    .ok_or_else(|| ModelError::UninitializedReference {
                        name: definition.name().to_string(),
                        phase: Phase::ModelEntities,
                    })
                    .inspect_err(|err| report(domain, definition.name(), Phase::ModelEntities, err))?;
                registry.register(name, handle)?;
                domain_handles.push(handle);
            }

            debug!(domain, systems = domain_handles.len(); "Domain entities defined");
            handles.push(domain_handles);
        }

        info!(systems = registry.len(); "Model entities defined");
        Ok(Assembly {
            workspace: self.workspace,
            domains: self.domains,
            state: EntitiesDefined { registry, handles },
        })
    }
}

impl Assembly<EntitiesDefined> {
    /// Handles of every registered system.
    pub fn registry(&self) -> &Registry {
        &self.state.registry
    }

    /// Round two: every definition declares its relationships, then every
    /// domain declares its cross-system relationships.
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelError`] raised, typically
    /// [`ModelError::UninitializedReference`] for a system no definition registered.
    pub fn define_relationships(mut self) -> Result<Assembly<RelationshipsDefined>, ModelError> {
        info!("Defining relationships");
        let EntitiesDefined { registry, handles } = self.state;

        for (entry, domain_handles) in self.domains.iter().zip(&handles) {
            let domain = entry.domain.name();
            let mut scope = RelationshipScope::new(self.workspace.model_mut(), &registry);

            for (definition, &this) in entry.systems.iter().zip(domain_handles) {
                definition
                    .define_relationships(this, &mut scope)
                    .inspect_err(|err| report(domain, definition.name(), Phase::Relationships, err))?;
            }
            entry
                .domain
                .define_relationships(&mut scope)
                .inspect_err(|err| report(domain, domain, Phase::Relationships, err))?;
        }

        info!(relationships = self.workspace.model().relationships_count(); "Relationships defined");
        Ok(Assembly {
            workspace: self.workspace,
            domains: self.domains,
            state: RelationshipsDefined { registry, handles },
        })
    }
}

impl Assembly<RelationshipsDefined> {
    pub fn registry(&self) -> &Registry {
        &self.state.registry
    }

    /// Round three: every definition declares its views, then every domain
    /// declares its domain-wide views.
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelError`] raised, e.g. [`ModelError::DuplicateView`].
    pub fn define_views(mut self) -> Result<Assembly<ViewsDefined>, ModelError> {
        info!("Defining views");
        let RelationshipsDefined { registry, handles } = self.state;

        for (entry, domain_handles) in self.domains.iter().zip(&handles) {
            let domain = entry.domain.name();
            let (model, views) = self.workspace.views_mut();
            let mut scope = ViewScope::new(model, views, &registry);

            for (definition, &this) in entry.systems.iter().zip(domain_handles) {
                definition
                    .define_views(this, &mut scope)
                    .inspect_err(|err| report(domain, definition.name(), Phase::Views, err))?;
            }
            entry
                .domain
                .define_views(&mut scope)
                .inspect_err(|err| report(domain, domain, Phase::Views, err))?;
        }

        info!(views = self.workspace.views().len(); "Views defined");
        Ok(Assembly {
            workspace: self.workspace,
            domains: self.domains,
            state: ViewsDefined { registry },
        })
    }
}

impl Assembly<ViewsDefined> {
    pub fn registry(&self) -> &Registry {
        &self.state.registry
    }

    /// Hands over the populated workspace.
    pub fn finish(self) -> Workspace {
        self.workspace
    }
}

/// Runs all three rounds over `domains` and returns the populated workspace.
///
/// # Errors
///
/// Returns the first [`ModelError`] raised by any round.
pub fn assemble(
    workspace: Workspace,
    domains: impl IntoIterator<Item = Box<dyn Domain>>,
) -> Result<Workspace, ModelError> {
    Ok(Assembly::new(workspace)
        .with_domains(domains)
        .define_model_entities()?
        .define_relationships()?
        .define_views()?
        .finish())
}

fn report(domain: &str, definition: &str, phase: Phase, err: &ModelError) {
    error!(domain, definition, phase:% = phase, code = err.code(); "{err}");
}
