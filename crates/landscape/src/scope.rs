//! Restricted views of the workspace handed to each definition phase.
//!
//! - [`EntityScope`] may register one software system and is consumed doing so.
//! - [`RelationshipScope`] may look systems up and declare relationships.
//! - [`ViewScope`] may look systems up, read the model and register views.

use landscape_core::{
    error::{ModelError, Phase},
    model::{Model, SystemHandle},
    view::{View, ViewSet},
};

use crate::registry::Registry;

/// Proof that a software system was registered through an [`EntityScope`].
///
/// Only [`EntityScope`] can create one, which is how the driver knows a
/// definition registered its system instead of returning some other handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    handle: SystemHandle,
}

impl Registration {
    pub fn handle(&self) -> SystemHandle {
        self.handle
    }
}

/// Scope of the model entities phase.
pub struct EntityScope<'a> {
    model: &'a mut Model,
}

impl<'a> EntityScope<'a> {
    pub(crate) fn new(model: &'a mut Model) -> Self {
        Self { model }
    }

    /// Registers the definition's software system.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateDefinition`] if the name is taken and
    /// [`ModelError::InvalidName`] if it is blank.
    pub fn add_software_system(
        self,
        name: &str,
        description: &str,
    ) -> Result<Registration, ModelError> {
        self.add_tagged_software_system(name, description, &[])
    }

    /// Registers the definition's software system with extra tags.
    ///
    /// # Errors
    ///
    /// As [`EntityScope::add_software_system`], plus
    /// [`ModelError::InvalidName`] for a blank tag.
    pub fn add_tagged_software_system(
        self,
        name: &str,
        description: &str,
        tags: &[&str],
    ) -> Result<Registration, ModelError> {
        let handle = self.model.add_software_system(name, description)?;
        for tag in tags {
            self.model.add_tag(handle, tag)?;
        }
        Ok(Registration { handle })
    }
}

/// Scope of the relationships phase.
pub struct RelationshipScope<'a> {
    model: &'a mut Model,
    registry: &'a Registry,
}

impl<'a> RelationshipScope<'a> {
    pub(crate) fn new(model: &'a mut Model, registry: &'a Registry) -> Self {
        Self { model, registry }
    }

    /// Looks up a registered system by name.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UninitializedReference`] if no definition
    /// registered a system under that name.
    pub fn system(&self, name: &str) -> Result<SystemHandle, ModelError> {
        self.registry.resolve(name, Phase::Relationships)
    }

    /// Declares that `source` uses `target`.
    ///
    /// # Errors
    ///
    /// See [`Model::uses`].
    pub fn uses(
        &mut self,
        source: SystemHandle,
        target: SystemHandle,
        description: &str,
    ) -> Result<(), ModelError> {
        self.model.uses(source, target, description)
    }

    /// Declares that `source` uses `target` over `technology`.
    ///
    /// # Errors
    ///
    /// See [`Model::uses`].
    pub fn uses_via(
        &mut self,
        source: SystemHandle,
        target: SystemHandle,
        description: &str,
        technology: &str,
    ) -> Result<(), ModelError> {
        self.model.uses_via(source, target, description, technology)
    }

    pub fn model(&self) -> &Model {
        self.model
    }
}

/// Scope of the views phase.
pub struct ViewScope<'a> {
    model: &'a Model,
    views: &'a mut ViewSet,
    registry: &'a Registry,
}

impl<'a> ViewScope<'a> {
    pub(crate) fn new(model: &'a Model, views: &'a mut ViewSet, registry: &'a Registry) -> Self {
        Self {
            model,
            views,
            registry,
        }
    }

    /// Looks up a registered system by name.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UninitializedReference`] if no definition
    /// registered a system under that name.
    pub fn system(&self, name: &str) -> Result<SystemHandle, ModelError> {
        self.registry.resolve(name, Phase::Views)
    }

    pub fn model(&self) -> &Model {
        self.model
    }

    /// Registers a view over the whole landscape.
    ///
    /// # Errors
    ///
    /// See [`ViewSet::add_system_landscape_view`].
    pub fn add_system_landscape_view(
        &mut self,
        key: &str,
        description: &str,
    ) -> Result<ViewBuilder<'_>, ModelError> {
        let view = self.views.add_system_landscape_view(key, description)?;
        Ok(ViewBuilder {
            model: self.model,
            view,
        })
    }

    /// Registers a context view centred on `system`.
    ///
    /// # Errors
    ///
    /// See [`ViewSet::add_system_context_view`].
    pub fn add_system_context_view(
        &mut self,
        system: SystemHandle,
        key: &str,
        description: &str,
    ) -> Result<ViewBuilder<'_>, ModelError> {
        let view = self
            .views
            .add_system_context_view(self.model, system, key, description)?;
        Ok(ViewBuilder {
            model: self.model,
            view,
        })
    }
}

/// A view being populated during the views phase.
pub struct ViewBuilder<'s> {
    model: &'s Model,
    view: &'s mut View,
}

impl ViewBuilder<'_> {
    /// Includes one system.
    ///
    /// # Errors
    ///
    /// See [`View::include`].
    pub fn include(&mut self, system: SystemHandle) -> Result<&mut Self, ModelError> {
        self.view.include(self.model, system)?;
        Ok(self)
    }

    /// Includes every system of the model.
    pub fn include_all(&mut self) -> &mut Self {
        self.view.include_all(self.model);
        self
    }

    /// Includes the elements implied by the view's kind.
    ///
    /// # Errors
    ///
    /// See [`View::add_default_elements`].
    pub fn add_default_elements(&mut self) -> Result<&mut Self, ModelError> {
        self.view.add_default_elements(self.model)?;
        Ok(self)
    }

    pub fn view(&self) -> &View {
        self.view
    }
}
