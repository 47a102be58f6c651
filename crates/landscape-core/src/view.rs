//! Views: rendering specifications over the model.
//!
//! A [`View`] names a subset of the model's software systems that an
//! external renderer should draw together. Views never create systems or
//! relationships; every element they include must already exist in the
//! [`Model`] they are checked against.

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::{
    error::{ModelError, Phase},
    model::{Model, SystemHandle},
};

/// The scope a view covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "softwareSystem", rename_all = "camelCase")]
pub enum ViewKind {
    /// Every software system in the landscape.
    SystemLandscape,
    /// A single system and the systems it interacts with.
    SystemContext(SystemHandle),
}

/// A rendering specification referencing existing software systems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    key: String,
    kind: ViewKind,
    description: String,
    elements: Vec<SystemHandle>,
}

impl View {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Included systems, in the order they were added.
    pub fn elements(&self) -> &[SystemHandle] {
        &self.elements
    }

    /// Includes a single system. Systems already included are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UninitializedReference`] if the system is not
    /// part of `model`.
    pub fn include(&mut self, model: &Model, system: SystemHandle) -> Result<(), ModelError> {
        if !model.contains(system) {
            return Err(ModelError::UninitializedReference {
                name: system.id().as_string(),
                phase: Phase::Views,
            });
        }
        if !self.elements.contains(&system) {
            self.elements.push(system);
        }
        Ok(())
    }

    /// Includes every system currently in `model`.
    pub fn include_all(&mut self, model: &Model) {
        for system in model.software_systems() {
            let handle = system.handle();
            if !self.elements.contains(&handle) {
                self.elements.push(handle);
            }
        }
    }

    /// Includes the elements the view's kind implies.
    ///
    /// A landscape view takes every system; a context view takes its subject
    /// and every system directly connected to it.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UninitializedReference`] if a context view's
    /// subject is not part of `model`.
    pub fn add_default_elements(&mut self, model: &Model) -> Result<(), ModelError> {
        match self.kind {
            ViewKind::SystemLandscape => {
                self.include_all(model);
                Ok(())
            }
            ViewKind::SystemContext(subject) => {
                self.include(model, subject)?;
                for neighbour in model.neighbours(subject) {
                    self.include(model, neighbour)?;
                }
                Ok(())
            }
        }
    }
}

/// The views of a workspace, keyed by unique view key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ViewSet {
    views: IndexMap<String, View>,
}

impl ViewSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a view covering the whole landscape.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidName`] for a blank key, [`ModelError::DuplicateView`]
    /// if the key is taken.
    pub fn add_system_landscape_view(
        &mut self,
        key: &str,
        description: &str,
    ) -> Result<&mut View, ModelError> {
        self.insert(key, ViewKind::SystemLandscape, description)
    }

    /// Registers a context view centred on `system`, which is included
    /// straight away.
    ///
    /// # Errors
    ///
    /// As [`ViewSet::add_system_landscape_view`], plus
    /// [`ModelError::UninitializedReference`] if `system` is not part of `model`.
    pub fn add_system_context_view(
        &mut self,
        model: &Model,
        system: SystemHandle,
        key: &str,
        description: &str,
    ) -> Result<&mut View, ModelError> {
        if !model.contains(system) {
            return Err(ModelError::UninitializedReference {
                name: system.id().as_string(),
                phase: Phase::Views,
            });
        }
        let view = self.insert(key, ViewKind::SystemContext(system), description)?;
        view.elements.push(system);
        Ok(view)
    }

    fn insert(
        &mut self,
        key: &str,
        kind: ViewKind,
        description: &str,
    ) -> Result<&mut View, ModelError> {
        if key.trim().is_empty() {
            return Err(ModelError::InvalidName {
                phase: Phase::Views,
            });
        }
        if self.views.contains_key(key) {
            return Err(ModelError::DuplicateView {
                key: key.to_string(),
            });
        }

        debug!(key, kind:?; "View added");
        let view = View {
            key: key.to_string(),
            kind,
            description: description.to_string(),
            elements: Vec::new(),
        };
        Ok(self.views.entry(key.to_string()).or_insert(view))
    }

    pub fn view(&self, key: &str) -> Option<&View> {
        self.views.get(key)
    }

    /// Views in registration order.
    pub fn views(&self) -> impl Iterator<Item = &View> {
        self.views.values()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
