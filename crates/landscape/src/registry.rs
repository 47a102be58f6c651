//! Name to handle lookup shared by the later definition rounds.
//!
//! The [`Registry`] is filled while software systems are registered and is
//! read-only afterwards. Relationship and view definitions use it to find
//! the systems other definitions created without knowing how or where they
//! were created.

use indexmap::IndexMap;

use landscape_core::{
    error::{ModelError, Phase},
    model::SystemHandle,
};

/// Systems registered during the model entities round, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    systems: IndexMap<String, SystemHandle>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a freshly registered system.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateDefinition`] if the name is already taken.
    pub(crate) fn register(
        &mut self,
        name: impl Into<String>,
        handle: SystemHandle,
    ) -> Result<(), ModelError> {
        let name = name.into();
        if self.systems.contains_key(&name) {
            return Err(ModelError::DuplicateDefinition { name });
        }
        self.systems.insert(name, handle);
        Ok(())
    }

    /// Returns the handle registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<SystemHandle> {
        self.systems.get(name).copied()
    }

    /// Returns the handle registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UninitializedReference`] naming the system and
    /// the phase that asked for it when nothing was registered under `name`.
    pub fn resolve(&self, name: &str, phase: Phase) -> Result<SystemHandle, ModelError> {
        self.get(name)
            .ok_or_else(|| ModelError::UninitializedReference {
                name: name.to_string(),
                phase,
            })
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.systems.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}
