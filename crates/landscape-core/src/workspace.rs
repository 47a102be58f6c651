//! The [`Workspace`]: a named model together with its views.

use serde::Serialize;

use crate::{model::Model, view::ViewSet};

/// Everything produced by one documentation build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Workspace {
    name: String,
    description: String,
    model: Model,
    views: ViewSet,
}

impl Workspace {
    /// Creates an empty workspace.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            model: Model::new(),
            views: ViewSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    pub fn views(&self) -> &ViewSet {
        &self.views
    }

    /// Borrows the model immutably and the views mutably at the same time,
    /// which is what view registration needs.
    pub fn views_mut(&mut self) -> (&Model, &mut ViewSet) {
        (&self.model, &mut self.views)
    }
}
